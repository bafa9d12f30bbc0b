// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Business rules live here, independent of HTTP and of the storage backend.
// The service reaches storage only through the `CustomerStore` trait.
//
// ============================================================================

pub mod customer;
