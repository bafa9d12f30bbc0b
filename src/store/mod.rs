// ============================================================================
// Store Layer - Customer persistence
// ============================================================================
//
// `CustomerStore` is the contract the service depends on. Backends:
// - ScyllaCustomerStore   (document table in ScyllaDB)
// - InMemoryCustomerStore (process-local, development and tests)
//
// ============================================================================

mod customer_store;
mod memory_store;
mod scylla_store;

pub use customer_store::CustomerStore;
pub use memory_store::InMemoryCustomerStore;
pub use scylla_store::ScyllaCustomerStore;
