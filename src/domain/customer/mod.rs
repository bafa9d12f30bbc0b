// ============================================================================
// Customer Domain
// ============================================================================
//
// - Entity (Customer, the stored document)
// - DTOs (request/response shapes and their translations)
// - Errors (CustomerError)
// - Service (CustomerService, the business rules)
//
// ============================================================================

pub mod entity;
pub mod dto;
pub mod errors;
pub mod service;

// Re-export for convenience
pub use entity::*;
pub use dto::*;
pub use errors::*;
pub use service::*;
