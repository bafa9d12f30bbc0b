// ============================================================================
// HTTP Layer
// ============================================================================
//
// - customer_controller: /api/v1/customers routes
// - errors:              CustomerError → HTTP status
// - server:              /health, /metrics and server bootstrap
//
// ============================================================================

mod customer_controller;
mod errors;
mod server;

pub use server::start_server;
