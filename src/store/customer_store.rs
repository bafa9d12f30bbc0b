use anyhow::Result;
use async_trait::async_trait;

use crate::domain::customer::Customer;

// ============================================================================
// Customer Store - persistence contract consumed by CustomerService
// ============================================================================
//
// Every call is atomic on its own. Nothing here makes a sequence of calls
// atomic (find_by_email followed by save can interleave with another writer).
//
// ============================================================================

#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>>;

    /// Exact, case-sensitive match
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>>;

    /// Exact, case-sensitive match. No ordering guarantee.
    async fn find_by_city(&self, city: &str) -> Result<Vec<Customer>>;

    /// No ordering guarantee
    async fn find_all(&self) -> Result<Vec<Customer>>;

    /// Inserts when `customer.id` is `None` (assigning a fresh id),
    /// replaces the stored document otherwise. Returns the stored entity.
    async fn save(&self, customer: Customer) -> Result<Customer>;

    async fn exists_by_id(&self, id: &str) -> Result<bool>;

    async fn delete_by_id(&self, id: &str) -> Result<()>;

    /// Backend label reported by the health endpoint
    fn backend(&self) -> &'static str;
}

/// Fresh document id for an unsaved entity
pub fn new_customer_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
