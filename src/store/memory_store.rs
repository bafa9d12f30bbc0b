use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::customer_store::{new_customer_id, CustomerStore};
use crate::domain::customer::Customer;

// ============================================================================
// In-Memory Customer Store
// ============================================================================
//
// Process-local store for development (CUSTOMER_STORE=memory) and tests.
//
// ============================================================================

#[derive(Default)]
pub struct InMemoryCustomerStore {
    customers: RwLock<HashMap<String, Customer>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>> {
        Ok(self.customers.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.values().find(|c| c.email == email).cloned())
    }

    async fn find_by_city(&self, city: &str) -> Result<Vec<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.values().filter(|c| c.city == city).cloned().collect())
    }

    async fn find_all(&self) -> Result<Vec<Customer>> {
        Ok(self.customers.read().await.values().cloned().collect())
    }

    async fn save(&self, mut customer: Customer) -> Result<Customer> {
        let id = customer.id.get_or_insert_with(new_customer_id).clone();

        self.customers.write().await.insert(id, customer.clone());
        Ok(customer)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool> {
        Ok(self.customers.read().await.contains_key(id))
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.customers.write().await.remove(id);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(email: &str, city: &str) -> Customer {
        Customer::new(None, "Jo", "Bloggs", email, "0113", "X", city)
    }

    #[tokio::test]
    async fn test_save_assigns_id_when_absent() {
        let store = InMemoryCustomerStore::new();

        let saved = store.save(customer("a@x.com", "Leeds")).await.unwrap();
        let id = saved.id.clone().unwrap();

        assert!(!id.is_empty());
        assert_eq!(store.find_by_id(&id).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_save_with_id_replaces() {
        let store = InMemoryCustomerStore::new();
        let mut saved = store.save(customer("a@x.com", "Leeds")).await.unwrap();

        saved.city = "York".to_string();
        store.save(saved.clone()).await.unwrap();

        assert_eq!(store.find_all().await.unwrap().len(), 1);
        let id = saved.id.unwrap();
        assert_eq!(store.find_by_id(&id).await.unwrap().unwrap().city, "York");
    }

    #[tokio::test]
    async fn test_lookups_are_case_sensitive() {
        let store = InMemoryCustomerStore::new();
        store.save(customer("a@x.com", "London")).await.unwrap();

        assert!(store.find_by_email("A@x.com").await.unwrap().is_none());
        assert!(store.find_by_email("a@x.com").await.unwrap().is_some());
        assert!(store.find_by_city("london").await.unwrap().is_empty());
        assert_eq!(store.find_by_city("London").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_exists_and_delete() {
        let store = InMemoryCustomerStore::new();
        let id = store.save(customer("a@x.com", "Leeds")).await.unwrap().id.unwrap();

        assert!(store.exists_by_id(&id).await.unwrap());
        store.delete_by_id(&id).await.unwrap();
        assert!(!store.exists_by_id(&id).await.unwrap());
        assert!(store.find_by_id(&id).await.unwrap().is_none());
    }
}
