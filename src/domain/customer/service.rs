use std::sync::Arc;

use crate::store::CustomerStore;

use super::dto::{to_response_list, CustomerRequestDto, CustomerResponseDto};
use super::errors::CustomerError;

// ============================================================================
// Customer Service
// ============================================================================
//
// Orchestrates: Request DTO → duplicate/existence checks → Store → Response DTO
//
// Check-then-write sequences are not atomic. Two concurrent creates with the
// same email can both pass the duplicate check, and update never re-checks
// email uniqueness.
//
// ============================================================================

pub type CustomerResult<T> = Result<T, CustomerError>;

#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    pub fn store_backend(&self) -> &'static str {
        self.store.backend()
    }

    pub async fn create_customer(&self, request: CustomerRequestDto) -> CustomerResult<CustomerResponseDto> {
        tracing::debug!(email = %request.email, "Creating new customer");

        if self.store.find_by_email(&request.email).await?.is_some() {
            tracing::warn!(email = %request.email, "Rejected duplicate customer");
            return Err(CustomerError::Duplicate(request.email));
        }

        let saved = self.store.save(request.into_entity()).await?;

        tracing::info!(customer_id = ?saved.id, "✅ Customer created");
        Ok(saved.into())
    }

    pub async fn get_customer_by_id(&self, id: &str) -> CustomerResult<CustomerResponseDto> {
        let customer = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(customer.into())
    }

    pub async fn get_all_customers(&self) -> CustomerResult<Vec<CustomerResponseDto>> {
        tracing::debug!("Fetching all customers");
        let customers = self.store.find_all().await?;
        Ok(to_response_list(customers))
    }

    pub async fn update_customer(
        &self,
        id: &str,
        request: CustomerRequestDto,
    ) -> CustomerResult<CustomerResponseDto> {
        tracing::debug!(customer_id = %id, "Updating customer");

        let mut customer = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        request.apply_to(&mut customer);
        let updated = self.store.save(customer).await?;

        tracing::info!(customer_id = %id, "✅ Customer updated");
        Ok(updated.into())
    }

    pub async fn delete_customer(&self, id: &str) -> CustomerResult<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(not_found(id));
        }

        self.store.delete_by_id(id).await?;

        tracing::info!(customer_id = %id, "🗑️ Customer deleted");
        Ok(())
    }

    pub async fn get_customers_by_city(&self, city: &str) -> CustomerResult<Vec<CustomerResponseDto>> {
        tracing::debug!(city = %city, "Fetching customers from city");
        let customers = self.store.find_by_city(city).await?;
        Ok(to_response_list(customers))
    }
}

fn not_found(id: &str) -> CustomerError {
    tracing::warn!(customer_id = %id, "Customer not found");
    CustomerError::NotFound(id.to_string())
}
