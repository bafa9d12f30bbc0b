use serde::{Deserialize, Serialize};

use super::entity::Customer;

// ============================================================================
// Customer DTOs - boundary shapes
// ============================================================================
//
// Request and response bodies for the HTTP layer, plus the field-by-field
// translations to and from the `Customer` entity.
//
// ============================================================================

/// Body accepted by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerRequestDto {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub gender: String,
    pub city: String,
    pub phone: String,
}

/// Body returned for every customer read or write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponseDto {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub gender: String,
    pub city: String,
    pub phone: String,
}

impl CustomerRequestDto {
    /// Builds an unsaved entity; the store assigns the id.
    pub fn into_entity(self) -> Customer {
        Customer {
            id: None,
            firstname: self.firstname,
            lastname: self.lastname,
            email: self.email,
            phone: self.phone,
            gender: self.gender,
            city: self.city,
        }
    }

    /// Overwrites every mutable field of `customer`. The id is untouched.
    pub fn apply_to(self, customer: &mut Customer) {
        customer.firstname = self.firstname;
        customer.lastname = self.lastname;
        customer.email = self.email;
        customer.gender = self.gender;
        customer.city = self.city;
        customer.phone = self.phone;
    }
}

impl From<Customer> for CustomerResponseDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.unwrap_or_default(),
            firstname: customer.firstname,
            lastname: customer.lastname,
            email: customer.email,
            gender: customer.gender,
            city: customer.city,
            phone: customer.phone,
        }
    }
}

pub fn to_response_list(customers: Vec<Customer>) -> Vec<CustomerResponseDto> {
    customers.into_iter().map(CustomerResponseDto::from).collect()
}
