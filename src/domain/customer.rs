//! Customer record
//!
//! Plain identity record. Customers and accounts are linked only through a
//! shared customer id; nothing else ties them together.

use serde::{Deserialize, Serialize};

use crate::domain::{CustomerId, DomainError};

/// A named contact record associated with accounts via a shared identifier.
///
/// All fields are immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    customer_id: CustomerId,
    name: String,
    email: String,
    phone_number: String,
}

impl Customer {
    /// Build a customer, rejecting empty contact fields.
    ///
    /// This is the single authority for the non-empty rule on
    /// name/email/phone_number.
    pub fn new(
        customer_id: CustomerId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let email = email.into();
        let phone_number = phone_number.into();

        if name.is_empty() {
            return Err(DomainError::MissingField("name"));
        }
        if email.is_empty() {
            return Err(DomainError::MissingField("email"));
        }
        if phone_number.is_empty() {
            return Err(DomainError::MissingField("phone_number"));
        }

        Ok(Self {
            customer_id,
            name,
            email,
            phone_number,
        })
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}
