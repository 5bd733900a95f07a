//! Command definitions
//!
//! Commands carry caller intent into the use-case layer. Amounts and
//! transaction kinds arrive as raw text and are validated where they are
//! consumed.

use serde::{Deserialize, Serialize};

use crate::domain::CustomerId;

/// Command to open a new account for a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAccountCommand {
    pub customer_id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

impl OpenAccountCommand {
    pub fn new(
        customer_id: CustomerId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            customer_id,
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        }
    }
}

/// Command to apply a deposit or withdrawal to one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionCommand {
    /// Amount as text, parsed and validated by the processor
    pub amount: String,

    /// Transaction kind: "deposit" or "withdraw"
    pub kind: String,
}

impl TransactionCommand {
    pub fn new(amount: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            kind: kind.into(),
        }
    }

    pub fn deposit(amount: impl Into<String>) -> Self {
        Self::new(amount, "deposit")
    }

    pub fn withdraw(amount: impl Into<String>) -> Self {
        Self::new(amount, "withdraw")
    }
}
