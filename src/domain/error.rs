//! Domain Error Types
//!
//! Pure domain errors that don't depend on the harness or configuration.

use rust_decimal::Decimal;
use thiserror::Error;

/// Business rule violations surfaced by the ledger core.
///
/// Every condition here is local and recoverable by the caller; none is
/// process-fatal and none is retried or suppressed internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required account-creation input absent or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Amount is zero, negative, or not a number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Transaction type outside the recognized set
    #[error("Invalid transaction type: '{0}' (supported: 'deposit' and 'withdraw')")]
    InvalidTransactionType(String),

    /// Withdrawal exceeds the current balance
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },

    /// Lookup by account identifier found no match
    #[error("Account not found: {0}")]
    AccountNotFound(String),
}

impl DomainError {
    /// Create an insufficient funds error
    pub fn insufficient_funds(required: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            required,
            available,
        }
    }

    /// Create an invalid amount error
    pub fn invalid_amount(reason: impl Into<String>) -> Self {
        Self::InvalidAmount(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_funds_error() {
        let err = DomainError::insufficient_funds(Decimal::new(1500, 0), Decimal::new(1000, 0));

        assert!(err.to_string().contains("1500"));
        assert!(err.to_string().contains("1000"));
    }

    #[test]
    fn test_missing_field_error() {
        let err = DomainError::MissingField("email");

        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn test_invalid_transaction_type_error() {
        let err = DomainError::InvalidTransactionType("transfer".to_string());

        assert!(err.to_string().contains("transfer"));
        assert!(err.to_string().contains("deposit"));
    }
}
