//! Amount and Balance types
//!
//! Domain primitives for monetary values. Amounts are validated at
//! construction time, so invalid values cannot exist past this boundary.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Amount represents a validated transaction amount.
///
/// # Invariants
/// - Value is always strictly positive (> 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(Decimal);

impl Amount {
    /// Create a new Amount with validation.
    ///
    /// # Errors
    /// - `DomainError::InvalidAmount` if value <= 0
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value <= Decimal::ZERO {
            return Err(DomainError::invalid_amount(format!(
                "must be greater than 0 (got {value})"
            )));
        }

        Ok(Self(value))
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s)
            .map_err(|e| DomainError::invalid_amount(format!("'{s}': {e}")))?;
        Amount::new(decimal)
    }
}

impl TryFrom<String> for Amount {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Amount::from_str(&value)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.0.to_string()
    }
}

/// Balance represents an account balance. Unlike Amount, Balance can be zero.
///
/// `debit` is the single authority for the sufficient-funds rule; no other
/// code in the crate compares a balance against a withdrawal amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance(Decimal);

impl Balance {
    /// Create a zero balance
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Check if balance covers the amount
    pub fn is_sufficient_for(&self, amount: &Amount) -> bool {
        self.0 >= amount.value()
    }

    /// Add amount to balance
    pub fn credit(&self, amount: &Amount) -> Balance {
        Self(self.0 + amount.value())
    }

    /// Subtract amount from balance
    ///
    /// # Errors
    /// - `DomainError::InsufficientFunds` if the amount exceeds the balance
    pub fn debit(&self, amount: &Amount) -> Result<Balance, DomainError> {
        if !self.is_sufficient_for(amount) {
            return Err(DomainError::insufficient_funds(amount.value(), self.0));
        }

        Ok(Self(self.0 - amount.value()))
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_positive() {
        let amount = Amount::new(dec!(100));
        assert!(amount.is_ok());
        assert_eq!(amount.unwrap().value(), dec!(100));
    }

    #[test]
    fn test_amount_zero_rejected() {
        let amount = Amount::new(Decimal::ZERO);
        assert!(matches!(amount, Err(DomainError::InvalidAmount(_))));
    }

    #[test]
    fn test_amount_negative_rejected() {
        let amount = Amount::new(dec!(-100));
        assert!(matches!(amount, Err(DomainError::InvalidAmount(_))));
    }

    #[test]
    fn test_amount_from_str() {
        let amount: Result<Amount, _> = "123.456".parse();
        assert!(amount.is_ok());
        assert_eq!(amount.unwrap().value(), dec!(123.456));
    }

    #[test]
    fn test_amount_from_str_rejects_garbage() {
        for raw in ["abc", "", "12,5", "-3"] {
            let result: Result<Amount, _> = raw.parse();
            assert!(
                matches!(result, Err(DomainError::InvalidAmount(_))),
                "expected InvalidAmount for '{raw}'"
            );
        }
    }

    #[test]
    fn test_balance_credit_debit() {
        let balance = Balance::zero();
        let amount = Amount::new(dec!(100)).unwrap();

        let balance = balance.credit(&amount);
        assert_eq!(balance.value(), dec!(100));

        let withdraw = Amount::new(dec!(30)).unwrap();
        let balance = balance.debit(&withdraw).unwrap();
        assert_eq!(balance.value(), dec!(70));
    }

    #[test]
    fn test_balance_insufficient() {
        let balance = Balance::zero().credit(&Amount::new(dec!(50)).unwrap());
        let amount = Amount::new(dec!(100)).unwrap();

        assert!(!balance.is_sufficient_for(&amount));

        let result = balance.debit(&amount);
        assert!(matches!(
            result,
            Err(DomainError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn test_balance_exact_debit() {
        let balance = Balance::zero().credit(&Amount::new(dec!(100)).unwrap());
        let amount = Amount::new(dec!(100)).unwrap();

        let balance = balance.debit(&amount).unwrap();
        assert_eq!(balance.value(), Decimal::ZERO);
    }
}
