//! Transaction use case
//!
//! Parses and routes deposit/withdraw requests. All balance rules live on
//! the account itself; this layer never re-checks them, so validation has a
//! single authority.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Account, DomainError};
use crate::error::AppResult;

use super::TransactionCommand;

/// Recognized transaction kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(Self::Deposit),
            "withdraw" => Ok(Self::Withdraw),
            other => Err(DomainError::InvalidTransactionType(other.to_string())),
        }
    }
}

/// Applies validated transactions to accounts.
#[derive(Debug, Default)]
pub struct TransactionProcessor;

impl TransactionProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Validate and apply a transaction command to the account.
    ///
    /// On success the account has been mutated in place; there is no other
    /// return value.
    ///
    /// # Errors
    /// - `DomainError::InvalidTransactionType` for an unrecognized kind
    /// - `DomainError::InvalidAmount` if the amount is not a positive number
    /// - `DomainError::InsufficientFunds` for an uncovered withdrawal
    pub fn make_transaction(
        &self,
        account: &mut Account,
        command: &TransactionCommand,
    ) -> AppResult<()> {
        let kind: TransactionKind = command.kind.parse()?;
        let amount = Self::parse_amount(&command.amount)?;
        self.apply(account, amount, kind)
    }

    /// Apply an already-parsed transaction.
    pub fn apply(
        &self,
        account: &mut Account,
        amount: Decimal,
        kind: TransactionKind,
    ) -> AppResult<()> {
        match kind {
            TransactionKind::Deposit => account.deposit(amount)?,
            TransactionKind::Withdraw => account.withdraw(amount)?,
        }

        Ok(())
    }

    fn parse_amount(raw: &str) -> Result<Decimal, DomainError> {
        Decimal::from_str(raw).map_err(|e| DomainError::invalid_amount(format!("'{raw}': {e}")))
    }
}
