//! Account model
//!
//! Account is the balance-bearing ledger entry. The balance is mutated only
//! through `deposit` and `withdraw`, which check their rules before touching
//! state, so a failed operation always leaves the balance unchanged.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, AccountNumber, Amount, Balance, CustomerId, DomainError};

/// A balance-bearing ledger entry owned by one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account id (store lookup key)
    account_id: AccountId,

    /// Owning customer's id (non-owning reference)
    customer_id: CustomerId,

    /// Public account number, distinct namespace from the id
    account_number: AccountNumber,

    /// Current balance, never negative
    balance: Balance,

    /// When the account was opened
    opened_at: DateTime<Utc>,
}

impl Account {
    /// Open a new account with a zero balance.
    ///
    /// Accounts are created exclusively through the account factory, so this
    /// constructor stays crate-private.
    pub(crate) fn open(
        account_id: AccountId,
        customer_id: CustomerId,
        account_number: AccountNumber,
    ) -> Self {
        Self {
            account_id,
            customer_id,
            account_number,
            balance: Balance::zero(),
            opened_at: Utc::now(),
        }
    }

    /// Increase the balance by `amount`.
    ///
    /// # Errors
    /// - `DomainError::InvalidAmount` if `amount <= 0`
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), DomainError> {
        let amount = Amount::new(amount)?;
        self.balance = self.balance.credit(&amount);
        Ok(())
    }

    /// Decrease the balance by `amount`.
    ///
    /// # Errors
    /// - `DomainError::InvalidAmount` if `amount <= 0`
    /// - `DomainError::InsufficientFunds` if the balance does not cover it
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), DomainError> {
        let amount = Amount::new(amount)?;
        self.balance = self.balance.debit(&amount)?;
        Ok(())
    }

    /// Current balance, no side effect.
    pub fn balance(&self) -> Decimal {
        self.balance.value()
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }
}
