//! Statement use case
//!
//! Renders a textual summary of one account's current state. No transaction
//! history appears because none is recorded anywhere in this ledger.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{AccountId, AccountNumber, CustomerId, DomainError};
use crate::error::AppResult;
use crate::store::AccountStore;

/// Snapshot of one account, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    pub account_id: AccountId,
    pub account_number: AccountNumber,
    pub customer_id: CustomerId,
    pub balance: Decimal,
    pub generated_at: DateTime<Utc>,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account Statement for Account ID: {}", self.account_id)?;
        writeln!(f, "  Account number: {}", self.account_number)?;
        writeln!(f, "  Customer ID:    {}", self.customer_id)?;
        writeln!(f, "  Balance:        {}", self.balance)?;
        writeln!(f, "  Generated at:   {}", self.generated_at.to_rfc3339())?;
        write!(f, "  No transactions on record.")
    }
}

/// Builds statements from the account store.
#[derive(Debug, Default)]
pub struct StatementGenerator;

impl StatementGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Look up the account and build its statement.
    ///
    /// # Errors
    /// - `DomainError::AccountNotFound` if the id is absent from the store
    pub fn generate(&self, store: &AccountStore, account_id: &AccountId) -> AppResult<Statement> {
        let account = store
            .find_by_id(account_id)
            .ok_or_else(|| DomainError::AccountNotFound(account_id.to_string()))?;

        Ok(Statement {
            account_id: account.account_id().clone(),
            account_number: account.account_number().clone(),
            customer_id: account.customer_id().clone(),
            balance: account.balance(),
            generated_at: Utc::now(),
        })
    }
}
