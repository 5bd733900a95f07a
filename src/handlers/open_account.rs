//! Account opening use case
//!
//! Validates customer input, draws fresh identifiers, and produces a new
//! zero-balance account. Nothing is persisted here; the caller decides where
//! the account and customer records go.

use crate::domain::{Account, AccountId, AccountNumber, Customer};
use crate::error::{AppError, AppResult};
use crate::idgen::IdGenerator;
use crate::store::AccountStore;

use super::OpenAccountCommand;

/// Default bound on generate-and-check identifier draws.
const DEFAULT_ID_MAX_ATTEMPTS: u32 = 8;

/// Factory for new accounts.
///
/// Identifier generation is injected, so deterministic generators can stand
/// in during tests and reproducible runs.
pub struct AccountFactory {
    generator: Box<dyn IdGenerator>,
    id_max_attempts: u32,
}

impl AccountFactory {
    pub fn new(generator: Box<dyn IdGenerator>) -> Self {
        Self {
            generator,
            id_max_attempts: DEFAULT_ID_MAX_ATTEMPTS,
        }
    }

    pub fn with_id_max_attempts(mut self, attempts: u32) -> Self {
        self.id_max_attempts = attempts.max(1);
        self
    }

    /// Execute the open-account command.
    ///
    /// The store is consulted only to keep freshly drawn identifiers unique;
    /// the new account is returned to the caller, not inserted.
    ///
    /// # Errors
    /// - `DomainError::MissingField` if name, email, or phone_number is empty
    /// - `AppError::IdentifierExhausted` if every draw collided
    pub fn create_account(
        &mut self,
        command: OpenAccountCommand,
        store: &AccountStore,
    ) -> AppResult<(Account, Customer)> {
        let customer = Customer::new(
            command.customer_id.clone(),
            command.name,
            command.email,
            command.phone_number,
        )?;

        let account_id = self.fresh_account_id(store)?;
        let account_number = self.fresh_account_number(store)?;

        let account = Account::open(account_id, command.customer_id, account_number);
        Ok((account, customer))
    }

    fn fresh_account_id(&mut self, store: &AccountStore) -> AppResult<AccountId> {
        for _ in 0..self.id_max_attempts {
            let candidate = AccountId::new(self.generator.next_id());
            if !store.contains_id(&candidate) {
                return Ok(candidate);
            }
        }

        Err(AppError::IdentifierExhausted {
            attempts: self.id_max_attempts,
        })
    }

    fn fresh_account_number(&mut self, store: &AccountStore) -> AppResult<AccountNumber> {
        for _ in 0..self.id_max_attempts {
            let candidate = AccountNumber::new(self.generator.next_id());
            if !store.contains_number(&candidate) {
                return Ok(candidate);
            }
        }

        Err(AppError::IdentifierExhausted {
            attempts: self.id_max_attempts,
        })
    }
}
