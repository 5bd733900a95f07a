//! bank_ledger Library
//!
//! Minimal in-memory banking ledger: account creation, deposits and
//! withdrawals, and account statements. Re-exports the types the binary and
//! integration tests use.

pub mod domain;
pub mod handlers;
pub mod idgen;
pub mod store;

// Modules the binary also needs
pub mod config;
mod error;

pub use config::{Config, ConfigError};
pub use error::{AppError, AppResult};

pub use domain::{
    Account, AccountId, AccountNumber, Amount, Balance, Customer, CustomerId, DomainError,
};
pub use handlers::{
    AccountFactory, OpenAccountCommand, Statement, StatementGenerator, TransactionCommand,
    TransactionKind, TransactionProcessor,
};
pub use idgen::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use store::{AccountStore, CustomerStore};
