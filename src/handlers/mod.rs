//! Use-case handlers module
//!
//! One handler per operation the ledger supports: opening accounts,
//! applying transactions, and producing statements.

mod commands;
mod open_account;
mod statement;
mod transaction;

pub use commands::{OpenAccountCommand, TransactionCommand};
pub use open_account::AccountFactory;
pub use statement::{Statement, StatementGenerator};
pub use transaction::{TransactionKind, TransactionProcessor};
