//! Domain module
//!
//! Core domain types and business rules.

pub mod account;
pub mod amount;
pub mod customer;
pub mod error;
pub mod ids;

pub use account::Account;
pub use amount::{Amount, Balance};
pub use customer::Customer;
pub use error::DomainError;
pub use ids::{AccountId, AccountNumber, CustomerId};
