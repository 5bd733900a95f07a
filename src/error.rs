//! Error handling module
//!
//! Centralized application error type for the use-case layer and the
//! demonstration harness.

use crate::config::ConfigError;
use crate::domain::DomainError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Business rule violation from the ledger core
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Fresh identifier generation kept colliding with stored accounts
    #[error("Could not draw an unused identifier after {attempts} attempts")]
    IdentifierExhausted { attempts: u32 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
