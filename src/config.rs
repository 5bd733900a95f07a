//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bound on generate-and-check identifier draws per identifier
    pub id_max_attempts: u32,

    /// Optional RNG seed for reproducible identifier generation
    pub rng_seed: Option<u64>,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let id_max_attempts = env::var("LEDGER_ID_MAX_ATTEMPTS")
            .unwrap_or_else(|_| "8".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("LEDGER_ID_MAX_ATTEMPTS"))?;

        let rng_seed = match env::var("LEDGER_RNG_SEED") {
            Ok(raw) => Some(
                raw.parse()
                    .map_err(|_| ConfigError::InvalidValue("LEDGER_RNG_SEED"))?,
            ),
            Err(_) => None,
        };

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Ok(Self {
            id_max_attempts,
            rng_seed,
            environment,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
