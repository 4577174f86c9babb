//! # Service Configuration
//!
//! Layered configuration for the batch service: built-in defaults, an optional
//! TOML file, then `BATCHWORK_`-prefixed environment variables.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use batchwork_core::config::ConfigLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::load()?;
//! println!("processing delay: {:?}", config.processing_delay());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigLoader;

/// Which item store the service runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Postgres,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub bind_address: String,
    pub storage_backend: StorageBackend,
    pub database_url: String,
    pub database_max_connections: u32,
    /// Simulated external latency applied to every item before lookup
    pub processing_delay_ms: u64,
    pub request_timeout_ms: u64,
    pub log_json: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            storage_backend: StorageBackend::Memory,
            database_url: "postgresql://localhost/batchwork_development".to_string(),
            database_max_connections: 10,
            processing_delay_ms: 1000,
            request_timeout_ms: 30000,
            log_json: false,
        }
    }
}

impl ServiceConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.bind_address.trim().is_empty() {
            return Err(ConfigurationError::invalid_value(
                "bind_address",
                self.bind_address.clone(),
                "must not be empty",
            ));
        }

        if self.database_max_connections == 0 {
            return Err(ConfigurationError::invalid_value(
                "database_max_connections",
                "0",
                "must be at least 1",
            ));
        }

        if self.storage_backend == StorageBackend::Postgres && self.database_url.trim().is_empty()
        {
            return Err(ConfigurationError::invalid_value(
                "database_url",
                self.database_url.clone(),
                "required when storage_backend is postgres",
            ));
        }

        Ok(())
    }
}
