//! Configuration Loader
//!
//! Environment-aware loading: `batchwork.toml` is read first, then
//! `batchwork.{environment}.toml`, then `BATCHWORK_*` environment variables.
//! Missing files are skipped.

use super::error::ConfigResult;
use super::ServiceConfig;
use ::config::{Config, Environment, File};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use tracing::debug;

const ENV_PREFIX: &str = "BATCHWORK";
const BASE_FILE_NAME: &str = "batchwork";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with environment auto-detection
    pub fn load() -> ConfigResult<ServiceConfig> {
        Self::load_from_directory(None)
    }

    /// Load configuration from a specific directory
    pub fn load_from_directory(config_dir: Option<PathBuf>) -> ConfigResult<ServiceConfig> {
        let environment = Self::detect_environment();
        Self::load_with_overrides(config_dir, &environment, None)
    }

    /// Load configuration with an explicit environment name and, optionally, a
    /// fixed set of `BATCHWORK_*` variables used in place of the process environment
    pub fn load_with_overrides(
        config_dir: Option<PathBuf>,
        environment: &str,
        env_overrides: Option<HashMap<String, String>>,
    ) -> ConfigResult<ServiceConfig> {
        let config_directory = config_dir.unwrap_or_else(Self::default_config_directory);

        debug!(
            "Loading configuration for environment '{}' from directory: {}",
            environment,
            config_directory.display()
        );

        let base_file = config_directory.join(format!("{BASE_FILE_NAME}.toml"));
        let env_file = config_directory.join(format!("{BASE_FILE_NAME}.{environment}.toml"));

        let settings = Config::builder()
            .add_source(File::from(base_file).required(false))
            .add_source(File::from(env_file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env_overrides),
            )
            .build()?;

        let config: ServiceConfig = settings.try_deserialize()?;
        config.validate()?;

        debug!(
            bind_address = %config.bind_address,
            storage_backend = ?config.storage_backend,
            processing_delay_ms = config.processing_delay_ms,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Current environment name, lowercased
    pub fn detect_environment() -> String {
        env::var("BATCHWORK_ENV")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string())
            .to_lowercase()
    }

    fn default_config_directory() -> PathBuf {
        env::var("BATCHWORK_CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"))
    }
}
