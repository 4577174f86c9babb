use thiserror::Error;

/// Configuration loading and validation failures
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConfigurationError {
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

pub type ConfigResult<T> = std::result::Result<T, ConfigurationError>;
