//! Configuration errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while parsing or validating a simulation config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config parse error: {message}")]
    ParseError { message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl ConfigError {
    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
