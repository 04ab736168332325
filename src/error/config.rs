//! Configuration errors.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// An environment variable or flag holds an unusable value.
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// A required setting is missing.
    Missing { key: String },
}

impl ConfigError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::InvalidValue {
                key,
                value,
                expected,
            } => format!("{} is set to '{}', expected {}.", key, value, expected),
            ConfigError::Missing { key } => format!("{} must be set.", key),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidValue { .. } => "E_CONFIG_INVALID",
            ConfigError::Missing { .. } => "E_CONFIG_MISSING",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value, .. } => {
                write!(f, "invalid value for {}: {}", key, value)
            }
            ConfigError::Missing { key } => write!(f, "missing setting: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}
