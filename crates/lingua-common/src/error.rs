//! Error types and utilities for Lingua

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for Lingua operations
pub type Result<T> = std::result::Result<T, LinguaError>;

/// Main error type for Lingua operations
#[derive(Error, Debug)]
pub enum LinguaError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the configuration
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A locale or fallback locale outside the configured locale set
    #[error("Invalid locale '{locale}': {message}")]
    InvalidLocale {
        /// The rejected locale identifier
        locale: String,
        /// Why it was rejected
        message: String,
    },

    /// A locale document could not be read
    #[error("Failed to load locale document {}: {source}", path.display())]
    LocaleLoad {
        /// Document path
        path: PathBuf,
        /// Read failure
        #[source]
        source: std::io::Error,
    },

    /// A locale document could not be parsed
    #[error("Failed to parse locale document {}: {source}", path.display())]
    Parse {
        /// Document path
        path: PathBuf,
        /// YAML syntax error
        #[source]
        source: serde_yaml::Error,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML errors outside of locale document loading
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        /// Error message
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl LinguaError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new invalid locale error
    pub fn invalid_locale(locale: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::InvalidLocale {
            locale: locale.into(),
            message: msg.into(),
        }
    }

    /// Create a locale load error for the document at `path`
    pub fn locale_load(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::LocaleLoad {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a parse error for the document at `path`
    pub fn parse(path: impl AsRef<Path>, source: serde_yaml::Error) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether this error was raised by locale validation
    pub const fn is_invalid_locale(&self) -> bool {
        matches!(self, Self::InvalidLocale { .. })
    }

    /// Whether this error is a configuration problem (including invalid locales)
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::InvalidLocale { .. })
    }
}
