//! Configuration schema definitions using serde.

use lingua_common::{LinguaError, LogFormat, LoggingConfig, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for Lingua.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locale settings.
    pub i18n: I18nSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Locale settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nSettings {
    /// Supported locale identifiers; one document per entry is loaded.
    pub locale_list: Vec<String>,
    /// Directory holding the `{locale}.yml` documents.
    pub locale_path: PathBuf,
    /// Initial active locale. `None` means [`DEFAULT_LOCALE`].
    pub locale: Option<String>,
    /// Initial fallback locale. `None` or an empty string means no fallback.
    pub locale_fallback: Option<String>,
}

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

impl I18nSettings {
    /// Locale active at startup.
    pub fn initial_locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    /// Fallback active at startup, with empty strings treated as unset.
    pub fn initial_fallback(&self) -> Option<&str> {
        self.locale_fallback.as_deref().filter(|f| !f.is_empty())
    }

    /// Whether `locale` is one of the configured locales.
    pub fn supports(&self, locale: &str) -> bool {
        self.locale_list.iter().any(|l| l == locale)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `lingua_i18n=debug`.
    pub level: String,
    /// One of `pretty`, `compact`, `json`.
    pub format: String,
    /// Optional log file; stderr when unset.
    pub file: Option<String>,
}

impl LoggingSettings {
    /// Convert into the runtime logging configuration.
    pub fn to_logging_config(&self) -> Result<LoggingConfig> {
        let format: LogFormat = self
            .format
            .parse()
            .map_err(|e| LinguaError::config_with_source("Invalid logging.format", e))?;

        Ok(LoggingConfig {
            level: self.level.clone(),
            format,
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        })
    }
}
