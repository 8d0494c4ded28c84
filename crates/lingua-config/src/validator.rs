//! Runtime validation of loaded settings.

use crate::schema::{Config, I18nSettings};
use lingua_common::{LinguaError, Result};
use std::collections::HashSet;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<()> {
        config.validate()
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.i18n.validate()?;
        self.logging.to_logging_config()?;
        Ok(())
    }
}

impl I18nSettings {
    /// Checks the locale list and that the initial locale and fallback belong to it.
    pub fn validate(&self) -> Result<()> {
        if self.locale_list.is_empty() {
            return Err(LinguaError::config("locale_list cannot be empty"));
        }

        let mut seen = HashSet::new();
        for locale in &self.locale_list {
            if locale.is_empty() {
                return Err(LinguaError::config("locale_list cannot contain empty locales"));
            }
            if locale.contains('.') {
                return Err(LinguaError::config(format!(
                    "Locale '{locale}' cannot contain '.'"
                )));
            }
            if !seen.insert(locale.as_str()) {
                return Err(LinguaError::config(format!(
                    "Locale '{locale}' is listed more than once"
                )));
            }
        }

        if self.locale_path.as_os_str().is_empty() {
            return Err(LinguaError::config("locale_path cannot be empty"));
        }

        let initial = self.initial_locale();
        if !self.supports(initial) {
            return Err(LinguaError::invalid_locale(
                initial,
                "Initial locale has invalid language",
            ));
        }

        if let Some(fallback) = self.initial_fallback() {
            if !self.supports(fallback) {
                return Err(LinguaError::invalid_locale(
                    fallback,
                    "Fallback language has invalid language",
                ));
            }
        }

        Ok(())
    }
}
