//! Configuration loading from TOML/YAML files and the environment.

use crate::schema::Config;
use lingua_common::{with_context, LinguaError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Comma-separated list overriding `i18n.locale_list`.
pub const ENV_LOCALES: &str = "LINGUA_LOCALES";
/// Overrides `i18n.locale_path`.
pub const ENV_LOCALE_PATH: &str = "LINGUA_LOCALE_PATH";
/// Overrides `i18n.locale`.
pub const ENV_LOCALE: &str = "LINGUA_LOCALE";
/// Overrides `i18n.locale_fallback`; an empty value clears the fallback.
pub const ENV_LOCALE_FALLBACK: &str = "LINGUA_LOCALE_FALLBACK";
/// Overrides `logging.level`.
pub const ENV_LOG_LEVEL: &str = "LINGUA_LOG_LEVEL";

/// Supported configuration file syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.yml` / `.yaml`
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("yml" | "yaml") => Ok(Self::Yaml),
            _ => Err(LinguaError::config(format!(
                "Unsupported configuration file extension: {}",
                path.display()
            ))),
        }
    }
}

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file (or defaults when it is absent), applies environment
    /// overrides and validates the result.
    pub fn load(&self) -> Result<Config> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigLoader::load`] with an explicit environment lookup.
    pub fn load_with_env<F>(&self, env: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if self.path.exists() {
            let content = std::fs::read_to_string(&self.path).map_err(|e| {
                with_context!(e, "Failed to read configuration file {}", self.path.display())
            })?;
            let config = parse_config(&content, ConfigFormat::from_path(&self.path)?)?;
            info!("Loaded configuration from {}", self.path.display());
            config
        } else {
            warn!(
                "Configuration file {} not found, using defaults",
                self.path.display()
            );
            Config::default()
        };

        apply_env_overrides(&mut config, env);
        config.validate()?;
        Ok(config)
    }
}

/// Parse configuration text in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config> {
    let config = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(config)
}

/// Apply `LINGUA_*` overrides from `env` onto `config`.
pub fn apply_env_overrides<F>(config: &mut Config, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(locales) = env(ENV_LOCALES) {
        config.i18n.locale_list = locales
            .split(',')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
        debug!("{ENV_LOCALES} override: {:?}", config.i18n.locale_list);
    }

    if let Some(path) = env(ENV_LOCALE_PATH) {
        debug!("{ENV_LOCALE_PATH} override: {path}");
        config.i18n.locale_path = path.into();
    }

    if let Some(locale) = env(ENV_LOCALE) {
        debug!("{ENV_LOCALE} override: {locale}");
        config.i18n.locale = Some(locale);
    }

    if let Some(fallback) = env(ENV_LOCALE_FALLBACK) {
        debug!("{ENV_LOCALE_FALLBACK} override: {fallback:?}");
        config.i18n.locale_fallback = Some(fallback).filter(|f| !f.is_empty());
    }

    if let Some(level) = env(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }
}
