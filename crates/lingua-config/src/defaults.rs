//! Default values for every settings section.

use crate::schema::{Config, I18nSettings, LoggingSettings, DEFAULT_LOCALE};

impl Default for Config {
    fn default() -> Self {
        Self {
            i18n: I18nSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            locale_list: vec![DEFAULT_LOCALE.to_string()],
            locale_path: "locales".into(),
            locale: None,
            locale_fallback: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}
