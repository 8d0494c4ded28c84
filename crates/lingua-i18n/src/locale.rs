//! Configured locale set and the switchable active locale.

use arc_swap::ArcSwap;
use lingua_common::{LinguaError, Result};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

const INVALID_LOCALE: &str = "Locale has invalid language";
const INVALID_FALLBACK: &str = "Fallback language has invalid language";

/// The locales a catalog was built for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSet {
    locales: Vec<String>,
}

impl LocaleSet {
    /// Create a set from locale identifiers, keeping the first of any duplicates.
    pub fn new<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Vec::new();
        for locale in locales {
            let locale = locale.into();
            if !set.contains(&locale) {
                set.push(locale);
            }
        }
        Self { locales: set }
    }

    /// Whether `locale` is a non-empty member of the set.
    pub fn contains(&self, locale: &str) -> bool {
        !locale.is_empty() && self.locales.iter().any(|l| l == locale)
    }

    /// Locales in configuration order.
    pub fn as_slice(&self) -> &[String] {
        &self.locales
    }
}

/// Current primary locale and optional fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLocale {
    locale: String,
    fallback: Option<String>,
}

impl ActiveLocale {
    /// Primary locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Fallback locale, if any.
    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }
}

impl fmt::Display for ActiveLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fallback {
            Some(fallback) => write!(f, "{} (fallback {})", self.locale, fallback),
            None => write!(f, "{}", self.locale),
        }
    }
}

/// Shared, switchable locale state.
///
/// Reads are lock-free snapshots. A switch is two separate stores (primary,
/// then fallback), so callers that switch concurrently with reads must
/// serialize those calls themselves.
#[derive(Debug)]
pub struct LocaleState {
    locales: LocaleSet,
    active: ArcSwap<ActiveLocale>,
}

impl LocaleState {
    /// Create the state, validating the initial locale and fallback.
    ///
    /// An empty fallback means no fallback.
    pub fn new(locales: LocaleSet, locale: &str, fallback: Option<&str>) -> Result<Self> {
        if !locales.contains(locale) {
            return Err(LinguaError::invalid_locale(
                locale,
                "Initial locale has invalid language",
            ));
        }
        let fallback = normalize(fallback);
        if let Some(fallback) = fallback {
            if !locales.contains(fallback) {
                return Err(LinguaError::invalid_locale(fallback, INVALID_FALLBACK));
            }
        }

        Ok(Self {
            locales,
            active: ArcSwap::from_pointee(ActiveLocale {
                locale: locale.to_string(),
                fallback: fallback.map(String::from),
            }),
        })
    }

    /// Snapshot of the active locale.
    pub fn current(&self) -> Arc<ActiveLocale> {
        self.active.load_full()
    }

    /// Configured locales.
    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    /// Switch the primary locale and fallback.
    ///
    /// `locale` is checked first; if it is rejected nothing changes. The
    /// primary locale is then committed before `fallback` is checked, so an
    /// invalid fallback returns an error with the new primary locale (and the
    /// previous fallback) in effect. `None` or an empty fallback clears it.
    pub fn set_locale(&self, locale: &str, fallback: Option<&str>) -> Result<()> {
        if !self.locales.contains(locale) {
            return Err(LinguaError::invalid_locale(locale, INVALID_LOCALE));
        }

        self.active.rcu(|current| ActiveLocale {
            locale: locale.to_string(),
            fallback: current.fallback.clone(),
        });
        debug!("Primary locale switched to {}", locale);

        let fallback = normalize(fallback);
        if let Some(fallback) = fallback {
            if !self.locales.contains(fallback) {
                return Err(LinguaError::invalid_locale(fallback, INVALID_FALLBACK));
            }
        }

        self.active.rcu(|current| ActiveLocale {
            locale: current.locale.clone(),
            fallback: fallback.map(String::from),
        });
        info!("Active locale is now {}", self.current());
        Ok(())
    }
}

fn normalize(fallback: Option<&str>) -> Option<&str> {
    fallback.filter(|f| !f.is_empty())
}
