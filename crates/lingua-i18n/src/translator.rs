//! Path resolution against the active locale.

use crate::args::{substitute, TranslationArgs};
use crate::catalog::{Catalog, CatalogBuilder};
use crate::locale::{ActiveLocale, LocaleSet, LocaleState};
use lingua_common::Result;
use lingua_config::I18nSettings;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Prepended to text resolved through the fallback locale.
pub const FALLBACK_PREFIX: &str = "Fallback: ";

/// Prepended to the composed primary key when nothing matches.
pub const MISSING_PREFIX: &str = "Translation missing ";

/// Resolves dotted paths to text.
///
/// Owns an immutable [`Catalog`] and the switchable [`LocaleState`].
#[derive(Debug)]
pub struct Translator {
    catalog: Catalog,
    state: LocaleState,
}

impl Translator {
    /// Build the catalog from disk and validate the initial locale and fallback.
    pub fn new(settings: &I18nSettings) -> Result<Self> {
        let catalog = CatalogBuilder::from_settings(settings).build()?;
        let translator = Self::from_catalog(
            catalog,
            LocaleSet::new(settings.locale_list.iter().cloned()),
            settings.initial_locale(),
            settings.initial_fallback(),
        )?;

        info!("Translator ready with locale {}", translator.state.current());
        Ok(translator)
    }

    /// Wrap an already built catalog.
    pub fn from_catalog(
        catalog: Catalog,
        locales: LocaleSet,
        locale: &str,
        fallback: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            catalog,
            state: LocaleState::new(locales, locale, fallback)?,
        })
    }

    /// Resolve `path` for the active locale.
    ///
    /// Looks up `{locale}.{path}`, then `{fallback}.{path}` (prefixed with
    /// [`FALLBACK_PREFIX`]), and substitutes `args` into whichever matched.
    /// When neither exists the result is `Translation missing {locale}.{path}`.
    pub fn translate(&self, path: &str, args: &TranslationArgs) -> String {
        let active = self.state.current();
        let primary_key = format!("{}.{}", active.locale(), path);

        if let Some(text) = self.catalog.get(&primary_key) {
            return substitute(text, args);
        }

        if let Some(fallback) = active.fallback() {
            let fallback_key = format!("{fallback}.{path}");
            if let Some(text) = self.catalog.get(&fallback_key) {
                debug!("{} not found, using {}", primary_key, fallback_key);
                return substitute(&format!("{FALLBACK_PREFIX}{text}"), args);
            }
        }

        warn!("Translation missing {}", primary_key);
        format!("{MISSING_PREFIX}{primary_key}")
    }

    /// Whether `path` resolves in the primary or fallback locale.
    pub fn has_translation(&self, path: &str) -> bool {
        let active = self.state.current();
        self.catalog.contains_key(&format!("{}.{}", active.locale(), path))
            || active
                .fallback()
                .is_some_and(|fallback| self.catalog.contains_key(&format!("{fallback}.{path}")))
    }

    /// Switch the active locale; see [`LocaleState::set_locale`].
    pub fn set_locale(&self, locale: &str, fallback: Option<&str>) -> Result<()> {
        self.state.set_locale(locale, fallback)
    }

    /// Snapshot of the active locale and fallback.
    pub fn active(&self) -> Arc<ActiveLocale> {
        self.state.current()
    }

    /// Current primary locale.
    pub fn locale(&self) -> String {
        self.state.current().locale().to_string()
    }

    /// Current fallback locale, if any.
    pub fn fallback(&self) -> Option<String> {
        self.state.current().fallback().map(String::from)
    }

    /// Configured locales.
    pub fn locales(&self) -> &LocaleSet {
        self.state.locales()
    }

    /// The flattened catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
