//! Process-wide translator.
//!
//! Applications that want a single translator for the whole process call
//! [`init`] once at startup and then use the free functions here, or the
//! [`t!`](crate::t) macro, from anywhere.

use crate::args::TranslationArgs;
use crate::errors::{ErrorMap, HandledErrors};
use crate::translator::{Translator, MISSING_PREFIX};
use lingua_common::{LinguaError, Result};
use lingua_config::I18nSettings;
use once_cell::sync::OnceCell;
use tracing::error;

const ALREADY_INITIALIZED: &str = "Translator already initialized";

/// Fallback applied by [`set_locale`] when the caller does not name one.
pub const DEFAULT_FALLBACK: &str = "en";

static TRANSLATOR: OnceCell<Translator> = OnceCell::new();

/// Build the process-wide translator from `settings`.
///
/// Fails if the catalog cannot be built, the initial locales are invalid, or
/// a translator is already installed.
pub fn init(settings: &I18nSettings) -> Result<&'static Translator> {
    if TRANSLATOR.get().is_some() {
        return Err(LinguaError::config(ALREADY_INITIALIZED));
    }
    install(Translator::new(settings)?)
}

/// Install an already built translator as the process-wide one.
pub fn install(translator: Translator) -> Result<&'static Translator> {
    TRANSLATOR
        .set(translator)
        .map_err(|_| LinguaError::config(ALREADY_INITIALIZED))?;
    self::translator()
}

/// The process-wide translator.
pub fn translator() -> Result<&'static Translator> {
    TRANSLATOR
        .get()
        .ok_or_else(|| LinguaError::config("Translator has not been initialized"))
}

/// Whether [`init`] or [`install`] has run.
pub fn is_initialized() -> bool {
    TRANSLATOR.get().is_some()
}

/// Resolve `path` through the process-wide translator.
///
/// Before initialization this returns `Translation missing {path}`.
pub fn translate(path: &str, args: &TranslationArgs) -> String {
    match TRANSLATOR.get() {
        Some(translator) => translator.translate(path, args),
        None => {
            error!("translate({}) called before the translator was initialized", path);
            format!("{MISSING_PREFIX}{path}")
        }
    }
}

/// Switch the process-wide locale.
///
/// `None` selects [`DEFAULT_FALLBACK`] as fallback; pass `Some("")` to clear it.
pub fn set_locale(locale: &str, fallback: Option<&str>) -> Result<()> {
    translator()?.set_locale(locale, Some(fallback.unwrap_or(DEFAULT_FALLBACK)))
}

/// Translate validation errors through the process-wide translator.
pub fn handle_errors(errors: Option<&ErrorMap>, as_json: bool) -> Result<HandledErrors> {
    translator()?.handle_errors(errors, as_json)
}

/// Translate a path through the process-wide translator.
///
/// ```rust,no_run
/// use lingua_i18n::t;
///
/// let title = t!("store.title");
/// let greeting = t!("greet", name = "Ada", count = 3);
/// ```
#[macro_export]
macro_rules! t {
    ($path:expr $(,)?) => {
        $crate::global::translate($path, &$crate::TranslationArgs::new())
    };
    ($path:expr, $($name:ident = $value:expr),+ $(,)?) => {{
        let mut args = $crate::TranslationArgs::new();
        $(
            args.set(stringify!($name), $value);
        )+
        $crate::global::translate($path, &args)
    }};
}
