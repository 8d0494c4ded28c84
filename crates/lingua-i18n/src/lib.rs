//! # Lingua I18n
//!
//! Translation catalogs built from one YAML document per locale.
//!
//! Every document is flattened into dotted keys (`en.errors.required`), a
//! baseline set of English error messages is seeded underneath, and a
//! [`Translator`] resolves paths against the active locale with an optional
//! fallback locale and `%{name}` placeholder substitution.
//!
//! # Example
//!
//! ```rust,no_run
//! use lingua_config::I18nSettings;
//! use lingua_i18n::{args, Translator};
//!
//! # fn example() -> lingua_common::Result<()> {
//! let settings = I18nSettings {
//!     locale_list: vec!["en".into(), "pt".into()],
//!     locale_path: "locales".into(),
//!     ..I18nSettings::default()
//! };
//! let translator = Translator::new(&settings)?;
//!
//! println!("{}", translator.translate("greet", &args!["name" => "Ada"]));
//! translator.set_locale("pt", Some("en"))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod args;
pub mod catalog;
pub mod defaults;
pub mod document;
pub mod errors;
pub mod global;
pub mod locale;
pub mod translator;

pub use args::{substitute, TranslationArgs};
pub use catalog::{Catalog, CatalogBuilder};
pub use defaults::DEFAULT_ERRORS;
pub use document::Node;
pub use errors::{ErrorDescriptor, ErrorMap, HandledErrors, TranslatedErrors};
pub use locale::{ActiveLocale, LocaleSet, LocaleState};
pub use translator::{Translator, FALLBACK_PREFIX, MISSING_PREFIX};
