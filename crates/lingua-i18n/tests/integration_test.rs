//! Integration tests for lingua-i18n crate.
//!
//! These build translators from locale documents on disk.

use lingua_common::test_utils::{create_locale_dir, init_test_logging};
use lingua_common::LinguaError;
use lingua_config::I18nSettings;
use lingua_i18n::{args, CatalogBuilder, ErrorMap, HandledErrors, Translator, DEFAULT_ERRORS};
use std::path::Path;

const EN: &str = r#"
en:
  greet: "Hello %{name}"
  store:
    title: Furniture Store
    menu:
      - Home
      - Shop
      - label: Contact
  errors:
    required: "This field is required"
"#;

const PT: &str = r#"
pt:
  greet: "Olá %{name}"
  store:
    title: Loja de Móveis
"#;

const FR: &str = r#"
fr:
  store:
    menu: []
"#;

fn settings(dir: &Path, locale: Option<&str>, fallback: Option<&str>) -> I18nSettings {
    I18nSettings {
        locale_list: vec!["en".into(), "pt".into(), "fr".into()],
        locale_path: dir.to_path_buf(),
        locale: locale.map(Into::into),
        locale_fallback: fallback.map(Into::into),
    }
}

#[test]
fn test_translator_from_disk() {
    init_test_logging();
    let dir = create_locale_dir(&[("en", EN), ("pt", PT), ("fr", FR)]);

    let translator = Translator::new(&settings(dir.path(), None, None)).unwrap();

    assert_eq!(translator.locale(), "en");
    assert_eq!(translator.fallback(), None);
    assert_eq!(translator.translate("store.title", &args![]), "Furniture Store");
    assert_eq!(translator.translate("store.menu.1", &args![]), "Shop");
    assert_eq!(translator.translate("store.menu.2.label", &args![]), "Contact");
    assert_eq!(translator.translate("greet", &args!["name" => "Ada"]), "Hello Ada");
}

#[test]
fn test_explicit_error_message_beats_default() {
    let dir = create_locale_dir(&[("en", EN), ("pt", PT), ("fr", FR)]);
    let translator = Translator::new(&settings(dir.path(), None, None)).unwrap();

    assert_eq!(
        translator.translate("errors.required", &args![]),
        "This field is required"
    );
    assert_eq!(translator.translate("errors.invalid_date", &args![]), "Invalid date");
}

#[test]
fn test_initial_locale_and_fallback_from_settings() {
    let dir = create_locale_dir(&[("en", EN), ("pt", PT), ("fr", FR)]);
    let translator = Translator::new(&settings(dir.path(), Some("pt"), Some("en"))).unwrap();

    assert_eq!(translator.translate("store.title", &args![]), "Loja de Móveis");
    assert_eq!(
        translator.translate("store.menu.0", &args![]),
        "Fallback: Home"
    );
    assert_eq!(
        translator.translate("errors.min_length", &args![]),
        "Fallback: Is too short"
    );
}

#[test]
fn test_switching_locales() {
    let dir = create_locale_dir(&[("en", EN), ("pt", PT), ("fr", FR)]);
    let translator = Translator::new(&settings(dir.path(), None, None)).unwrap();

    translator.set_locale("fr", None).unwrap();
    assert_eq!(
        translator.translate("errors.required", &args![]),
        "Translation missing fr.errors.required"
    );

    translator.set_locale("fr", Some("en")).unwrap();
    assert_eq!(
        translator.translate("errors.required", &args![]),
        "Fallback: This field is required"
    );

    let error = translator.set_locale("xx", Some("en")).unwrap_err();
    assert!(matches!(error, LinguaError::InvalidLocale { ref locale, .. } if locale == "xx"));
    assert_eq!(translator.locale(), "fr");
}

#[test]
fn test_invalid_initial_locale_aborts_construction() {
    let dir = create_locale_dir(&[("en", EN), ("pt", PT), ("fr", FR)]);

    let error = Translator::new(&settings(dir.path(), Some("de"), None)).unwrap_err();
    assert!(error.is_invalid_locale());

    let error = Translator::new(&settings(dir.path(), None, Some("de"))).unwrap_err();
    assert!(error.is_invalid_locale());
}

#[test]
fn test_missing_locale_document_aborts_construction() {
    let dir = create_locale_dir(&[("en", EN), ("pt", PT)]);

    let error = Translator::new(&settings(dir.path(), None, None)).unwrap_err();
    assert!(matches!(error, LinguaError::LocaleLoad { .. }));
}

#[test]
fn test_building_twice_is_identical() {
    let dir = create_locale_dir(&[("en", EN), ("pt", PT), ("fr", FR)]);
    let builder = CatalogBuilder::new(dir.path(), ["en", "pt", "fr"]);

    let first = builder.build().unwrap();
    let second = builder.build().unwrap();

    assert_eq!(first, second);
    assert_eq!(first.keys(), second.keys());
}

#[test]
fn test_defaults_present_without_any_error_entries() {
    let dir = create_locale_dir(&[("en", "en:\n  hello: Hello\n")]);
    let catalog = CatalogBuilder::new(dir.path(), ["en"]).build().unwrap();

    for (code, text) in DEFAULT_ERRORS {
        assert_eq!(catalog.get(&format!("en.errors.{code}")), Some(*text));
    }
}

#[test]
fn test_handle_errors_from_validation_json() {
    let dir = create_locale_dir(&[("en", EN), ("pt", PT), ("fr", FR)]);
    let translator = Translator::new(&settings(dir.path(), None, None)).unwrap();
    let errors = ErrorMap::from_json(
        r#"{"title": [{"message": "Required", "code": "required"}, {"message": "Too long", "code": "max_length"}]}"#,
    )
    .unwrap();

    let HandledErrors::Json(json) = translator.handle_errors(Some(&errors), true).unwrap() else {
        panic!("expected JSON output");
    };
    assert_eq!(json, r#"{"title":["This field is required","Is too long"]}"#);
}
