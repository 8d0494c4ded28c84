//! Integration tests for lingua-config crate.

use lingua_common::test_utils::create_temp_dir;
use lingua_config::{ConfigLoader, ENV_LOCALE};
use std::fs;

#[test]
fn test_load_toml_file() {
    let dir = create_temp_dir();
    let path = dir.path().join("lingua.toml");
    fs::write(
        &path,
        r#"
[i18n]
locale_list = ["en", "pt"]
locale_path = "locales"
locale = "pt"

[logging]
level = "debug"
format = "compact"
"#,
    )
    .unwrap();

    let config = ConfigLoader::new(&path).load_with_env(|_| None).unwrap();
    assert_eq!(config.i18n.initial_locale(), "pt");
    assert_eq!(config.i18n.initial_fallback(), None);
    assert_eq!(config.logging.format, "compact");
}

#[test]
fn test_load_yaml_file_with_env_override() {
    let dir = create_temp_dir();
    let path = dir.path().join("lingua.yml");
    fs::write(&path, "i18n:\n  locale_list: [en, pt]\n  locale_fallback: en\n").unwrap();

    let config = ConfigLoader::new(&path)
        .load_with_env(|key| (key == ENV_LOCALE).then(|| "pt".to_string()))
        .unwrap();

    assert_eq!(config.i18n.initial_locale(), "pt");
    assert_eq!(config.i18n.initial_fallback(), Some("en"));
}

#[test]
fn test_invalid_file_locale_fails_validation() {
    let dir = create_temp_dir();
    let path = dir.path().join("lingua.toml");
    fs::write(&path, "[i18n]\nlocale_list = [\"en\"]\nlocale = \"fr\"\n").unwrap();

    let error = ConfigLoader::new(&path).load_with_env(|_| None).unwrap_err();
    assert!(error.is_invalid_locale());
}

#[test]
fn test_malformed_file_is_reported() {
    let dir = create_temp_dir();
    let path = dir.path().join("lingua.toml");
    fs::write(&path, "[i18n\nlocale_list = ").unwrap();

    assert!(ConfigLoader::new(&path).load_with_env(|_| None).is_err());
}

#[test]
fn test_unsupported_extension_is_config_error() {
    let dir = create_temp_dir();
    let path = dir.path().join("lingua.ini");
    fs::write(&path, "").unwrap();

    let error = ConfigLoader::new(&path).load_with_env(|_| None).unwrap_err();
    assert!(error.is_config());
}

