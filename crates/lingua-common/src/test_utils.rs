//! Test utilities and shared test helpers for Lingua.
//!
//! Fixtures for writing locale documents to disk and initializing logging
//! once per test binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `{locale}.yml` with the given YAML body into `dir`.
pub fn write_locale_file(dir: &Path, locale: &str, yaml: &str) -> PathBuf {
    let path = dir.join(format!("{locale}.yml"));
    fs::write(&path, yaml).expect("Failed to write locale file");
    path
}

/// Create a temporary locale directory holding one document per `(locale, yaml)` pair.
pub fn create_locale_dir(documents: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = create_temp_dir();
    for (locale, yaml) in documents {
        write_locale_file(dir.path(), locale, yaml);
    }
    dir
}
