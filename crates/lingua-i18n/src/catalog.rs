//! Flattened translation catalog and the builder that loads it from disk.

use crate::defaults::{default_error_key, DEFAULT_ERRORS};
use crate::document::Node;
use lingua_common::{ensure, LinguaError, Result};
use lingua_config::I18nSettings;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Extensions tried, in order, for a locale document.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// Mapping from fully-qualified dotted key to literal text.
///
/// Keys carry their locale as the first segment, so one catalog holds every
/// locale. The catalog is read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten `document` into the catalog and return the number of entries written.
    ///
    /// Top-level keys are used verbatim as the first segment. Mapping children
    /// are addressed by key and list children by position; empty branches and
    /// nulls produce nothing. An existing key is overwritten.
    pub fn insert_document(&mut self, document: &Node) -> Result<usize> {
        let before = self.entries.len();
        let mut written = 0;

        match document {
            Node::Map(entries) => {
                for (key, child) in entries {
                    written += self.insert_node(key.clone(), child);
                }
            }
            Node::Null => {}
            Node::List(_) | Node::Leaf(_) => {
                return Err(LinguaError::new(
                    "Locale document must be a mapping at its root",
                ));
            }
        }

        debug!(
            "Flattened document into {} entries ({} new keys)",
            written,
            self.entries.len() - before
        );
        Ok(written)
    }

    fn insert_node(&mut self, key: String, node: &Node) -> usize {
        match node {
            Node::Map(children) => children
                .iter()
                .map(|(segment, child)| self.insert_node(format!("{key}.{segment}"), child))
                .sum(),
            Node::List(children) => children
                .iter()
                .enumerate()
                .map(|(index, child)| self.insert_node(format!("{key}.{index}"), child))
                .sum(),
            Node::Leaf(text) => {
                self.entries.insert(key, text.clone());
                1
            }
            Node::Null => 0,
        }
    }

    /// Merge `defaults` under `en.errors.*`; keys already present win.
    ///
    /// Returns the number of defaults that were missing and got inserted.
    pub fn seed_defaults(&mut self, defaults: &[(&str, &str)]) -> usize {
        let mut seeded = 0;
        for (code, text) in defaults {
            let key = default_error_key(code);
            if !self.entries.contains_key(&key) {
                debug!("Seeding default error message {}", key);
                self.entries.insert(key, (*text).to_string());
                seeded += 1;
            }
        }
        seeded
    }

    /// Look up a fully-qualified key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether a fully-qualified key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Iterate over `(key, text)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Loads one document per configured locale and flattens them into a [`Catalog`].
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    /// Directory holding the locale documents
    base_dir: PathBuf,
    /// Locales to load, in order
    locales: Vec<String>,
}

impl CatalogBuilder {
    /// Create a builder for `locales` read from `base_dir`.
    pub fn new<P, I, S>(base_dir: P, locales: I) -> Self
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            locales: locales.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a builder from the locale settings.
    pub fn from_settings(settings: &I18nSettings) -> Self {
        Self::new(&settings.locale_path, settings.locale_list.iter().cloned())
    }

    /// Directory the documents are read from.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the document for `locale`: `{locale}.yml`, or `{locale}.yaml`
    /// when only that one exists.
    pub fn document_path(&self, locale: &str) -> PathBuf {
        DOCUMENT_EXTENSIONS
            .iter()
            .map(|ext| self.base_dir.join(format!("{locale}.{ext}")))
            .find(|path| path.is_file())
            .unwrap_or_else(|| self.base_dir.join(format!("{locale}.{}", DOCUMENT_EXTENSIONS[0])))
    }

    /// Read and parse the document for `locale`.
    pub fn load_document(&self, locale: &str) -> Result<Node> {
        let path = self.document_path(locale);
        debug!("Loading locale document: {:?}", path);

        let content = fs::read_to_string(&path).map_err(|e| {
            error!("Failed to read locale document {:?}: {}", path, e);
            LinguaError::locale_load(&path, e)
        })?;

        if content.trim().is_empty() {
            return Ok(Node::Null);
        }

        let value: serde_yaml::Value = serde_yaml::from_str(&content).map_err(|e| {
            error!("Failed to parse locale document {:?}: {}", path, e);
            LinguaError::parse(&path, e)
        })?;

        Ok(Node::from(value))
    }

    /// Load every locale, flatten, then seed the default error messages.
    ///
    /// Any unreadable or malformed document fails the whole build.
    pub fn build(&self) -> Result<Catalog> {
        ensure!(
            !self.locales.is_empty(),
            "No locales configured for {}",
            self.base_dir.display()
        );
        let mut catalog = Catalog::new();

        for locale in &self.locales {
            let document = self.load_document(locale)?;
            catalog.insert_document(&document).map_err(|e| {
                LinguaError::with_source(
                    format!(
                        "Invalid locale document {}",
                        self.document_path(locale).display()
                    ),
                    e,
                )
            })?;
        }

        let seeded = catalog.seed_defaults(DEFAULT_ERRORS);
        info!(
            "Built translation catalog: {} locales, {} entries ({} default error messages)",
            self.locales.len(),
            catalog.len(),
            seeded
        );

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingua_common::test_utils::{create_locale_dir, write_locale_file};

    fn doc(yaml: &str) -> Node {
        Node::from(serde_yaml::from_str::<serde_yaml::Value>(yaml).unwrap())
    }

    #[test]
    fn test_flatten_nested_maps_and_lists() {
        let mut catalog = Catalog::new();
        let written = catalog
            .insert_document(&doc(
                "en:\n  errors:\n    required: Is required\n  days:\n    - Mon\n    - names: [a, b]\n",
            ))
            .unwrap();

        assert_eq!(written, 4);
        assert_eq!(catalog.get("en.errors.required"), Some("Is required"));
        assert_eq!(catalog.get("en.days.0"), Some("Mon"));
        assert_eq!(catalog.get("en.days.1.names.0"), Some("a"));
        assert_eq!(catalog.get("en.days.1.names.1"), Some("b"));
    }

    #[test]
    fn test_empty_branches_and_nulls_produce_nothing() {
        let mut catalog = Catalog::new();
        catalog
            .insert_document(&doc("en:\n  empty_map: {}\n  empty_list: []\n  nothing: ~\n"))
            .unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_top_level_scalar_uses_bare_key() {
        let mut catalog = Catalog::new();
        catalog.insert_document(&doc("title: Store\n")).unwrap();
        assert_eq!(catalog.get("title"), Some("Store"));
    }

    #[test]
    fn test_non_mapping_root_is_rejected() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert_document(&doc("- a\n- b\n")).is_err());
        assert!(catalog.insert_document(&Node::leaf("x")).is_err());
        assert_eq!(catalog.insert_document(&Node::Null).unwrap(), 0);
    }

    #[test]
    fn test_seed_defaults_does_not_overwrite() {
        let mut catalog = Catalog::new();
        catalog
            .insert_document(&doc("en:\n  errors:\n    required: Must be filled\n"))
            .unwrap();

        let seeded = catalog.seed_defaults(DEFAULT_ERRORS);

        assert_eq!(seeded, DEFAULT_ERRORS.len() - 1);
        assert_eq!(catalog.get("en.errors.required"), Some("Must be filled"));
        assert_eq!(catalog.get("en.errors.empty"), Some("Cannot be empty"));
    }

    #[test]
    fn test_keys_are_sorted() {
        let mut catalog = Catalog::new();
        catalog.insert_document(&doc("en:\n  b: B\n  a: A\n")).unwrap();
        assert_eq!(catalog.keys(), vec!["en.a", "en.b"]);
        assert_eq!(catalog.iter().count(), 2);
    }

    #[test]
    fn test_builder_loads_every_locale() {
        let dir = create_locale_dir(&[
            ("en", "en:\n  greet: Hello %{name}\n"),
            ("pt", "pt:\n  greet: Olá %{name}\n"),
        ]);

        let catalog = CatalogBuilder::new(dir.path(), ["en", "pt"]).build().unwrap();

        assert_eq!(catalog.get("en.greet"), Some("Hello %{name}"));
        assert_eq!(catalog.get("pt.greet"), Some("Olá %{name}"));
        assert_eq!(catalog.get("en.errors.required"), Some("Is required"));
        assert_eq!(catalog.len(), 2 + DEFAULT_ERRORS.len());
    }

    #[test]
    fn test_builder_accepts_yaml_extension() {
        let dir = create_locale_dir(&[]);
        std::fs::write(dir.path().join("fr.yaml"), "fr:\n  hello: Bonjour\n").unwrap();

        let builder = CatalogBuilder::new(dir.path(), ["fr"]);
        assert_eq!(builder.document_path("fr"), dir.path().join("fr.yaml"));
        assert_eq!(builder.build().unwrap().get("fr.hello"), Some("Bonjour"));
    }

    #[test]
    fn test_missing_document_is_fatal() {
        let dir = create_locale_dir(&[("en", "en:\n  a: A\n")]);

        let error = CatalogBuilder::new(dir.path(), ["en", "pt"]).build().unwrap_err();
        assert!(matches!(error, LinguaError::LocaleLoad { .. }));
        assert!(error.to_string().contains("pt.yml"));
    }

    #[test]
    fn test_malformed_document_is_fatal() {
        let dir = create_locale_dir(&[]);
        write_locale_file(dir.path(), "en", "en: [unclosed\n");

        let error = CatalogBuilder::new(dir.path(), ["en"]).build().unwrap_err();
        assert!(matches!(error, LinguaError::Parse { .. }));
    }

    #[test]
    fn test_empty_document_only_gets_defaults() {
        let dir = create_locale_dir(&[("en", "")]);
        let catalog = CatalogBuilder::new(dir.path(), ["en"]).build().unwrap();
        assert_eq!(catalog.len(), DEFAULT_ERRORS.len());
    }

    #[test]
    fn test_build_without_locales_fails() {
        let dir = create_locale_dir(&[]);
        let error = CatalogBuilder::new(dir.path(), Vec::<String>::new())
            .build()
            .unwrap_err();
        assert!(error.to_string().starts_with("No locales configured for"));
    }
}
