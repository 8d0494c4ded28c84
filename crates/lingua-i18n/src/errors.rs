//! Translation of per-field validation error codes.
//!
//! Form and model validation layers report errors as a mapping from field
//! name to a list of descriptors carrying a `code`. Each code resolves
//! through `errors.{code}` in the active locale.

use crate::args::TranslationArgs;
use crate::translator::Translator;
use lingua_common::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// One validation error reported for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    /// Machine readable error code, e.g. `required`.
    pub code: String,
    /// Message produced by the validation layer, unused for translation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorDescriptor {
    /// Descriptor with only a code.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: None,
        }
    }
}

/// Field name to its ordered error descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap {
    fields: BTreeMap<String, Vec<ErrorDescriptor>>,
}

impl ErrorMap {
    /// Empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the `{"field": [{"code": "...", "message": "..."}]}` JSON shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Append an error code to `field`.
    pub fn push(&mut self, field: impl Into<String>, descriptor: ErrorDescriptor) {
        self.fields.entry(field.into()).or_default().push(descriptor);
    }

    /// Builder form of [`ErrorMap::push`] taking a bare code.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, code: impl Into<String>) -> Self {
        self.push(field, ErrorDescriptor::new(code));
        self
    }

    /// Iterate over fields and their descriptors, ordered by field name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ErrorDescriptor])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Whether no field has errors.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Field name to its translated messages.
pub type TranslatedErrors = BTreeMap<String, Vec<String>>;

/// Result of [`Translator::handle_errors`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandledErrors {
    /// Structured messages.
    Map(TranslatedErrors),
    /// The same messages serialized as a JSON object.
    Json(String),
}

impl Translator {
    /// Translate every error code in `errors`, keeping per-field order.
    pub fn translate_errors(&self, errors: &ErrorMap) -> TranslatedErrors {
        let empty = TranslationArgs::new();
        errors
            .iter()
            .map(|(field, descriptors)| {
                let messages = descriptors
                    .iter()
                    .map(|d| self.translate(&format!("errors.{}", d.code), &empty))
                    .collect();
                (field.to_string(), messages)
            })
            .collect()
    }

    /// Translate `errors`, returning a map or its JSON text when `as_json` is set.
    ///
    /// `None` yields an empty result.
    pub fn handle_errors(&self, errors: Option<&ErrorMap>, as_json: bool) -> Result<HandledErrors> {
        let translated = errors.map_or_else(TranslatedErrors::new, |e| self.translate_errors(e));
        debug!("Translated errors for {} fields", translated.len());

        if as_json {
            Ok(HandledErrors::Json(serde_json::to_string(&translated)?))
        } else {
            Ok(HandledErrors::Map(translated))
        }
    }
}
