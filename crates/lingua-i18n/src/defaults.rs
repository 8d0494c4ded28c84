//! Baseline English messages for form validation error codes.
//!
//! These are seeded under `en.errors.{code}` after all documents are loaded,
//! only where a document did not already define the key.

/// Locale the default error messages are seeded under.
pub const DEFAULT_ERRORS_LOCALE: &str = "en";

/// Namespace, below the locale, the default error messages live in.
pub const ERRORS_NAMESPACE: &str = "errors";

/// Error code to generic English message.
pub const DEFAULT_ERRORS: &[(&str, &str)] = &[
    ("required", "Is required"),
    ("max_length", "Is too long"),
    ("min_length", "Is too short"),
    ("invalid_choice", "Has invalid choice"),
    ("invalid", "Has invalid"),
    ("max_value", "Is too long"),
    ("min_value", "Is too short"),
    ("overflow", "Is too long"),
    ("missing", "Missing image"),
    ("empty", "Cannot be empty"),
    ("invalid_image", "Invalid image"),
    ("invalid_list", "Invalid list"),
    ("incomplete", "Incomplete"),
    ("invalid_date", "Invalid date"),
    ("invalid_time", "Invalid time"),
    ("invalid_pk_value", "Invalid primary key value"),
];

/// Fully-qualified catalog key for a default error code.
pub fn default_error_key(code: &str) -> String {
    format!("{DEFAULT_ERRORS_LOCALE}.{ERRORS_NAMESPACE}.{code}")
}
