//! Convenience macros for error handling and propagation

/// Equivalent to `anyhow::bail!` but for `LinguaError`
///
/// This macro allows early returns with custom error messages.
///
/// # Examples
///
/// ```rust
/// use lingua_common::bail;
/// use lingua_common::Result;
///
/// fn check_segment(segment: &str) -> Result<()> {
///     if segment.is_empty() {
///         bail!("Path segment cannot be empty");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::LinguaError::new($msg))
    };
    ($err:expr $(,)?) => {
        return Err($crate::LinguaError::new($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::LinguaError::new(format!($fmt, $($arg)*)))
    };
}

/// Return early with an error if a condition is not satisfied
///
/// # Examples
///
/// ```rust
/// use lingua_common::ensure;
/// use lingua_common::Result;
///
/// fn check_locale(locale: &str) -> Result<()> {
///     ensure!(!locale.contains('.'), "Locale '{}' cannot contain '.'", locale);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal $(,)?) => {
        if !$cond {
            return Err($crate::LinguaError::new($msg));
        }
    };
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($crate::LinguaError::new($err));
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::LinguaError::new(format!($fmt, $($arg)*)));
        }
    };
}

/// Add context to an error while preserving the error chain
///
/// # Examples
///
/// ```rust
/// use lingua_common::{with_context, Result};
///
/// fn read_settings() -> Result<String> {
///     std::fs::read_to_string("lingua.toml")
///         .map_err(|e| with_context!(e, "Failed to read configuration file"))
/// }
/// ```
#[macro_export]
macro_rules! with_context {
    ($err:expr, $msg:literal $(,)?) => {
        $crate::LinguaError::with_source($msg, $err)
    };
    ($err:expr, $fmt:expr, $($arg:tt)*) => {
        $crate::LinguaError::with_source(format!($fmt, $($arg)*), $err)
    };
}
