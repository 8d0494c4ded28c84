//! Named substitution arguments and `%{name}` placeholder replacement.

use std::fmt::Display;

/// Ordered named arguments for placeholder substitution.
///
/// Values are stored as text; anything implementing [`Display`] is accepted
/// and stringified on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationArgs {
    pairs: Vec<(String, String)>,
}

impl TranslationArgs {
    /// Create an empty argument set.
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Set `name` to `value`, replacing an earlier value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Display) {
        let name = name.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(n, _)| *n == name) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((name, value)),
        }
    }

    /// Builder form of [`TranslationArgs::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.set(name, value);
        self
    }

    /// Value for `name`, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no arguments are set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationArgs
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.set(name, value);
        }
        args
    }
}

/// Replace every `%{name}` marker in `template` with the matching argument.
///
/// Arguments are applied one at a time in insertion order, each as a single
/// literal replace. Unknown arguments are ignored and markers without an
/// argument stay as they are.
pub fn substitute(template: &str, args: &TranslationArgs) -> String {
    let mut output = template.to_string();
    for (name, value) in args.iter() {
        let marker = format!("%{{{name}}}");
        if output.contains(&marker) {
            output = output.replace(&marker, value);
        }
    }
    output
}

/// Build [`TranslationArgs`] from `name => value` pairs.
///
/// ```rust
/// use lingua_i18n::{args, substitute};
///
/// let args = args!["name" => "Ada", "count" => 3];
/// assert_eq!(substitute("%{name} has %{count}", &args), "Ada has 3");
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::TranslationArgs::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut args = $crate::TranslationArgs::new();
        $(
            args.set($key, $value);
        )+
        args
    }};
}
