//! Structured locale documents.
//!
//! A document is a tree of mappings and lists with text at the leaves. YAML
//! is converted into [`Node`] once so flattening can recurse structurally.

use serde_yaml::Value;
use tracing::warn;

/// One node of a locale document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Key/value pairs in document order.
    Map(Vec<(String, Node)>),
    /// Children addressed by their zero-based position.
    List(Vec<Node>),
    /// A terminal text value.
    Leaf(String),
    /// An explicit YAML null; contributes no entry.
    Null,
}

impl Node {
    /// Convenience constructor for a mapping node.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Convenience constructor for a leaf node.
    pub fn leaf(text: impl Into<String>) -> Self {
        Self::Leaf(text.into())
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Leaf(b.to_string()),
            Value::Number(n) => Self::Leaf(n.to_string()),
            Value::String(s) => Self::Leaf(s),
            Value::Sequence(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Mapping(mapping) => Self::Map(
                mapping
                    .into_iter()
                    .filter_map(|(key, child)| match key_segment(&key) {
                        Some(segment) => Some((segment, Self::from(child))),
                        None => {
                            warn!("Skipping locale entry with non-scalar key: {:?}", key);
                            None
                        }
                    })
                    .collect(),
            ),
            Value::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

/// Text used as a path segment for a mapping key.
fn key_segment(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => key_segment(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
