//! Property tests for document flattening.

use lingua_i18n::{Catalog, Node};
use proptest::prelude::*;

fn node_strategy() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        "[a-zA-Z %{}]{0,12}".prop_map(Node::Leaf),
        Just(Node::Null),
    ];
    leaf.prop_recursive(4, 64, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Node::List),
            prop::collection::btree_map("[a-z_]{1,6}", inner, 0..5)
                .prop_map(|entries| Node::Map(entries.into_iter().collect())),
        ]
    })
}

fn document_strategy() -> impl Strategy<Value = Node> {
    prop::collection::btree_map("[a-z]{2}", node_strategy(), 1..4)
        .prop_map(|locales| Node::Map(locales.into_iter().collect()))
}

/// Every leaf with its dotted path, walked independently of the catalog code.
fn leaves(prefix: &str, node: &Node, out: &mut Vec<(String, String)>) {
    match node {
        Node::Leaf(text) => out.push((prefix.to_string(), text.clone())),
        Node::Null => {}
        Node::List(children) => {
            for (index, child) in children.iter().enumerate() {
                leaves(&format!("{prefix}.{index}"), child, out);
            }
        }
        Node::Map(children) => {
            for (key, child) in children {
                leaves(&format!("{prefix}.{key}"), child, out);
            }
        }
    }
}

fn expected_entries(document: &Node) -> Vec<(String, String)> {
    let mut out = Vec::new();
    if let Node::Map(locales) = document {
        for (locale, child) in locales {
            leaves(locale, child, &mut out);
        }
    }
    out
}

proptest! {
    #[test]
    fn every_leaf_is_reachable_at_exactly_one_key(document in document_strategy()) {
        let mut catalog = Catalog::new();
        let written = catalog.insert_document(&document).unwrap();
        let expected = expected_entries(&document);

        prop_assert_eq!(written, expected.len());
        prop_assert_eq!(catalog.len(), expected.len());
        for (key, text) in &expected {
            prop_assert_eq!(catalog.get(key), Some(text.as_str()));
        }
    }

    #[test]
    fn flattening_is_deterministic(document in document_strategy()) {
        let mut first = Catalog::new();
        first.insert_document(&document).unwrap();
        let mut second = Catalog::new();
        second.insert_document(&document).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_key_starts_with_its_locale(document in document_strategy()) {
        let mut catalog = Catalog::new();
        catalog.insert_document(&document).unwrap();

        let Node::Map(locales) = &document else { unreachable!() };
        for key in catalog.keys() {
            let head = key.split('.').next().unwrap_or_default();
            prop_assert!(locales.iter().any(|(locale, _)| locale == head));
        }
    }
}
