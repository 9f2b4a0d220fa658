// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Translation Dictionaries
//!
//! A dictionary is an immutable tree of string-keyed maps whose leaves are
//! templates. Lookups walk a dot-delimited path one segment at a time.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::DictionaryError;

/// A node in a dictionary tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A template string, possibly containing `{{variable}}` placeholders.
    Text(String),
    /// A nested group of keys.
    Map(BTreeMap<String, Node>),
}

/// Outcome of walking a dotted path through a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The path ends at a string leaf.
    Found(&'a str),
    /// Some segment along the path is absent, or the key is empty.
    NotFound,
    /// The path exists but ends at a nested group.
    NotAString,
}

impl<'a> Lookup<'a> {
    /// Returns the leaf text when the lookup found one.
    pub fn text(self) -> Option<&'a str> {
        match self {
            Lookup::Found(text) => Some(text),
            Lookup::NotFound | Lookup::NotAString => None,
        }
    }
}

/// Nested translation table for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    root: BTreeMap<String, Node>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON document into a dictionary.
    ///
    /// The root must be an object and every leaf must be a string.
    pub fn from_json(code: &str, source: &str) -> Result<Self, DictionaryError> {
        let value: Value =
            serde_json::from_str(source).map_err(|source| DictionaryError::Parse {
                code: code.to_string(),
                source,
            })?;
        Self::from_value(code, &value)
    }

    /// Converts an already-parsed JSON value into a dictionary.
    pub fn from_value(code: &str, value: &Value) -> Result<Self, DictionaryError> {
        match value {
            Value::Object(_) => match convert(code, "", value)? {
                Node::Map(root) => Ok(Self { root }),
                Node::Text(_) => Err(DictionaryError::NotAnObject {
                    code: code.to_string(),
                }),
            },
            _ => Err(DictionaryError::NotAnObject {
                code: code.to_string(),
            }),
        }
    }

    /// Inserts a template at a dotted path, creating intermediate groups.
    ///
    /// An existing leaf on the way is replaced by a group.
    pub fn insert(&mut self, path: &str, text: impl Into<String>) {
        let mut segments: Vec<&str> = path.split('.').collect();
        let Some(last) = segments.pop() else {
            return;
        };

        let mut current = &mut self.root;
        for segment in segments {
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Node::Map(BTreeMap::new()));
            if let Node::Text(_) = entry {
                *entry = Node::Map(BTreeMap::new());
            }
            current = match entry {
                Node::Map(map) => map,
                Node::Text(_) => return,
            };
        }
        current.insert(last.to_string(), Node::Text(text.into()));
    }

    /// Builder-style [`Dictionary::insert`].
    pub fn with(mut self, path: &str, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    /// Walks `key` segment by segment.
    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        if key.is_empty() {
            return Lookup::NotFound;
        }

        let mut segments = key.split('.');
        let Some(first) = segments.next() else {
            return Lookup::NotFound;
        };
        let Some(mut node) = self.root.get(first) else {
            return Lookup::NotFound;
        };

        for segment in segments {
            node = match node {
                Node::Map(map) => match map.get(segment) {
                    Some(child) => child,
                    None => return Lookup::NotFound,
                },
                Node::Text(_) => return Lookup::NotFound,
            };
        }

        match node {
            Node::Text(text) => Lookup::Found(text),
            Node::Map(_) => Lookup::NotAString,
        }
    }
}

fn convert(code: &str, path: &str, value: &Value) -> Result<Node, DictionaryError> {
    match value {
        Value::String(text) => Ok(Node::Text(text.clone())),
        Value::Object(object) => {
            let mut map = BTreeMap::new();
            for (key, child) in object {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                map.insert(key.clone(), convert(code, &child_path, child)?);
            }
            Ok(Node::Map(map))
        }
        _ => Err(DictionaryError::InvalidLeaf {
            code: code.to_string(),
            path: path.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_json(
            "en",
            r#"{
                "common": { "save": "Save", "empty": "" },
                "errors": { "notFound": "Not found", "nested": { "deep": "Deep" } }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_found() {
        let dict = sample();
        assert_eq!(dict.lookup("common.save"), Lookup::Found("Save"));
        assert_eq!(dict.lookup("errors.nested.deep"), Lookup::Found("Deep"));
    }

    #[test]
    fn test_lookup_missing_segment() {
        let dict = sample();
        assert_eq!(dict.lookup("common.cancel"), Lookup::NotFound);
        assert_eq!(dict.lookup("missing.save"), Lookup::NotFound);
    }

    #[test]
    fn test_lookup_through_leaf_is_not_found() {
        let dict = sample();
        assert_eq!(dict.lookup("common.save.extra"), Lookup::NotFound);
    }

    #[test]
    fn test_lookup_group_is_not_a_string() {
        let dict = sample();
        assert_eq!(dict.lookup("errors"), Lookup::NotAString);
        assert_eq!(dict.lookup("errors.nested"), Lookup::NotAString);
    }

    #[test]
    fn test_empty_key_is_not_found() {
        let dict = sample();
        assert_eq!(dict.lookup(""), Lookup::NotFound);
    }

    #[test]
    fn test_empty_string_leaf_is_found() {
        let dict = sample();
        assert_eq!(dict.lookup("common.empty"), Lookup::Found(""));
    }

    #[test]
    fn test_non_string_leaf_is_rejected() {
        let err = Dictionary::from_json("en", r#"{ "a": { "b": 3 } }"#).unwrap_err();
        match err {
            DictionaryError::InvalidLeaf { code, path } => {
                assert_eq!(code, "en");
                assert_eq!(path, "a.b");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_object_root_is_rejected() {
        assert!(matches!(
            Dictionary::from_json("en", r#""hello""#),
            Err(DictionaryError::NotAnObject { .. })
        ));
        assert!(matches!(
            Dictionary::from_json("en", "{ not json"),
            Err(DictionaryError::Parse { .. })
        ));
    }

    #[test]
    fn test_insert_builds_groups() {
        let dict = Dictionary::new()
            .with("a.b.c", "abc")
            .with("a.d", "ad")
            .with("top", "t");
        assert_eq!(dict.lookup("a.b.c"), Lookup::Found("abc"));
        assert_eq!(dict.lookup("a.d"), Lookup::Found("ad"));
        assert_eq!(dict.lookup("top"), Lookup::Found("t"));
        assert_eq!(dict.lookup("a.b"), Lookup::NotAString);
    }

    #[test]
    fn test_insert_replaces_leaf_with_group() {
        let dict = Dictionary::new().with("a", "leaf").with("a.b", "child");
        assert_eq!(dict.lookup("a"), Lookup::NotAString);
        assert_eq!(dict.lookup("a.b"), Lookup::Found("child"));
    }
}
