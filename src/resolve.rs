// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolution Engine
//!
//! Maps a dotted key to a template using a primary dictionary and a single
//! fallback dictionary, then substitutes `{{variable}}` placeholders.
//!
//! Substitution is a plain single pass: each variable replaces the first
//! occurrence of its placeholder, in the order the variables were added.
//! Unknown placeholders stay verbatim.

use std::fmt;

use crate::dictionary::Dictionary;

/// A value substituted into a template.
#[derive(Debug, Clone, PartialEq)]
pub enum VarValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for VarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarValue::Text(text) => f.write_str(text),
            VarValue::Int(n) => write!(f, "{}", n),
            VarValue::Float(x) if x.is_infinite() => {
                f.write_str(if *x > 0.0 { "Infinity" } else { "-Infinity" })
            }
            VarValue::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for VarValue {
    fn from(value: &str) -> Self {
        VarValue::Text(value.to_string())
    }
}

impl From<String> for VarValue {
    fn from(value: String) -> Self {
        VarValue::Text(value)
    }
}

impl From<i32> for VarValue {
    fn from(value: i32) -> Self {
        VarValue::Int(i64::from(value))
    }
}

impl From<i64> for VarValue {
    fn from(value: i64) -> Self {
        VarValue::Int(value)
    }
}

impl From<u32> for VarValue {
    fn from(value: u32) -> Self {
        VarValue::Int(i64::from(value))
    }
}

impl From<usize> for VarValue {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(n) => VarValue::Int(n),
            Err(_) => VarValue::Text(value.to_string()),
        }
    }
}

impl From<f64> for VarValue {
    fn from(value: f64) -> Self {
        VarValue::Float(value)
    }
}

/// Ordered set of named interpolation values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    entries: Vec<(String, VarValue)>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable. A repeated name replaces the earlier value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<VarValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style [`Variables::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<VarValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VarValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: Into<String>,
    V: Into<VarValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Variables::new();
        for (name, value) in iter {
            vars.set(name, value);
        }
        vars
    }
}

/// Finds the template for `key`, trying `dictionary` then `fallback`.
///
/// A key that ends at a nested group counts as missing.
pub fn lookup<'a>(
    dictionary: Option<&'a Dictionary>,
    key: &str,
    fallback: Option<&'a Dictionary>,
) -> Option<&'a str> {
    dictionary
        .and_then(|dict| dict.lookup(key).text())
        .or_else(|| fallback.and_then(|dict| dict.lookup(key).text()))
}

/// Resolves `key` to its final display string.
///
/// Returns `key` itself, and logs a warning, when neither dictionary has a
/// string leaf at that path.
pub fn resolve(
    dictionary: Option<&Dictionary>,
    key: &str,
    fallback: Option<&Dictionary>,
    variables: Option<&Variables>,
) -> String {
    let Some(template) = lookup(dictionary, key, fallback) else {
        tracing::warn!(key, "Translation key not found");
        return key.to_string();
    };

    match variables {
        Some(vars) => interpolate(template, vars),
        None => template.to_string(),
    }
}

/// Replaces the first `{{name}}` for every variable, in insertion order.
pub fn interpolate(template: &str, variables: &Variables) -> String {
    let mut out = template.to_string();
    for (name, value) in variables.iter() {
        let token = format!("{{{{{}}}}}", name);
        out = out.replacen(&token, &value.to_string(), 1);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn en() -> Dictionary {
        Dictionary::new()
            .with("greet", "Hello, {{name}}!")
            .with("items.count", "{{count}} items")
            .with("errors.notFound", "Not found")
            .with("twice", "{{x}} and {{x}}")
    }

    fn fr() -> Dictionary {
        Dictionary::new().with("greet", "Bonjour, {{name}} !")
    }

    #[test]
    fn test_primary_hit() {
        let vars = Variables::new().with("name", "Ada");
        assert_eq!(
            resolve(Some(&fr()), "greet", Some(&en()), Some(&vars)),
            "Bonjour, Ada !"
        );
    }

    #[test]
    fn test_fallback_hit() {
        assert_eq!(
            resolve(Some(&fr()), "errors.notFound", Some(&en()), None),
            "Not found"
        );
    }

    #[test]
    fn test_total_miss_returns_key() {
        assert_eq!(
            resolve(Some(&fr()), "nope.nothing", Some(&en()), None),
            "nope.nothing"
        );
    }

    #[test]
    fn test_group_key_returns_key() {
        assert_eq!(resolve(Some(&en()), "items", Some(&en()), None), "items");
    }

    #[test]
    fn test_empty_key_returns_empty() {
        assert_eq!(resolve(Some(&en()), "", Some(&en()), None), "");
    }

    #[test]
    fn test_missing_dictionaries_return_key() {
        assert_eq!(resolve(None, "greet", None, None), "greet");
        assert_eq!(resolve(None, "greet", Some(&en()), None), "Hello, {{name}}!");
    }

    #[test]
    fn test_interpolation() {
        let vars = Variables::new().with("name", "Ada");
        assert_eq!(
            resolve(Some(&en()), "greet", None, Some(&vars)),
            "Hello, Ada!"
        );
    }

    #[test]
    fn test_missing_variable_leaves_placeholder() {
        let vars = Variables::new().with("other", "x");
        assert_eq!(
            resolve(Some(&en()), "greet", None, Some(&vars)),
            "Hello, {{name}}!"
        );
        assert_eq!(resolve(Some(&en()), "greet", None, None), "Hello, {{name}}!");
    }

    #[test]
    fn test_numeric_interpolation() {
        let vars = Variables::new().with("count", 3);
        assert_eq!(
            resolve(Some(&en()), "items.count", None, Some(&vars)),
            "3 items"
        );
        let vars = Variables::new().with("count", 2.5);
        assert_eq!(interpolate("{{count}}", &vars), "2.5");
        let vars = Variables::new().with("count", 4.0);
        assert_eq!(interpolate("{{count}}", &vars), "4");
    }

    #[test]
    fn test_only_first_occurrence_is_replaced() {
        let vars = Variables::new().with("x", "1");
        assert_eq!(
            resolve(Some(&en()), "twice", None, Some(&vars)),
            "1 and {{x}}"
        );
    }

    #[test]
    fn test_substitution_follows_insertion_order() {
        let vars = Variables::new().with("a", "{{b}}").with("b", "B");
        assert_eq!(interpolate("{{a}}", &vars), "B");

        let vars = Variables::new().with("b", "B").with("a", "{{b}}");
        assert_eq!(interpolate("{{a}}", &vars), "{{b}}");
    }

    #[test]
    fn test_repeated_set_replaces_value() {
        let vars = Variables::new().with("n", 1).with("n", 2);
        assert_eq!(vars.iter().count(), 1);
        assert_eq!(interpolate("{{n}}", &vars), "2");
    }

    #[test]
    fn test_var_value_display() {
        assert_eq!(VarValue::from(-7).to_string(), "-7");
        assert_eq!(VarValue::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(VarValue::from("txt").to_string(), "txt");
    }

    proptest! {
        /// Resolving twice gives the same answer and leaves the inputs alone.
        #[test]
        fn prop_resolve_is_idempotent(key in "[a-z.]{0,20}", name in "\\PC{0,20}") {
            let primary = fr();
            let fallback = en();
            let vars = Variables::new().with("name", name);
            let first = resolve(Some(&primary), &key, Some(&fallback), Some(&vars));
            let second = resolve(Some(&primary), &key, Some(&fallback), Some(&vars));
            prop_assert_eq!(first, second);
            prop_assert_eq!(primary, fr());
            prop_assert_eq!(fallback, en());
        }

        /// A key absent from both dictionaries comes back unchanged.
        #[test]
        fn prop_total_miss_returns_key(key in "zz[a-z.]{0,20}") {
            prop_assert_eq!(resolve(Some(&fr()), &key, Some(&en()), None), key);
        }

        /// Templates without placeholders are never altered by substitution.
        #[test]
        fn prop_plain_template_untouched(
            template in "[^{}]{0,40}",
            name in "[a-z]{1,8}",
            value in "\\PC{0,10}",
        ) {
            let vars = Variables::new().with(name, value);
            prop_assert_eq!(interpolate(&template, &vars), template);
        }
    }
}
