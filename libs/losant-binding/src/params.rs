// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Caller-supplied parameter maps
//!
//! Callers may name a parameter in two equivalent ways: the plain text form
//! (`"deviceId"`) or the symbolic form (`":deviceId"` when it arrives as a
//! string from loosely-typed input). Both forms name the same logical field,
//! and [`Params::resolve`] looks a name up under the plain form first, then
//! under the symbolic form.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Prefix marking the symbolic form of a key in loosely-typed input.
const SYMBOL_PREFIX: char = ':';

/// One key of a parameter map, in either of its two representations
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamKey {
    /// Plain text key, e.g. `"deviceId"`
    Text(String),
    /// Symbolic (interned) key, written `":deviceId"` in loose input
    Symbol(String),
}

impl ParamKey {
    /// Plain text form of `name`
    pub fn text(name: impl Into<String>) -> Self {
        ParamKey::Text(name.into())
    }

    /// Symbolic form of `name` (without the leading `:`)
    pub fn symbol(name: impl Into<String>) -> Self {
        ParamKey::Symbol(name.into())
    }

    /// Parse a key coming from loosely-typed data.
    ///
    /// A leading `:` selects the symbolic form. A lone `":"` has no name to
    /// intern and stays plain text.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(SYMBOL_PREFIX) {
            Some(name) if !name.is_empty() => ParamKey::Symbol(name.to_string()),
            _ => ParamKey::Text(raw.to_string()),
        }
    }

    /// The logical field name, independent of representation
    pub fn name(&self) -> &str {
        match self {
            ParamKey::Text(name) | ParamKey::Symbol(name) => name,
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, ParamKey::Symbol(_))
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKey::Text(name) => f.write_str(name),
            ParamKey::Symbol(name) => write!(f, "{SYMBOL_PREFIX}{name}"),
        }
    }
}

impl From<&str> for ParamKey {
    fn from(name: &str) -> Self {
        ParamKey::Text(name.to_string())
    }
}

impl From<String> for ParamKey {
    fn from(name: String) -> Self {
        ParamKey::Text(name)
    }
}

impl From<&ParamKey> for ParamKey {
    fn from(key: &ParamKey) -> Self {
        key.clone()
    }
}

/// A parameter map as handed to a resource action.
///
/// Values are untyped JSON; nothing here coerces them. Insertion order is
/// kept so that iteration (and `Debug` output) matches what the caller wrote.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Params {
    entries: IndexMap<ParamKey, Value>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one previously stored under the same
    /// key and representation.
    pub fn insert(&mut self, key: impl Into<ParamKey>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder-style [`Params::insert`]
    pub fn with(mut self, key: impl Into<ParamKey>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Remove `name` under both representations
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let text = self.entries.shift_remove(&ParamKey::text(name));
        let symbol = self.entries.shift_remove(&ParamKey::symbol(name));
        text.or(symbol)
    }

    /// Look `name` up under the plain text form, then the symbolic form.
    ///
    /// A key that is present with a JSON `null` value still resolves; only a
    /// key missing under both forms counts as absent.
    pub fn resolve(&self, name: &str) -> Option<&Value> {
        self.entries
            .get(&ParamKey::text(name))
            .or_else(|| self.entries.get(&ParamKey::symbol(name)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParamKey, &Value)> {
        self.entries.iter()
    }

    /// Normalize a JSON document into a parameter map.
    ///
    /// Returns `None` unless `value` is an object. Keys go through
    /// [`ParamKey::parse`].
    pub fn from_object(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self::from(map)),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(key, value)| (ParamKey::parse(&key), value))
                .collect(),
        }
    }
}

impl<K: Into<ParamKey>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<ParamKey>, V: Into<Value>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_selects_representation() {
        assert_eq!(ParamKey::parse("orgId"), ParamKey::text("orgId"));
        assert_eq!(ParamKey::parse(":orgId"), ParamKey::symbol("orgId"));
        assert_eq!(ParamKey::parse(":"), ParamKey::text(":"));
        assert_eq!(ParamKey::parse(":orgId").to_string(), ":orgId");
    }

    #[test]
    fn resolve_accepts_either_form() {
        let plain = Params::new().with("deviceId", "d1");
        let symbolic = Params::new().with(ParamKey::symbol("deviceId"), "d1");

        assert_eq!(plain.resolve("deviceId"), Some(&json!("d1")));
        assert_eq!(symbolic.resolve("deviceId"), Some(&json!("d1")));
        assert_eq!(plain.resolve("applicationId"), None);
    }

    #[test]
    fn plain_text_wins_when_both_forms_present() {
        let params = Params::new()
            .with(ParamKey::symbol("page"), 2)
            .with("page", 1);

        assert_eq!(params.resolve("page"), Some(&json!(1)));
    }

    #[test]
    fn null_value_counts_as_present() {
        let params = Params::new().with("email", Value::Null);
        assert!(params.contains("email"));
    }

    #[test]
    fn remove_clears_both_forms() {
        let mut params = Params::new()
            .with("limit", 10)
            .with(ParamKey::symbol("limit"), 20);

        assert_eq!(params.remove("limit"), Some(json!(10)));
        assert!(params.is_empty());
    }

    #[test]
    fn deserializes_from_loose_json() {
        let params: Params = serde_json::from_str(r#"{":orgId": "o1", "page": 3}"#).unwrap();

        assert_eq!(params.len(), 2);
        assert!(params.iter().any(|(key, _)| key.is_symbol()));
        assert_eq!(params.resolve("orgId"), Some(&json!("o1")));
        assert_eq!(params.resolve("page"), Some(&json!(3)));
    }

    #[test]
    fn from_object_rejects_non_objects() {
        assert!(Params::from_object(json!(["a"])).is_none());
        assert!(Params::from_object(json!({})).is_some_and(|p| p.is_empty()));
    }
}
