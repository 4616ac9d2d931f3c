// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Transport-ready request descriptors

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP verbs used by the Losant REST API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Whether repeating the request has no additional effect
    pub const fn is_idempotent(self) -> bool {
        matches!(self, Method::Get | Method::Delete)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of a substituted path.
///
/// Keeps the boundary between template text and caller-supplied values, so
/// a transport can encode each value as exactly one URL path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPart {
    /// Text copied from the path template, separators included
    Literal(String),
    /// A rendered path value, not encoded
    Value(String),
}

impl PathPart {
    pub fn as_str(&self) -> &str {
        match self {
            PathPart::Literal(s) | PathPart::Value(s) => s,
        }
    }
}

/// One fully resolved request.
///
/// Built by [`crate::assembler::assemble`] and never modified afterwards;
/// the fields are only readable. Path and query values are not URL-encoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestDescriptor {
    pub(crate) method: Method,
    pub(crate) path: String,
    #[serde(skip)]
    pub(crate) path_parts: Vec<PathPart>,
    pub(crate) query: BTreeMap<String, Value>,
    pub(crate) headers: BTreeMap<String, Value>,
    pub(crate) body: Option<Value>,
}

impl RequestDescriptor {
    pub fn method(&self) -> Method {
        self.method
    }

    /// The substituted path, relative to the API base URL
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The substituted path split into template text and values. Joining the
    /// parts gives [`Self::path`].
    pub fn path_parts(&self) -> &[PathPart] {
        &self.path_parts
    }

    pub fn query(&self) -> &BTreeMap<String, Value> {
        &self.query
    }

    pub fn headers(&self) -> &BTreeMap<String, Value> {
        &self.headers
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// Render a value the way it appears when interpolated into a path, query
/// string or header.
///
/// Strings are used as-is, `null` renders empty, and everything else uses
/// its JSON text (`true`, `42`, `{"a":1}`). A `null` path value therefore
/// leaves an empty segment: `/applications/{applicationId}` with a `null`
/// id becomes `/applications/`.
pub fn render_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!("abc"), "abc"; "string is verbatim")]
    #[test_case(json!("a b/c"), "a b/c"; "no encoding")]
    #[test_case(json!(true), "true"; "boolean")]
    #[test_case(json!(-12), "-12"; "number")]
    #[test_case(json!(null), ""; "null is empty")]
    #[test_case(json!({"a": 1}), r#"{"a":1}"#; "object is json text")]
    fn renders(value: Value, expected: &str) {
        assert_eq!(render_value(&value), expected);
    }

    #[test]
    fn method_strings() {
        assert_eq!(Method::Patch.to_string(), "PATCH");
        assert!(Method::Delete.is_idempotent());
        assert!(!Method::Post.is_idempotent());
        assert_eq!(serde_json::to_value(Method::Get).ok(), Some(json!("GET")));
    }
}
