// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request assembler
//!
//! Path templates name their placeholders in braces, e.g.
//! `/applications/{applicationId}/devices/{deviceId}`. Substitution is plain
//! string interpolation; encoding is left to the transport, which gets the
//! value boundaries from [`path_parts`].

use indexmap::IndexMap;
use serde_json::Value;

use crate::binder::Bound;
use crate::error::MalformedFieldTable;
use crate::request::{Method, PathPart, RequestDescriptor, render_value};

/// Combine a method verb and path template with bound values.
///
/// # Panics
///
/// If the template references a placeholder with no routed path value, or
/// has an unterminated `{`. Both mean the action's field table is wrong, not
/// that the caller passed bad input.
pub fn assemble(method: Method, template: &str, bound: Bound) -> RequestDescriptor {
    let parts = match path_parts(template, &bound.path) {
        Ok(parts) => parts,
        Err(e) => panic!("malformed field table for {method} {template}: {e}"),
    };

    RequestDescriptor {
        method,
        path: join(&parts),
        path_parts: parts,
        query: bound.query,
        headers: bound.headers,
        body: bound.body,
    }
}

/// Replace every `{name}` in `template` with the rendered value for `name`.
pub fn substitute(
    template: &str,
    values: &IndexMap<&'static str, Value>,
) -> Result<String, MalformedFieldTable> {
    path_parts(template, values).map(|parts| join(&parts))
}

/// Split `template` into literal text and rendered values. Empty literals
/// are dropped; values are kept even when they render empty.
pub fn path_parts(
    template: &str,
    values: &IndexMap<&'static str, Value>,
) -> Result<Vec<PathPart>, MalformedFieldTable> {
    let mut parts = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        if open > 0 {
            parts.push(PathPart::Literal(rest[..open].to_string()));
        }
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or_else(|| MalformedFieldTable::UnterminatedPlaceholder(template.to_string()))?;
        let name = &after[..close];
        let value = values
            .get(name)
            .ok_or_else(|| MalformedFieldTable::UnfilledPlaceholder(name.to_string()))?;
        parts.push(PathPart::Value(render_value(value).into_owned()));
        rest = &after[close + 1..];
    }
    if !rest.is_empty() {
        parts.push(PathPart::Literal(rest.to_string()));
    }

    Ok(parts)
}

fn join(parts: &[PathPart]) -> String {
    parts.iter().map(PathPart::as_str).collect()
}

/// Placeholder names in `template`, in order of appearance.
pub fn placeholders(template: &str) -> Result<Vec<&str>, MalformedFieldTable> {
    let mut names = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or_else(|| MalformedFieldTable::UnterminatedPlaceholder(template.to_string()))?;
        names.push(&after[..close]);
        rest = &after[close + 1..];
    }

    Ok(names)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(pairs: &[(&'static str, Value)]) -> IndexMap<&'static str, Value> {
        pairs.iter().cloned().collect()
    }

    #[test]
    fn substitutes_every_placeholder() {
        let path = substitute(
            "/orgs/{orgId}/solutions/{solutionId}/users/{solutionUserId}",
            &values(&[
                ("orgId", json!("o1")),
                ("solutionId", json!("s1")),
                ("solutionUserId", json!("u1")),
            ]),
        );
        assert_eq!(path.unwrap(), "/orgs/o1/solutions/s1/users/u1");
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        assert_eq!(substitute("/dashboards", &values(&[])).unwrap(), "/dashboards");
    }

    #[test]
    fn values_are_not_encoded() {
        let path = substitute("/things/{id}", &values(&[("id", json!("a b/c"))]));
        assert_eq!(path.unwrap(), "/things/a b/c");
    }

    #[test]
    fn values_stay_whole_in_parts() {
        let parts = path_parts(
            "/things/{id}/parts",
            &values(&[("id", json!("../orgs/x"))]),
        );
        assert_eq!(
            parts.unwrap(),
            vec![
                PathPart::Literal("/things/".to_string()),
                PathPart::Value("../orgs/x".to_string()),
                PathPart::Literal("/parts".to_string()),
            ]
        );
    }

    #[test]
    fn null_value_is_an_empty_part() {
        let parts = path_parts("/things/{id}", &values(&[("id", Value::Null)])).unwrap();
        assert_eq!(parts.last(), Some(&PathPart::Value(String::new())));
        assert_eq!(join(&parts), "/things/");
    }

    #[test]
    fn non_string_values_use_json_text() {
        let path = substitute("/things/{id}", &values(&[("id", json!(17))]));
        assert_eq!(path.unwrap(), "/things/17");
    }

    #[test]
    fn unfilled_placeholder_is_reported() {
        assert_eq!(
            substitute("/orgs/{orgId}/member", &values(&[])),
            Err(MalformedFieldTable::UnfilledPlaceholder("orgId".to_string()))
        );
    }

    #[test]
    fn unterminated_placeholder_is_reported() {
        assert!(matches!(
            substitute("/orgs/{orgId", &values(&[("orgId", json!("o"))])),
            Err(MalformedFieldTable::UnterminatedPlaceholder(_))
        ));
    }

    #[test]
    fn lists_placeholders_in_order() {
        assert_eq!(
            placeholders("/applications/{applicationId}/devices/{deviceId}/state").unwrap(),
            vec!["applicationId", "deviceId"]
        );
    }

    #[test]
    #[should_panic(expected = "malformed field table")]
    fn assemble_panics_on_unfilled_placeholder() {
        assemble(Method::Get, "/things/{id}", Bound::default());
    }
}
