// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Declarative resource actions

use std::collections::HashSet;
use std::fmt;

use crate::assembler;
use crate::binder;
use crate::error::{BindError, MalformedFieldTable};
use crate::field::{DOMAIN_SCOPE, FieldDescriptor, Location, RESPONSE_SHAPING};
use crate::params::Params;
use crate::request::{Method, RequestDescriptor};

/// One remote operation: a verb, a path template and a field table.
///
/// The response-shaping flags are appended to every table automatically, and
/// the `losantdomain` header is appended for domain-scoped actions, so the
/// `fields` slice only lists what is specific to the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub resource: &'static str,
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub fields: &'static [FieldDescriptor],
    pub domain_scoped: bool,
}

impl Action {
    pub const fn new(
        resource: &'static str,
        name: &'static str,
        method: Method,
        path: &'static str,
        fields: &'static [FieldDescriptor],
    ) -> Self {
        Self {
            resource,
            name,
            method,
            path,
            fields,
            domain_scoped: false,
        }
    }

    /// Accept the optional `losantdomain` header
    pub const fn domain_scoped(mut self) -> Self {
        self.domain_scoped = true;
        self
    }

    /// The complete field table: own fields, then the domain header (if
    /// scoped), then the response-shaping flags.
    pub fn field_table(&self) -> impl Iterator<Item = &'static FieldDescriptor> + Clone {
        let domain: &'static [FieldDescriptor] = if self.domain_scoped {
            &DOMAIN_SCOPE
        } else {
            &[]
        };
        self.fields
            .iter()
            .chain(domain.iter())
            .chain(RESPONSE_SHAPING.iter())
    }

    /// Bind `params` and assemble the request this action would send.
    pub fn build(&self, params: &Params) -> Result<RequestDescriptor, BindError> {
        let bound = binder::bind(self.field_table(), params)?;
        Ok(assembler::assemble(self.method, self.path, bound))
    }

    /// Check the static table against the path template.
    pub fn validate(&self) -> Result<(), MalformedFieldTable> {
        let placeholders = assembler::placeholders(self.path)?;

        let mut seen = HashSet::new();
        let mut body: Option<&str> = None;
        for field in self.field_table() {
            if !seen.insert(field.name) {
                return Err(MalformedFieldTable::DuplicateField(field.name.to_string()));
            }
            match field.location {
                Location::Path => {
                    if !field.required {
                        return Err(MalformedFieldTable::OptionalPathField(
                            field.name.to_string(),
                        ));
                    }
                    if !placeholders.contains(&field.name) {
                        return Err(MalformedFieldTable::UnusedPathField(field.name.to_string()));
                    }
                }
                Location::Body => {
                    if let Some(first) = body {
                        return Err(MalformedFieldTable::MultipleBodies(
                            first.to_string(),
                            field.name.to_string(),
                        ));
                    }
                    body = Some(field.name);
                }
                Location::Query | Location::Header => {}
            }
        }

        if let Some(unfilled) = placeholders.iter().find(|name| {
            !self
                .fields
                .iter()
                .any(|f| f.location == Location::Path && f.name == **name)
        }) {
            return Err(MalformedFieldTable::UnfilledPlaceholder(unfilled.to_string()));
        }

        Ok(())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource, self.name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::field::DOMAIN_HEADER;
    use crate::params;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    static GET_THING: Action = Action::new(
        "things",
        "get",
        Method::Get,
        "/things/{id}",
        &[FieldDescriptor::path("id")],
    );

    static PATCH_THING: Action = Action::new(
        "things",
        "patch",
        Method::Patch,
        "/things/{id}",
        &[
            FieldDescriptor::path("id"),
            FieldDescriptor::body("thing").required(),
        ],
    )
    .domain_scoped();

    #[test]
    fn field_table_appends_common_fields() {
        let names: Vec<&str> = PATCH_THING.field_table().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["id", "thing", DOMAIN_HEADER, "_actions", "_links", "_embedded"]
        );

        let names: Vec<&str> = GET_THING.field_table().map(|f| f.name).collect();
        assert_eq!(names, vec!["id", "_actions", "_links", "_embedded"]);
    }

    #[test]
    fn domain_header_ignored_when_not_scoped() {
        let request = GET_THING
            .build(&params! { "id" => "x", "losantdomain" => "d.example" })
            .unwrap();
        assert!(request.headers().is_empty());

        let request = PATCH_THING
            .build(&params! { "id" => "x", "thing" => {}, "losantdomain" => "d.example" })
            .unwrap();
        assert_eq!(request.headers()[DOMAIN_HEADER], json!("d.example"));
    }

    #[test]
    fn display_names_resource_and_action() {
        assert_eq!(PATCH_THING.to_string(), "things.patch");
    }

    #[test]
    fn validate_accepts_well_formed_tables() {
        assert_eq!(GET_THING.validate(), Ok(()));
        assert_eq!(PATCH_THING.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_unfilled_placeholder() {
        static BAD: Action = Action::new(
            "things",
            "bad",
            Method::Get,
            "/things/{id}/parts/{partId}",
            &[FieldDescriptor::path("id")],
        );
        assert_eq!(
            BAD.validate(),
            Err(MalformedFieldTable::UnfilledPlaceholder("partId".to_string()))
        );
    }

    #[test]
    fn validate_rejects_unused_path_field() {
        static BAD: Action = Action::new(
            "things",
            "bad",
            Method::Get,
            "/things",
            &[FieldDescriptor::path("id")],
        );
        assert_eq!(
            BAD.validate(),
            Err(MalformedFieldTable::UnusedPathField("id".to_string()))
        );
    }

    #[test]
    fn validate_rejects_optional_path_field() {
        static BAD: Action = Action::new(
            "things",
            "bad",
            Method::Get,
            "/things/{id}",
            &[FieldDescriptor {
                name: "id",
                required: false,
                location: Location::Path,
                default: None,
            }],
        );
        assert_eq!(
            BAD.validate(),
            Err(MalformedFieldTable::OptionalPathField("id".to_string()))
        );
    }

    #[test]
    fn validate_rejects_two_bodies() {
        static BAD: Action = Action::new(
            "things",
            "bad",
            Method::Post,
            "/things",
            &[FieldDescriptor::body("a"), FieldDescriptor::body("b")],
        );
        assert_eq!(
            BAD.validate(),
            Err(MalformedFieldTable::MultipleBodies(
                "a".to_string(),
                "b".to_string()
            ))
        );
    }

    #[test]
    fn validate_rejects_shadowed_shaping_flag() {
        static BAD: Action = Action::new(
            "things",
            "bad",
            Method::Get,
            "/things",
            &[FieldDescriptor::query("_links")],
        );
        assert_eq!(
            BAD.validate(),
            Err(MalformedFieldTable::DuplicateField("_links".to_string()))
        );
    }
}
