// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! End-to-end binding tests: parameters in, request descriptors out.

use losant_binding::{
    Action, BindError, FieldDescriptor, Method, ParamKey, Params, PathPart, RequestDescriptor,
    params,
};
use pretty_assertions::assert_eq;
use quickcheck::{Arbitrary, Gen, quickcheck};
use quickcheck_helpers::random;
use serde_json::{Value, json};
use test_case::test_case;

static GET_THING: Action = Action::new(
    "things",
    "get",
    Method::Get,
    "/things/{id}",
    &[FieldDescriptor::path("id")],
);

static CREATE_THING: Action = Action::new(
    "things",
    "create",
    Method::Post,
    "/things",
    &[FieldDescriptor::body("payload").required()],
);

static LIST_PARTS: Action = Action::new(
    "parts",
    "list",
    Method::Get,
    "/things/{thingId}/parts",
    &[
        FieldDescriptor::path("thingId"),
        FieldDescriptor::query("page"),
        FieldDescriptor::query("filter"),
    ],
)
.domain_scoped();

fn shaping_defaults() -> Value {
    json!({"_actions": false, "_links": true, "_embedded": true})
}

fn as_json(request: &RequestDescriptor) -> Value {
    serde_json::to_value(request).expect("descriptor serializes")
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn get_with_path_id() {
    let request = GET_THING.build(&params! { "id" => "abc" }).unwrap();

    assert_eq!(
        as_json(&request),
        json!({
            "method": "GET",
            "path": "/things/abc",
            "query": shaping_defaults(),
            "headers": {},
            "body": null,
        })
    );
}

#[test]
fn get_without_id_fails() {
    assert_eq!(
        GET_THING.build(&Params::new()),
        Err(BindError::MissingParameter("id".to_string()))
    );
}

#[test]
fn null_path_value_leaves_empty_segment() {
    let request = GET_THING.build(&params! { "id" => null }).unwrap();

    assert_eq!(request.path(), "/things/");
    assert_eq!(
        request.path_parts(),
        [
            PathPart::Literal("/things/".to_string()),
            PathPart::Value(String::new()),
        ]
    );
}

#[test]
fn path_value_with_separators_is_one_part() {
    let request = GET_THING
        .build(&params! { "id" => "../../orgs/victim" })
        .unwrap();

    assert_eq!(request.path(), "/things/../../orgs/victim");
    assert_eq!(
        request.path_parts()[1],
        PathPart::Value("../../orgs/victim".to_string())
    );
}

#[test]
fn body_and_override() {
    let request = CREATE_THING
        .build(&params! { "payload" => {"a": 1}, "_actions" => true })
        .unwrap();

    assert_eq!(request.body(), Some(&json!({"a": 1})));
    assert_eq!(request.query()["_actions"], json!(true));
    assert_eq!(request.query()["_links"], json!(true));
    assert_eq!(request.query()["_embedded"], json!(true));
}

#[test]
fn missing_error_message_names_field() {
    let err = CREATE_THING.build(&Params::new()).unwrap_err();
    assert_eq!(err.to_string(), "payload is required");
}

// ============================================================================
// Response-shaping flags
// ============================================================================

#[test_case("_actions", json!(true); "actions")]
#[test_case("_links", json!(false); "links")]
#[test_case("_embedded", json!(false); "embedded")]
fn one_override_changes_only_that_flag(flag: &str, value: Value) {
    let params = Params::new().with("id", "x").with(flag, value.clone());
    let request = GET_THING.build(&params).unwrap();

    let mut expected = shaping_defaults();
    expected[flag] = value;
    assert_eq!(json!(request.query()), expected);
}

#[test]
fn symbolic_override_is_respected() {
    let params = Params::new()
        .with("id", "x")
        .with(ParamKey::symbol("_embedded"), false);
    let request = GET_THING.build(&params).unwrap();

    assert_eq!(request.query()["_embedded"], json!(false));
}

#[test]
fn query_and_header_routing() {
    let params: Params = serde_json::from_value(json!({
        ":thingId": "t-9",
        "page": 2,
        "filter": "sensor*",
        "losantdomain": "acme.onlosant.com",
    }))
    .unwrap();

    let request = LIST_PARTS.build(&params).unwrap();

    assert_eq!(request.method(), Method::Get);
    assert_eq!(request.path(), "/things/t-9/parts");
    assert_eq!(request.query()["page"], json!(2));
    assert_eq!(request.query()["filter"], json!("sensor*"));
    assert_eq!(request.headers()["losantdomain"], json!("acme.onlosant.com"));
    assert_eq!(request.body(), None);
}

// ============================================================================
// Properties
// ============================================================================

/// Which key representation a caller used
#[derive(Clone, Copy, Debug)]
enum Form {
    Text,
    Symbol,
}

impl Form {
    fn key(self, name: &str) -> ParamKey {
        match self {
            Form::Text => ParamKey::text(name),
            Form::Symbol => ParamKey::symbol(name),
        }
    }
}

impl Arbitrary for Form {
    fn arbitrary(g: &mut Gen) -> Form {
        if bool::arbitrary(g) {
            Form::Text
        } else {
            Form::Symbol
        }
    }
}

/// Caller input for LIST_PARTS, with every value random
#[derive(Clone, Debug)]
struct PartsCall {
    thing_id: String,
    page: Value,
    filter: Value,
    embedded: Option<bool>,
}

impl Arbitrary for PartsCall {
    fn arbitrary(g: &mut Gen) -> PartsCall {
        let id_len = 1 + usize::arbitrary(g) % 12;
        PartsCall {
            thing_id: random::string(g, id_len),
            page: random::scalar(g),
            filter: random::scalar(g),
            embedded: Option::<bool>::arbitrary(g),
        }
    }
}

impl PartsCall {
    fn params(&self, forms: [Form; 4]) -> Params {
        let mut params = Params::new()
            .with(forms[0].key("thingId"), self.thing_id.clone())
            .with(forms[1].key("page"), self.page.clone())
            .with(forms[2].key("filter"), self.filter.clone());
        if let Some(embedded) = self.embedded {
            params.insert(forms[3].key("_embedded"), embedded);
        }
        params
    }
}

quickcheck! {
    fn representation_invariance(call: PartsCall, a: (Form, Form, Form, Form), b: (Form, Form, Form, Form)) -> bool {
        let left = LIST_PARTS.build(&call.params([a.0, a.1, a.2, a.3]));
        let right = LIST_PARTS.build(&call.params([b.0, b.1, b.2, b.3]));
        left.is_ok() && left == right
    }

    fn build_is_idempotent(call: PartsCall) -> bool {
        let forms = [Form::Text, Form::Symbol, Form::Text, Form::Symbol];
        let params = call.params(forms);
        LIST_PARTS.build(&params) == LIST_PARTS.build(&params)
    }

    fn substituted_path_has_no_placeholders(call: PartsCall) -> bool {
        let params = call.params([Form::Text; 4]);
        match LIST_PARTS.build(&params) {
            Ok(request) => {
                request.path() == format!("/things/{}/parts", call.thing_id)
                    && request.path_parts()[1] == PathPart::Value(call.thing_id.clone())
                    && !request.path().contains('{')
                    && !request.path().contains('}')
            }
            Err(_) => false,
        }
    }

    fn missing_required_field_always_fails(call: PartsCall, extra_len: u8) -> bool {
        let mut params = call.params([Form::Symbol; 4]);
        params.remove("thingId");
        let name = random::field_name(&mut Gen::new(16), 1 + usize::from(extra_len % 8));
        params.insert(name, random::document(&mut Gen::new(8)));

        LIST_PARTS.build(&params) == Err(BindError::MissingParameter("thingId".to_string()))
    }
}
