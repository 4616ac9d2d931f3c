// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Static field tables
//!
//! A [`FieldDescriptor`] names one parameter of one action, says whether the
//! caller must supply it and where its value goes in the request. Tables are
//! `'static` slices built with the `const fn` constructors below and never
//! change at runtime.

use serde::Serialize;
use serde_json::Value;

/// Header carrying the domain scope of a request
pub const DOMAIN_HEADER: &str = "losantdomain";

/// Query flag: return resource actions in the response
pub const ACTIONS_FLAG: &str = "_actions";
/// Query flag: return resource links in the response
pub const LINKS_FLAG: &str = "_links";
/// Query flag: return embedded resources in the response
pub const EMBEDDED_FLAG: &str = "_embedded";

/// The optional domain scope header accepted by most actions
pub static DOMAIN_SCOPE: [FieldDescriptor; 1] = [FieldDescriptor::header(DOMAIN_HEADER)];

/// Response-shaping flags present on every action, with their fixed defaults
pub static RESPONSE_SHAPING: [FieldDescriptor; 3] = [
    FieldDescriptor::query(ACTIONS_FLAG).with_default(FieldDefault::Bool(false)),
    FieldDescriptor::query(LINKS_FLAG).with_default(FieldDefault::Bool(true)),
    FieldDescriptor::query(EMBEDDED_FLAG).with_default(FieldDefault::Bool(true)),
];

/// Where a field's value is placed in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Substituted into the `{name}` placeholder of the path template
    Path,
    Query,
    Header,
    /// Replaces the whole request body
    Body,
}

/// A default value that can live in a `static` table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Bool(bool),
    Int(i64),
    Str(&'static str),
}

impl FieldDefault {
    pub fn to_value(self) -> Value {
        match self {
            FieldDefault::Bool(b) => Value::Bool(b),
            FieldDefault::Int(n) => Value::from(n),
            FieldDefault::Str(s) => Value::from(s),
        }
    }
}

/// Static metadata for one parameter of one action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub required: bool,
    pub location: Location,
    pub default: Option<FieldDefault>,
}

impl FieldDescriptor {
    const fn new(name: &'static str, location: Location, required: bool) -> Self {
        Self {
            name,
            required,
            location,
            default: None,
        }
    }

    /// A path segment. Path fields are always required.
    ///
    /// Presence is what counts: an explicit `null` passes the required check
    /// and renders as an empty segment.
    pub const fn path(name: &'static str) -> Self {
        Self::new(name, Location::Path, true)
    }

    pub const fn query(name: &'static str) -> Self {
        Self::new(name, Location::Query, false)
    }

    pub const fn header(name: &'static str) -> Self {
        Self::new(name, Location::Header, false)
    }

    pub const fn body(name: &'static str) -> Self {
        Self::new(name, Location::Body, false)
    }

    /// Mark the field as required
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Seed the field with `default` before caller values are applied
    pub const fn with_default(mut self, default: FieldDefault) -> Self {
        self.default = Some(default);
        self
    }
}
