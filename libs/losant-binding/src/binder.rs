// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Parameter binder
//!
//! Resolves a [`Params`] map against a field table and routes each value to
//! its bucket. Binding is a pure function of its two inputs: no I/O, no
//! shared state, nothing random.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::BindError;
use crate::field::{FieldDescriptor, Location};
use crate::params::Params;

/// Routed values for one call, ready for the assembler
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bound {
    pub(crate) path: IndexMap<&'static str, Value>,
    pub(crate) query: BTreeMap<String, Value>,
    pub(crate) headers: BTreeMap<String, Value>,
    pub(crate) body: Option<Value>,
}

impl Bound {
    pub fn path_values(&self) -> &IndexMap<&'static str, Value> {
        &self.path
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

    fn place(&mut self, field: &FieldDescriptor, value: Value) {
        match field.location {
            Location::Path => {
                self.path.insert(field.name, value);
            }
            Location::Query => {
                self.query.insert(field.name.to_string(), value);
            }
            Location::Header => {
                self.headers.insert(field.name.to_string(), value);
            }
            Location::Body => self.body = Some(value),
        }
    }
}

/// Bind `params` against `fields`.
///
/// Every required field is checked before anything is routed; the first one
/// missing under both key forms fails the whole call. Defaults are seeded
/// first and then overwritten by whatever the caller supplied.
pub fn bind<'a, I>(fields: I, params: &Params) -> Result<Bound, BindError>
where
    I: IntoIterator<Item = &'a FieldDescriptor>,
{
    let fields: Vec<&FieldDescriptor> = fields.into_iter().collect();

    if let Some(missing) = fields
        .iter()
        .find(|field| field.required && !params.contains(field.name))
    {
        return Err(BindError::MissingParameter(missing.name.to_string()));
    }

    let mut bound = Bound::default();

    for field in &fields {
        if let Some(default) = field.default {
            bound.place(field, default.to_value());
        }
    }

    for field in &fields {
        if let Some(value) = params.resolve(field.name) {
            bound.place(field, value.clone());
        }
    }

    Ok(bound)
}
