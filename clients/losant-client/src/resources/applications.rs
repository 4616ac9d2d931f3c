// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Applications visible to the current user

use losant_binding::{Action, FieldDescriptor, Method, Params};
use serde_json::Value;

use crate::client::Client;
use crate::error::Error;

const RESOURCE: &str = "applications";

pub static GET: Action = Action::new(
    RESOURCE,
    "get",
    Method::Get,
    "/applications",
    &[
        FieldDescriptor::query("sortField"),
        FieldDescriptor::query("sortDirection"),
        FieldDescriptor::query("page"),
        FieldDescriptor::query("perPage"),
        FieldDescriptor::query("filterField"),
        FieldDescriptor::query("filter"),
        FieldDescriptor::query("orgId"),
    ],
);

pub static POST: Action = Action::new(
    RESOURCE,
    "post",
    Method::Post,
    "/applications",
    &[FieldDescriptor::body("application")],
);

pub static ACTIONS: &[&Action] = &[&GET, &POST];

/// Handle returned by [`Client::applications`]
#[derive(Clone, Copy)]
pub struct Applications<'a> {
    client: &'a Client,
}

impl<'a> Applications<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List applications owned by the current user, or by `orgId`
    pub async fn get(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&GET, params).await
    }

    /// Create an application. The `application` body is optional here, so
    /// an empty call is sent as-is and the server validates it.
    pub async fn post(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&POST, params).await
    }
}
