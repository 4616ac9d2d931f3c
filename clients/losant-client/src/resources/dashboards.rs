// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use losant_binding::{Action, FieldDescriptor, Method, Params};
use serde_json::Value;

use crate::client::Client;
use crate::error::Error;

const RESOURCE: &str = "dashboards";

pub static GET: Action = Action::new(
    RESOURCE,
    "get",
    Method::Get,
    "/dashboards",
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
    "/dashboards",
    &[FieldDescriptor::body("dashboard")],
);

pub static ACTIONS: &[&Action] = &[&GET, &POST];

/// Handle returned by [`Client::dashboards`]
#[derive(Clone, Copy)]
pub struct Dashboards<'a> {
    client: &'a Client,
}

impl<'a> Dashboards<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&GET, params).await
    }

    pub async fn post(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&POST, params).await
    }
}
