// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use losant_binding::{Action, FieldDescriptor, Method, Params};
use serde_json::Value;

use crate::client::Client;
use crate::error::Error;

const RESOURCE: &str = "solution_users";
const PATH: &str = "/orgs/{orgId}/solutions/{solutionId}/users";

pub static GET: Action = Action::new(
    RESOURCE,
    "get",
    Method::Get,
    PATH,
    &[
        FieldDescriptor::path("orgId"),
        FieldDescriptor::path("solutionId"),
        FieldDescriptor::query("sortField"),
        FieldDescriptor::query("sortDirection"),
        FieldDescriptor::query("page"),
        FieldDescriptor::query("perPage"),
        FieldDescriptor::query("filterField"),
        FieldDescriptor::query("filter"),
    ],
)
.domain_scoped();

pub static POST: Action = Action::new(
    RESOURCE,
    "post",
    Method::Post,
    PATH,
    &[
        FieldDescriptor::path("orgId"),
        FieldDescriptor::path("solutionId"),
        FieldDescriptor::body("solutionUser").required(),
    ],
)
.domain_scoped();

pub static ACTIONS: &[&Action] = &[&GET, &POST];

/// Handle returned by [`Client::solution_users`]
#[derive(Clone, Copy)]
pub struct SolutionUsers<'a> {
    client: &'a Client,
}

impl<'a> SolutionUsers<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Users of a solution, with optional sorting, paging and filtering
    pub async fn get(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&GET, params).await
    }

    /// Create a solution user; `solutionUser` is the body
    pub async fn post(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&POST, params).await
    }
}
