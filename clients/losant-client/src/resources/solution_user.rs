// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Actions on a single solution user
//!
//! These endpoints need an API token scoped to the organization's solution.

use losant_binding::{Action, FieldDescriptor, Method, Params};
use serde_json::Value;

use crate::client::Client;
use crate::error::Error;

const RESOURCE: &str = "solution_user";
const PATH: &str = "/orgs/{orgId}/solutions/{solutionId}/users/{solutionUserId}";

pub static DELETE: Action = Action::new(
    RESOURCE,
    "delete",
    Method::Delete,
    PATH,
    &[
        FieldDescriptor::path("orgId"),
        FieldDescriptor::path("solutionId"),
        FieldDescriptor::path("solutionUserId"),
    ],
)
.domain_scoped();

pub static GET: Action = Action::new(
    RESOURCE,
    "get",
    Method::Get,
    PATH,
    &[
        FieldDescriptor::path("orgId"),
        FieldDescriptor::path("solutionId"),
        FieldDescriptor::path("solutionUserId"),
    ],
)
.domain_scoped();

pub static PATCH: Action = Action::new(
    RESOURCE,
    "patch",
    Method::Patch,
    PATH,
    &[
        FieldDescriptor::path("orgId"),
        FieldDescriptor::path("solutionId"),
        FieldDescriptor::path("solutionUserId"),
        FieldDescriptor::body("solutionUser").required(),
    ],
)
.domain_scoped();

pub static ACTIONS: &[&Action] = &[&DELETE, &GET, &PATCH];

/// Handle returned by [`Client::solution_user`]
#[derive(Clone, Copy)]
pub struct SolutionUser<'a> {
    client: &'a Client,
}

impl<'a> SolutionUser<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn delete(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&DELETE, params).await
    }

    pub async fn get(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&GET, params).await
    }

    pub async fn patch(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&PATCH, params).await
    }
}
