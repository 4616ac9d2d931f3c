// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Actions on a single application

use losant_binding::{Action, FieldDescriptor, Method, Params};
use serde_json::Value;

use crate::client::Client;
use crate::error::Error;

const RESOURCE: &str = "application";
const PATH: &str = "/applications/{applicationId}";

pub static DELETE: Action = Action::new(
    RESOURCE,
    "delete",
    Method::Delete,
    PATH,
    &[FieldDescriptor::path("applicationId")],
)
.domain_scoped();

pub static GET: Action = Action::new(
    RESOURCE,
    "get",
    Method::Get,
    PATH,
    &[FieldDescriptor::path("applicationId")],
)
.domain_scoped();

pub static PATCH: Action = Action::new(
    RESOURCE,
    "patch",
    Method::Patch,
    PATH,
    &[
        FieldDescriptor::path("applicationId"),
        FieldDescriptor::body("application").required(),
    ],
)
.domain_scoped();

pub static PAYLOAD_COUNTS: Action = Action::new(
    RESOURCE,
    "payload_counts",
    Method::Get,
    "/applications/{applicationId}/payloadCounts",
    &[
        FieldDescriptor::path("applicationId"),
        FieldDescriptor::query("start"),
        FieldDescriptor::query("end"),
    ],
)
.domain_scoped();

pub static ACTIONS: &[&Action] = &[&DELETE, &GET, &PATCH, &PAYLOAD_COUNTS];

/// Handle returned by [`Client::application`]
#[derive(Clone, Copy)]
pub struct Application<'a> {
    client: &'a Client,
}

impl<'a> Application<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Delete an application (`applicationId` required)
    pub async fn delete(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&DELETE, params).await
    }

    /// Retrieve an application
    pub async fn get(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&GET, params).await
    }

    /// Update an application; the `application` document is the body
    pub async fn patch(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&PATCH, params).await
    }

    /// Payload counts for the range given by `start` and `end` (ms since
    /// epoch)
    pub async fn payload_counts(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&PAYLOAD_COUNTS, params).await
    }
}
