// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Actions on a single device
//!
//! Every action requires `applicationId` and `deviceId`. Time range
//! parameters (`start`, `end`, `since`) are milliseconds since epoch; for
//! exports and data removal 0 means now and negative values are relative to
//! now.

use losant_binding::{Action, FieldDescriptor, Method, Params};
use serde_json::Value;

use crate::client::Client;
use crate::error::Error;

const RESOURCE: &str = "device";
const PATH: &str = "/applications/{applicationId}/devices/{deviceId}";

const APPLICATION_ID: FieldDescriptor = FieldDescriptor::path("applicationId");
const DEVICE_ID: FieldDescriptor = FieldDescriptor::path("deviceId");

pub static DELETE: Action = Action::new(
    RESOURCE,
    "delete",
    Method::Delete,
    PATH,
    &[APPLICATION_ID, DEVICE_ID],
)
.domain_scoped();

pub static EXPORT: Action = Action::new(
    RESOURCE,
    "export",
    Method::Post,
    "/applications/{applicationId}/devices/{deviceId}/export",
    &[
        APPLICATION_ID,
        DEVICE_ID,
        FieldDescriptor::query("start"),
        FieldDescriptor::query("end"),
        FieldDescriptor::query("email"),
        FieldDescriptor::query("callbackUrl"),
    ],
)
.domain_scoped();

pub static GET: Action = Action::new(
    RESOURCE,
    "get",
    Method::Get,
    PATH,
    &[APPLICATION_ID, DEVICE_ID],
)
.domain_scoped();

pub static GET_COMMAND: Action = Action::new(
    RESOURCE,
    "get_command",
    Method::Get,
    "/applications/{applicationId}/devices/{deviceId}/command",
    &[
        APPLICATION_ID,
        DEVICE_ID,
        FieldDescriptor::query("limit"),
        FieldDescriptor::query("since"),
    ],
)
.domain_scoped();

pub static GET_COMPOSITE_STATE: Action = Action::new(
    RESOURCE,
    "get_composite_state",
    Method::Get,
    "/applications/{applicationId}/devices/{deviceId}/compositeState",
    &[
        APPLICATION_ID,
        DEVICE_ID,
        FieldDescriptor::query("start"),
        FieldDescriptor::query("end"),
    ],
)
.domain_scoped();

pub static GET_LOG_ENTRIES: Action = Action::new(
    RESOURCE,
    "get_log_entries",
    Method::Get,
    "/applications/{applicationId}/devices/{deviceId}/logs",
    &[
        APPLICATION_ID,
        DEVICE_ID,
        FieldDescriptor::query("limit"),
        FieldDescriptor::query("since"),
    ],
)
.domain_scoped();

pub static GET_STATE: Action = Action::new(
    RESOURCE,
    "get_state",
    Method::Get,
    "/applications/{applicationId}/devices/{deviceId}/state",
    &[
        APPLICATION_ID,
        DEVICE_ID,
        FieldDescriptor::query("limit"),
        FieldDescriptor::query("since"),
    ],
)
.domain_scoped();

pub static PATCH: Action = Action::new(
    RESOURCE,
    "patch",
    Method::Patch,
    PATH,
    &[
        APPLICATION_ID,
        DEVICE_ID,
        FieldDescriptor::body("device").required(),
    ],
)
.domain_scoped();

pub static REMOVE_DATA: Action = Action::new(
    RESOURCE,
    "remove_data",
    Method::Delete,
    "/applications/{applicationId}/devices/{deviceId}/data",
    &[
        APPLICATION_ID,
        DEVICE_ID,
        FieldDescriptor::query("start"),
        FieldDescriptor::query("end"),
    ],
)
.domain_scoped();

pub static SEND_COMMAND: Action = Action::new(
    RESOURCE,
    "send_command",
    Method::Post,
    "/applications/{applicationId}/devices/{deviceId}/command",
    &[
        APPLICATION_ID,
        DEVICE_ID,
        FieldDescriptor::body("deviceCommand").required(),
    ],
)
.domain_scoped();

pub static SEND_STATE: Action = Action::new(
    RESOURCE,
    "send_state",
    Method::Post,
    "/applications/{applicationId}/devices/{deviceId}/state",
    &[
        APPLICATION_ID,
        DEVICE_ID,
        FieldDescriptor::body("deviceState").required(),
    ],
)
.domain_scoped();

pub static ACTIONS: &[&Action] = &[
    &DELETE,
    &EXPORT,
    &GET,
    &GET_COMMAND,
    &GET_COMPOSITE_STATE,
    &GET_LOG_ENTRIES,
    &GET_STATE,
    &PATCH,
    &REMOVE_DATA,
    &SEND_COMMAND,
    &SEND_STATE,
];

/// Handle returned by [`Client::device`]
#[derive(Clone, Copy)]
pub struct Device<'a> {
    client: &'a Client,
}

impl<'a> Device<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn delete(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&DELETE, params).await
    }

    /// Start a data export. The range defaults to all data; the result is
    /// mailed to `email` (default: the current user) or posted to
    /// `callbackUrl`.
    pub async fn export(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&EXPORT, params).await
    }

    pub async fn get(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&GET, params).await
    }

    /// Last known commands sent to the device, newest first
    pub async fn get_command(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&GET_COMMAND, params).await
    }

    /// Composite of the last complete state within `start`..`end`
    pub async fn get_composite_state(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&GET_COMPOSITE_STATE, params).await
    }

    pub async fn get_log_entries(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&GET_LOG_ENTRIES, params).await
    }

    /// Last known states of the device, newest first
    pub async fn get_state(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&GET_STATE, params).await
    }

    pub async fn patch(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&PATCH, params).await
    }

    /// Remove stored data for the range, all of it by default
    pub async fn remove_data(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&REMOVE_DATA, params).await
    }

    pub async fn send_command(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&SEND_COMMAND, params).await
    }

    /// Report the current state; `deviceState` is the body
    pub async fn send_state(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&SEND_STATE, params).await
    }
}
