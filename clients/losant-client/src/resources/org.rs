// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Organization actions

use losant_binding::{Action, FieldDescriptor, Method, Params};
use serde_json::Value;

use crate::client::Client;
use crate::error::Error;

const RESOURCE: &str = "org";
const PATH: &str = "/orgs/{orgId}";
const INVITES: &str = "/orgs/{orgId}/invites";
const MEMBER: &str = "/orgs/{orgId}/member";

const ORG_ID: FieldDescriptor = FieldDescriptor::path("orgId");

pub static GET: Action = Action::new(RESOURCE, "get", Method::Get, PATH, &[ORG_ID]);

pub static PATCH: Action = Action::new(
    RESOURCE,
    "patch",
    Method::Patch,
    PATH,
    &[ORG_ID, FieldDescriptor::body("organization").required()],
);

pub static DELETE: Action = Action::new(RESOURCE, "delete", Method::Delete, PATH, &[ORG_ID]);

pub static PENDING_INVITES: Action =
    Action::new(RESOURCE, "pending_invites", Method::Get, INVITES, &[ORG_ID]);

pub static INVITE_MEMBER: Action = Action::new(
    RESOURCE,
    "invite_member",
    Method::Post,
    INVITES,
    &[ORG_ID, FieldDescriptor::body("invite").required()],
);

pub static REVOKE_INVITE: Action = Action::new(
    RESOURCE,
    "revoke_invite",
    Method::Delete,
    INVITES,
    &[ORG_ID, FieldDescriptor::query("inviteId").required()],
);

pub static MODIFY_MEMBER: Action = Action::new(
    RESOURCE,
    "modify_member",
    Method::Patch,
    MEMBER,
    &[ORG_ID, FieldDescriptor::body("member").required()],
);

pub static REMOVE_MEMBER: Action = Action::new(
    RESOURCE,
    "remove_member",
    Method::Delete,
    MEMBER,
    &[ORG_ID, FieldDescriptor::query("userId").required()],
);

pub static ACTIONS: &[&Action] = &[
    &GET,
    &PATCH,
    &DELETE,
    &PENDING_INVITES,
    &INVITE_MEMBER,
    &REVOKE_INVITE,
    &MODIFY_MEMBER,
    &REMOVE_MEMBER,
];

/// Handle returned by [`Client::org`]
#[derive(Clone, Copy)]
pub struct Org<'a> {
    client: &'a Client,
}

impl<'a> Org<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&GET, params).await
    }

    pub async fn patch(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&PATCH, params).await
    }

    pub async fn delete(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&DELETE, params).await
    }

    /// Invites that have not been accepted yet
    pub async fn pending_invites(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&PENDING_INVITES, params).await
    }

    /// Invite a person; `invite` carries the email and role
    pub async fn invite_member(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&INVITE_MEMBER, params).await
    }

    /// Revoke the invite named by the `inviteId` query parameter
    pub async fn revoke_invite(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&REVOKE_INVITE, params).await
    }

    /// Change a member's role
    pub async fn modify_member(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&MODIFY_MEMBER, params).await
    }

    /// Remove the member named by the `userId` query parameter
    pub async fn remove_member(&self, params: Params) -> Result<Value, Error> {
        self.client.execute(&REMOVE_MEMBER, params).await
    }
}
