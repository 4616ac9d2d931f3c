// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client entry point

use std::fmt;
use std::sync::Arc;

use losant_binding::{Action, Params, RequestDescriptor};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{Error, TransportError};
use crate::resources::{
    Application, ApplicationKeys, Applications, Dashboards, Device, Org, SolutionUser,
    SolutionUsers,
};
use crate::transport::{HttpTransport, Transport};

/// Losant API client.
///
/// Cloning is cheap; clones share one transport.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client that talks HTTP according to `config`
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    /// Create a client over any transport (mocks, recorders, proxies)
    pub fn with_transport<T: Transport + 'static>(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Build the request `action` would send, without sending it
    pub fn prepare(&self, action: &Action, params: &Params) -> Result<RequestDescriptor, Error> {
        Ok(action.build(params)?)
    }

    /// Bind `params` to `action` and hand the request to the transport.
    ///
    /// A missing required parameter is reported before anything is sent.
    pub async fn execute(&self, action: &Action, params: Params) -> Result<Value, Error> {
        let request = self.prepare(action, &params)?;

        tracing::debug!(
            resource = action.resource,
            action = action.name,
            method = %request.method(),
            path = request.path(),
            "Executing Losant action"
        );

        Ok(self.transport.request(request).await?)
    }

    pub fn application(&self) -> Application<'_> {
        Application::new(self)
    }

    pub fn application_keys(&self) -> ApplicationKeys<'_> {
        ApplicationKeys::new(self)
    }

    pub fn applications(&self) -> Applications<'_> {
        Applications::new(self)
    }

    pub fn dashboards(&self) -> Dashboards<'_> {
        Dashboards::new(self)
    }

    pub fn device(&self) -> Device<'_> {
        Device::new(self)
    }

    pub fn org(&self) -> Org<'_> {
        Org::new(self)
    }

    pub fn solution_user(&self) -> SolutionUser<'_> {
        SolutionUser::new(self)
    }

    pub fn solution_users(&self) -> SolutionUsers<'_> {
        SolutionUsers::new(self)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
