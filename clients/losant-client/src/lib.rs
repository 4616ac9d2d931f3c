// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Losant REST API client
//!
//! Resource actions are static tables from [`resources`]; parameters are
//! bound by `losant-binding` and the resulting request is sent by a
//! [`Transport`].
//!
//! ```no_run
//! use losant_client::{Client, ClientConfig, params};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(&ClientConfig::resolve()?)?;
//! let state = client
//!     .device()
//!     .get_state(params! {
//!         "applicationId" => "575ec8687ae143cd83dc4a97",
//!         "deviceId" => "575ecf887ae143cd83dc4aa2",
//!         "limit" => 10,
//!     })
//!     .await?;
//! println!("{state}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod transport;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{ConfigError, Error, TransportError};
pub use transport::{HttpTransport, Transport};

// Callers build parameters and inspect requests with the binding types
pub use losant_binding::{Action, BindError, ParamKey, Params, RequestDescriptor, params};
