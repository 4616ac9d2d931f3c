// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for losant-client

use losant_binding::BindError;
use serde_json::Value;
use thiserror::Error;

/// Errors returned by resource actions
#[derive(Error, Debug)]
pub enum Error {
    /// A required parameter was not supplied; nothing was sent
    #[error(transparent)]
    MissingParameter(#[from] BindError),

    /// The request was sent (or attempted) and failed
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    pub fn is_missing_parameter(&self) -> bool {
        matches!(self, Error::MissingParameter(_))
    }

    /// HTTP status of a rejected request, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport(TransportError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while sending a request descriptor
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection, timeout or protocol failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: Value },

    /// The base URL and path did not form a valid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A path value cannot be sent as a single URL path segment
    #[error("invalid path value {0:?}: dot segments cannot be sent")]
    InvalidPath(String),

    /// The client configuration was rejected
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A header name or value could not be sent
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// A 2xx response body was not valid JSON
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransportError {
    /// Whether retrying the same request might succeed
    pub fn is_retriable(&self) -> bool {
        match self {
            TransportError::Http(e) => e.is_timeout() || e.is_connect(),
            TransportError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Errors loading client configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
