// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client configuration
//!
//! Configuration can be loaded from:
//! 1. A JSON file (`LOSANT_CONFIG`, or `config.json` in [`config_dir`])
//! 2. Environment variables, which override file values
//!
//! | Variable | Field |
//! |---|---|
//! | `LOSANT_API_URL` | `url` |
//! | `LOSANT_API_TOKEN` | `token` |
//! | `LOSANT_TIMEOUT_SECS` | `timeoutSecs` |
//! | `LOSANT_MAX_RETRIES` | `maxRetries` |

pub mod paths;

pub use paths::{config_dir, config_dir_with, config_file};

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default Losant API endpoint
pub const DEFAULT_URL: &str = "https://api.losant.com";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Settings for [`crate::HttpTransport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// API base URL
    pub url: String,

    /// Bearer token sent with every request (optional for public endpoints)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Retries for idempotent requests that fail transiently
    pub max_retries: u32,

    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            user_agent: concat!("losant-client-rust/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration for `url` with defaults for everything else
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load configuration from environment variables alone
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Resolve the configuration to use
    ///
    /// Priority:
    /// 1. LOSANT_CONFIG environment variable (path to a JSON file)
    /// 2. config.json in the configuration directory, if it exists
    /// 3. Built-in defaults
    ///
    /// Environment variables are applied on top, then the result is validated.
    pub fn resolve() -> Result<Self, ConfigError> {
        Self::resolve_with(|name| std::env::var(name).ok())
    }

    /// [`Self::resolve`] with variables read through `lookup`
    pub fn resolve_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match lookup("LOSANT_CONFIG") {
            Some(path) => Self::load(Path::new(&path))?,
            None => {
                let path = config_dir_with(&lookup).join("config.json");
                if path.exists() {
                    Self::load(&path)?
                } else {
                    Self::default()
                }
            }
        };

        let config = base.with_overrides(&lookup)?;
        config.validate()?;
        tracing::debug!(
            url = %config.url,
            token = %config.token_display(),
            "Resolved Losant client configuration"
        );
        Ok(config)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("LOSANT_API_URL") {
            self.url = url;
        }

        if let Some(token) = lookup("LOSANT_API_TOKEN").filter(|t| !t.is_empty()) {
            self.token = Some(token);
        }

        if let Some(secs) = lookup("LOSANT_TIMEOUT_SECS") {
            self.timeout_secs = secs
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("LOSANT_TIMEOUT_SECS: {secs:?}")))?;
        }

        if let Some(retries) = lookup("LOSANT_MAX_RETRIES") {
            self.max_retries = retries
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("LOSANT_MAX_RETRIES: {retries:?}")))?;
        }

        Ok(self)
    }

    /// Check that the base URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.url)
            .map_err(|e| ConfigError::Invalid(format!("url {:?}: {}", self.url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "url {:?}: scheme must be http or https",
                self.url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeoutSecs must be positive".to_string()));
        }

        Ok(())
    }

    /// Return a display-safe version of the token (all but the last four
    /// characters masked)
    pub fn token_display(&self) -> String {
        match &self.token {
            None => "<none>".to_string(),
            Some(token) => {
                let chars: Vec<char> = token.chars().collect();
                if chars.len() <= 4 {
                    "****".to_string()
                } else {
                    let tail: String = chars[chars.len() - 4..].iter().collect();
                    format!("****{}", tail)
                }
            }
        }
    }
}
