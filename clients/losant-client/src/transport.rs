// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Sending request descriptors over HTTP

use std::time::Duration;

use async_trait::async_trait;
use losant_binding::{Method, PathPart, RequestDescriptor, render_value};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::error::TransportError;

/// Executes assembled requests.
///
/// Implementations own everything the binding layer leaves out: URL
/// encoding, authentication, timeouts, retries and response decoding.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, request: RequestDescriptor) -> Result<Value, TransportError>;
}

/// [`Transport`] backed by a reqwest client.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    max_retries: u32,
}

impl HttpTransport {
    /// Create a transport from client configuration.
    ///
    /// The configuration is validated, so a zero timeout or a non-http
    /// URL is rejected here rather than on the first request.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        // reqwest is built without a default crypto provider
        let _ = rustls::crypto::ring::default_provider().install_default();

        let base_url = Url::parse(&config.url)?;
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| TransportError::InvalidHeader(format!("authorization: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url,
            max_retries: config.max_retries,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for a descriptor: base URL, path and rendered query values.
    /// Null query values are left out.
    ///
    /// Template text is used as-is. Each path value is percent-encoded as a
    /// whole, `/` included, so it always lands in exactly one segment.
    pub fn url_for(&self, request: &RequestDescriptor) -> Result<Url, TransportError> {
        let mut url = self.base_url.clone();

        let mut path = url.path().trim_end_matches('/').to_string();
        for part in request.path_parts() {
            match part {
                PathPart::Literal(text) => path.push_str(text),
                PathPart::Value(value) => path.push_str(&encode_segment(value)?),
            }
        }
        url.set_path(&path);

        let pairs: Vec<(&str, String)> = request
            .query()
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(name, value)| (name.as_str(), render_value(value).into_owned()))
            .collect();
        if pairs.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(pairs);
        }

        Ok(url)
    }

    fn headers_for(request: &RequestDescriptor) -> Result<HeaderMap, TransportError> {
        let mut headers = HeaderMap::new();
        for (name, value) in request.headers() {
            if value.is_null() {
                continue;
            }
            let header = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| TransportError::InvalidHeader(format!("{}: {}", name, e)))?;
            let value = HeaderValue::from_str(&render_value(value))
                .map_err(|e| TransportError::InvalidHeader(format!("{}: {}", name, e)))?;
            headers.insert(header, value);
        }
        Ok(headers)
    }

    async fn send(&self, request: &RequestDescriptor) -> Result<Value, TransportError> {
        let url = self.url_for(request)?;
        let method = match request.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, url)
            .headers(Self::headers_for(request)?);
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        tracing::debug!(
            method = %request.method(),
            path = request.path(),
            status = status.as_u16(),
            "Losant request completed"
        );

        if status.is_success() {
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&text)?);
        }

        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Err(TransportError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, request: RequestDescriptor) -> Result<Value, TransportError> {
        if request.method().is_idempotent() {
            let op_name = format!("{} {}", request.method(), request.path());
            with_retries(|| self.send(&request), self.max_retries, &op_name).await
        } else {
            self.send(&request).await
        }
    }
}

/// Percent-encode one path value.
///
/// `.` and `..` survive any encoding as dot segments (URL parsers resolve
/// `%2E%2E` too), so they are refused.
fn encode_segment(value: &str) -> Result<String, TransportError> {
    if matches!(value, "." | "..") {
        return Err(TransportError::InvalidPath(value.to_string()));
    }
    Ok(urlencoding::encode(value).into_owned())
}

async fn with_retries<F, Fut, T>(
    mut f: F,
    max_retries: u32,
    op_name: &str,
) -> Result<T, TransportError>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, TransportError>>,
{
    let mut attempt = 0u32;
    let mut delay = Duration::from_millis(150);

    loop {
        match f().await {
            Ok(v) => return Ok(v),
            Err(e) => {
                attempt += 1;
                if !e.is_retriable() || attempt > max_retries {
                    return Err(e);
                }

                tracing::warn!(
                    op = op_name,
                    attempt,
                    error = %e,
                    "Retrying Losant request"
                );

                // Exponential backoff with jitter
                let jitter: u64 = u64::from(rand::random::<u8>()) % 50;
                tokio::time::sleep(delay + Duration::from_millis(jitter)).await;
                delay = std::cmp::min(delay * 2, Duration::from_secs(2));
            }
        }
    }
}
