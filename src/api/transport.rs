//
//  ynab-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The client never talks to the network directly. It describes each call as
//! an [`HttpRequest`] and hands it to a [`Transport`], which performs the
//! exchange and returns an [`HttpResponse`] (status, content type and raw
//! body text).
//!
//! [`ReqwestTransport`] is the default implementation. Connection pooling,
//! TLS and timeouts are its concern, not the client's.
//!
//! ## Custom transports
//!
//! ```rust
//! use async_trait::async_trait;
//! use ynab_client::api::transport::{HttpRequest, HttpResponse, Transport};
//! use ynab_client::api::common::TransportError;
//!
//! struct Canned;
//!
//! #[async_trait]
//! impl Transport for Canned {
//!     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
//!         Ok(HttpResponse::json(200, r#"{"data": {"user": {"id": "abcd"}}}"#))
//!     }
//! }
//! ```

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use thiserror::Error;

use super::common::TransportError;

/// HTTP verbs used by the YNAB API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
}

impl HttpMethod {
    /// The uppercase wire name of the verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            _ => Err(format!("Unsupported HTTP method: {}", s)),
        }
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
        }
    }
}

/// A fully resolved request, ready for a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP verb.
    pub method: HttpMethod,
    /// Absolute URL without the query string.
    pub url: String,
    /// Headers sent with the request (always includes `Authorization`).
    pub headers: HeaderMap,
    /// Query parameters in insertion order. Empty means no query string.
    pub query: Vec<(String, String)>,
    /// Optional JSON body.
    pub body: Option<Value>,
}

/// A completed HTTP exchange.
///
/// The body is kept as raw text so the client can fall back to parsing it
/// itself when the content type is not JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The `Content-Type` header, if the server sent one.
    pub content_type: Option<String>,
    /// The raw response body.
    pub body: String,
}

/// Why a response could not be decoded as JSON directly.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The response did not declare a JSON content type.
    #[error("Unexpected content type: {}", .0.as_deref().unwrap_or("<none>"))]
    ContentType(Option<String>),

    /// The body was declared as JSON but is malformed.
    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
}

impl HttpResponse {
    /// Creates a response with an explicit content type.
    pub fn new(status: u16, content_type: Option<&str>, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_string),
            body: body.into(),
        }
    }

    /// Creates an `application/json` response.
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self::new(status, Some("application/json; charset=utf-8"), body)
    }

    /// Returns `true` if the content type is `application/json` or a
    /// `+json` structured syntax type.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .map(|mime| {
                let mime = mime.trim().to_ascii_lowercase();
                mime == "application/json" || mime.ends_with("+json")
            })
            .unwrap_or(false)
    }

    /// Decodes the body as JSON, refusing non-JSON content types.
    pub fn decode_json(&self) -> Result<Value, DecodeError> {
        if !self.is_json() {
            return Err(DecodeError::ContentType(self.content_type.clone()));
        }
        Ok(serde_json::from_str(&self.body)?)
    }

    /// The raw body text.
    pub fn text(&self) -> &str {
        &self.body
    }
}

/// Executes HTTP exchanges on behalf of the client.
///
/// Implementations must be shareable across tasks; the client holds one
/// behind an `Arc` and issues concurrent calls through it.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs the exchange.
    ///
    /// Any error returned here is surfaced to the caller unchanged.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;

    /// Releases resources held by the transport. Called once by
    /// [`YnabClient::close`](crate::api::YnabClient::close).
    async fn close(&self) {}
}

/// The default [`Transport`], backed by a pooled [`reqwest::Client`].
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use ynab_client::api::transport::ReqwestTransport;
///
/// let transport = ReqwestTransport::with_timeout(Duration::from_secs(30))?;
/// # Ok::<(), ynab_client::api::common::TransportError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Creates a transport with no request timeout.
    pub fn new() -> Result<Self, TransportError> {
        let http = Client::builder()
            .user_agent(format!("ynab/{}", crate::VERSION))
            .build()?;
        Ok(Self { http })
    }

    /// Creates a transport that aborts requests after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder()
            .user_agent(format!("ynab/{}", crate::VERSION))
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    /// Wraps an already configured client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .http
            .request(request.method.into(), &request.url)
            .headers(request.headers);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
