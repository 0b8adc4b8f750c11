//
//  ynab-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the YNAB Client
//!
//! This module provides the error taxonomy and the response envelope shared by
//! every request the client makes.
//!
//! # Overview
//!
//! - [`ClientError`] - Unified error type for all client operations
//! - [`ApiError`] - The typed failure reported by the API itself
//! - [`Envelope`] - The `{"data": ...}` / `{"error": ...}` wrapper around every response
//!
//! # Error Kinds
//!
//! | Kind | Variant | Network reached? |
//! |------|---------|------------------|
//! | Transport failure | [`ClientError::Transport`] | Attempted, exchange did not complete |
//! | Parse failure | [`ClientError::Parse`], [`ClientError::MissingData`] | Yes |
//! | API error | [`ClientError::Api`] | Yes |
//! | Usage error | [`ClientError::Usage`] | No |
//!
//! # Example
//!
//! ```rust
//! use ynab_client::api::common::{ApiError, ClientError};
//!
//! fn describe(result: Result<serde_json::Value, ClientError>) -> String {
//!     match result {
//!         Ok(data) => format!("ok: {}", data),
//!         Err(ClientError::Api(err)) if err.status == 429 => "slow down".to_string(),
//!         Err(ClientError::Api(err)) => format!("api: {}", err),
//!         Err(e) => format!("other: {}", e),
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Boxed error produced by a [`Transport`](crate::api::transport::Transport).
///
/// The pipeline never inspects or rewraps it, so the caller receives exactly
/// the error the transport produced.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error type for all YNAB client operations.
///
/// # Notes
///
/// - `Transport` is `transparent`: its `Display` and `source()` are those of
///   the original transport error, which can be recovered with
///   [`ClientError::into_transport`] or `downcast_ref`
/// - Only `Api` requires a completed HTTP exchange with a decodable body
/// - `Usage` is always raised before any network activity
#[derive(Error, Debug)]
pub enum ClientError {
    /// The HTTP exchange itself did not complete (connection refused, DNS,
    /// timeout, ...).
    #[error(transparent)]
    Transport(TransportError),

    /// The response body could not be decoded as JSON, neither directly nor
    /// from its raw text.
    ///
    /// # Fields
    ///
    /// - `body` - The raw response text
    /// - `source` - The decoder error from the raw-text attempt
    #[error("Error parsing response as JSON: {source}")]
    Parse {
        /// The raw response text that failed to decode.
        body: String,
        /// The underlying decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// A successful response did not carry a `data` key.
    #[error("Response envelope is missing the `data` key")]
    MissingData,

    /// The API reported a failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The caller supplied an invalid combination of arguments.
    #[error("{0}")]
    Usage(String),
}

impl ClientError {
    /// Builds a usage error from a message.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Returns the HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            _ => None,
        }
    }

    /// Returns `true` if the exchange with the server did not complete.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` if the response could not be decoded.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::MissingData)
    }

    /// Returns `true` if the API reported a failure.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Returns `true` if the call was rejected before reaching the network.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    /// Consumes the error and returns the original transport error, if any.
    pub fn into_transport(self) -> Option<TransportError> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

/// A failure reported by the YNAB API.
///
/// Raised when the HTTP status is 400 or above, or when the decoded body
/// contains an `error` key regardless of status.
///
/// The API reports errors in the format:
/// ```json
/// {"error": {"id": "404.2", "name": "resource_not_found", "detail": "Resource not found"}}
/// ```
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `status` | The HTTP status code of the response |
/// | `error_data` | The full decoded `error` object |
///
/// # Example
///
/// ```rust
/// use ynab_client::api::common::ApiError;
/// use serde_json::json;
///
/// let err = ApiError::new(404, json!({"id": "404.1", "name": "not_found", "detail": "Invalid URI"}));
/// assert_eq!(err.to_string(), "404 - Invalid URI");
/// assert_eq!(err.name(), Some("not_found"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{status} - {}", detail_of(.error_data))]
pub struct ApiError {
    /// The HTTP status code.
    pub status: u16,

    /// The decoded `error` object, kept exactly as the server sent it.
    pub error_data: Value,
}

impl ApiError {
    /// Creates an API error from a status and the decoded error object.
    pub fn new(status: u16, error_data: Value) -> Self {
        Self { status, error_data }
    }

    /// The human readable `detail` field, or an empty string when absent.
    pub fn detail(&self) -> &str {
        detail_of(&self.error_data)
    }

    /// The error `id` field (e.g. `"404.2"`).
    pub fn id(&self) -> Option<&str> {
        self.field("id")
    }

    /// The error `name` field (e.g. `"resource_not_found"`).
    pub fn name(&self) -> Option<&str> {
        self.field("name")
    }

    /// Returns `true` for HTTP 429 responses.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }

    fn field(&self, key: &str) -> Option<&str> {
        self.error_data.get(key).and_then(Value::as_str)
    }
}

fn detail_of(error_data: &Value) -> &str {
    error_data
        .get("detail")
        .and_then(Value::as_str)
        .unwrap_or_default()
}

/// The envelope wrapped around every API response.
///
/// A key counts as present whenever it appears in the body, even with a
/// `null` value. Unknown keys such as `server_knowledge` at the top level are
/// dropped.
///
/// # Example
///
/// ```rust
/// use ynab_client::api::common::Envelope;
/// use serde_json::json;
///
/// let envelope = Envelope::from_value(json!({"data": {"user": {"id": "abcd"}}}));
/// assert!(envelope.error.is_none());
/// assert_eq!(envelope.data.unwrap()["user"]["id"], "abcd");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// The success payload.
    #[serde(default)]
    pub data: Option<Value>,

    /// The error object.
    #[serde(default)]
    pub error: Option<Value>,
}

impl Envelope {
    /// Splits a decoded response body into its `data` and `error` parts.
    ///
    /// Bodies that are not JSON objects have neither part.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) => Self {
                data: map.remove("data"),
                error: map.remove("error"),
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::new(
            404,
            json!({"id": "404.1", "name": "not_found", "detail": "Invalid URI"}),
        );
        assert_eq!(err.to_string(), "404 - Invalid URI");
        assert_eq!(err.id(), Some("404.1"));
        assert!(!err.is_rate_limited());
    }

    #[test]
    fn test_api_error_missing_detail() {
        let err = ApiError::new(500, json!({}));
        assert_eq!(err.to_string(), "500 - ");
        assert_eq!(err.name(), None);
    }

    #[test]
    fn test_client_error_kinds() {
        let api = ClientError::from(ApiError::new(429, json!({"detail": "rate limit"})));
        assert!(api.is_api());
        assert_eq!(api.status(), Some(429));
        assert_eq!(api.to_string(), "429 - rate limit");

        let usage = ClientError::usage("Must specify one of transaction or transactions.");
        assert!(usage.is_usage());
        assert_eq!(usage.status(), None);

        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timeout");
        let transport = ClientError::Transport(Box::new(io));
        assert!(transport.is_transport());
        assert_eq!(transport.to_string(), "timeout");
    }

    #[test]
    fn test_envelope_ignores_unknown_keys() {
        let envelope = Envelope::from_value(json!({"data": "foo", "server_knowledge": 3}));
        assert_eq!(envelope.data, Some(json!("foo")));
        assert_eq!(envelope.error, None);
    }

    #[test]
    fn test_envelope_null_error_counts_as_present() {
        let envelope = Envelope::from_value(json!({"data": "foo", "error": null}));
        assert_eq!(envelope.error, Some(Value::Null));
    }

    #[test]
    fn test_envelope_non_object() {
        assert_eq!(Envelope::from_value(json!([1, 2])), Envelope::default());
    }
}
