//! Request and outcome types for the relay.

use axum::body::Bytes;
use axum::http::StatusCode;
use serde::Deserialize;

/// Inbound body of `POST /proxy-download`.
///
/// `url` is required; a body without it is rejected by the JSON extractor
/// before the handler runs. `key` is an opaque label used only in logs.
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyRequest {
    pub url: String,

    #[serde(default = "default_key")]
    pub key: String,
}

fn default_key() -> String {
    "unknown".to_string()
}

/// Result of one outbound fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Upstream answered 200; body and content type are relayed as-is.
    Success { body: Bytes, content_type: String },

    /// Upstream answered with a non-200 status; its body is discarded.
    UpstreamStatus { status: StatusCode },

    /// No response within the configured timeout.
    TimedOut,

    /// Any other failure (DNS, connection refused, malformed URL, TLS).
    Failed { message: String },
}
