//! Relay request handler.
//!
//! # Responsibilities
//! - Receive a `ProxyRequest`, run the outbound fetch, build the response
//! - Log every call (key, truncated URL, byte count or failure)
//!
//! # Outcome mapping
//! ```text
//! Success          → 200, upstream bytes, upstream content type,
//!                    Cache-Control: no-cache
//! UpstreamStatus S → S (mirrored), {"error": "HTTP <S>"}
//! TimedOut         → 500, {"error": "Request timeout"}
//! Failed msg       → 500, {"error": "Proxy error", "message": "<msg>"}
//! ```

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};

use crate::http::request::RequestId;
use crate::http::server::AppState;
use crate::relay::fetch::fetch_upstream;
use crate::relay::types::{FetchOutcome, ProxyRequest};

/// How much of the target URL makes it into the log.
const URL_LOG_PREFIX_CHARS: usize = 100;

/// Handler for `POST /proxy-download`.
pub async fn proxy_download(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ProxyRequest>,
) -> Response {
    tracing::info!(
        request_id = %request_id.0,
        key = %request.key,
        url = %truncate_chars(&request.url, URL_LOG_PREFIX_CHARS),
        "Proxying download"
    );

    match fetch_upstream(&state.client, &state.config.upstream, &request.url).await {
        FetchOutcome::Success { body, content_type } => {
            tracing::info!(request_id = %request_id.0, "  ✅ Success: {} bytes", body.len());
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, content_type),
                    (header::CACHE_CONTROL, "no-cache".to_string()),
                ],
                Body::from(body),
            )
                .into_response()
        }
        FetchOutcome::UpstreamStatus { status } => {
            tracing::error!(request_id = %request_id.0, "  ❌ Error: HTTP {}", status.as_u16());
            json_error(status, upstream_error_body(status))
        }
        FetchOutcome::TimedOut => {
            tracing::error!(request_id = %request_id.0, "  ❌ Request timeout");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, timeout_body())
        }
        FetchOutcome::Failed { message } => {
            tracing::error!(request_id = %request_id.0, "  ❌ Error: {message}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, proxy_error_body(&message))
        }
    }
}

/// Body for a mirrored non-200 upstream status.
fn upstream_error_body(status: StatusCode) -> String {
    format!(r#"{{"error": "HTTP {}"}}"#, status.as_u16())
}

/// Body for an upstream timeout.
fn timeout_body() -> String {
    r#"{"error": "Request timeout"}"#.to_string()
}

/// Body for any other outbound failure. The message is embedded verbatim,
/// without JSON escaping; a message containing a double quote yields an
/// invalid body. Kept intentionally to match the original service.
fn proxy_error_body(message: &str) -> String {
    format!(r#"{{"error": "Proxy error", "message": "{message}"}}"#)
}

fn json_error(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// Truncate to at most `max` characters, respecting char boundaries.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
