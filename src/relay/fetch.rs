//! Outbound fetch.
//!
//! # Responsibilities
//! - Issue exactly one GET to the target URL
//! - Classify the result into a [`FetchOutcome`]
//!
//! # Design Decisions
//! - No request body, no cookies, no credentials are forwarded upstream
//! - The timeout is total (connect through body read), applied per call

use std::time::Duration;

use reqwest::header;

use crate::config::UpstreamConfig;
use crate::relay::types::FetchOutcome;

/// Default content type when upstream omits the header.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Perform one GET against `url` and classify the result.
pub async fn fetch_upstream(
    client: &reqwest::Client,
    upstream: &UpstreamConfig,
    url: &str,
) -> FetchOutcome {
    let result = client
        .get(url)
        .header(header::USER_AGENT, &upstream.user_agent)
        .timeout(Duration::from_secs(upstream.timeout_secs))
        .send()
        .await;

    let response = match result {
        Ok(response) => response,
        Err(e) if e.is_timeout() => return FetchOutcome::TimedOut,
        Err(e) => {
            return FetchOutcome::Failed {
                message: e.to_string(),
            }
        }
    };

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return FetchOutcome::UpstreamStatus { status };
    }

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();

    // The timeout above also bounds the body read.
    match response.bytes().await {
        Ok(body) => FetchOutcome::Success { body, content_type },
        Err(e) if e.is_timeout() => FetchOutcome::TimedOut,
        Err(e) => FetchOutcome::Failed {
            message: e.to_string(),
        },
    }
}
