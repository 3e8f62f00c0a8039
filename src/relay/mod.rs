//! Relay subsystem: the proxy-download endpoint.
//!
//! # Data Flow
//! ```text
//! POST /proxy-download {url, key}
//!     → types.rs (deserialize ProxyRequest, default key)
//!     → fetch.rs (exactly one GET upstream, classify outcome)
//!     → handler.rs (map FetchOutcome to HTTP response)
//! ```
//!
//! # Design Decisions
//! - No retries, no caching, no fan-out: one inbound call is one
//!   outbound fetch, and calls share no mutable state
//! - The target URL is forwarded verbatim: no validation, no scheme or
//!   host restriction

pub mod fetch;
pub mod handler;
pub mod types;

pub use types::{FetchOutcome, ProxyRequest};
