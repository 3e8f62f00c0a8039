//! SyftBox Proxy Server Library
//!
//! A minimal CORS-bypass download relay: clients POST a target URL and the
//! server fetches it on their behalf, returning the bytes with permissive
//! cross-origin headers.

pub mod config;
pub mod http;
pub mod relay;

pub use config::ProxyConfig;
pub use http::HttpServer;
