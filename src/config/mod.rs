//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ProxyConfig::default()
//!     → shared (cloned into AppState) at startup
//!     → immutable for the life of the process
//! ```
//!
//! # Design Decisions
//! - There is deliberately NO loader: no config file, no CLI flags, no
//!   environment variables. The defaults (0.0.0.0:8000, 60s upstream
//!   timeout) are the complete configuration surface of the service.
//! - The struct still derives Serde traits and `Default` so tests can
//!   construct a config in-process and override individual fields.

pub mod schema;

pub use schema::ListenerConfig;
pub use schema::ProxyConfig;
pub use schema::UpstreamConfig;
