//! SyftBox Proxy Server
//!
//! A minimal proxy server for S3 CORS bypass, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────┐
//!                         │              SYFTBOX PROXY               │
//!                         │                                          │
//!     Client Request      │  ┌─────────┐    ┌──────────────────┐     │
//!     ────────────────────┼─▶│  http   │───▶│  relay handler   │     │
//!       POST /proxy-      │  │ server  │    │ (one GET upstream│     │
//!         download        │  └─────────┘    │  per call)       │     │
//!                         │                 └────────┬─────────┘     │
//!                         │                          │               │
//!     Client Response     │  ┌─────────┐    ┌────────▼─────────┐     │
//!     ◀───────────────────┼──│  CORS   │◀───│ outcome mapping  │◀────┼──── Upstream
//!                         │  │ headers │    │ 200/mirror/500   │     │     (e.g. S3)
//!                         │  └─────────┘    └──────────────────┘     │
//!                         │                                          │
//!                         │  ┌────────────────────────────────────┐  │
//!                         │  │       Cross-Cutting Concerns       │  │
//!                         │  │  ┌────────┐ ┌─────────┐ ┌───────┐  │  │
//!                         │  │  │ config │ │ tracing │ │req-id │  │  │
//!                         │  │  └────────┘ └─────────┘ └───────┘  │  │
//!                         │  └────────────────────────────────────┘  │
//!                         └──────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use syftbox_proxy::config::ProxyConfig;
use syftbox_proxy::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "syftbox_proxy=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("syftbox-proxy v0.1.0 starting");

    // The defaults ARE the configuration surface: no flags, no env, no file.
    let config = ProxyConfig::default();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_timeout_secs = config.upstream.timeout_secs,
        user_agent = %config.upstream.user_agent,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
