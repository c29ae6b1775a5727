//! adcheck API server
//!
//! A stateless REST service that screens Japanese marketing copy against
//! advertising-law pattern rules:
//!
//! - 景品表示法 (misleading superiority/advantage representations)
//! - 薬機法 (medical efficacy claims)
//! - 金融商品取引法 (investment solicitation rules)
//!
//! ## Architecture
//!
//! The server is a thin boundary in front of adcheck-engine, providing:
//!
//! - Rate limiting via tower-governor
//! - A request text size cap to bound matching work
//! - CORS for browser-based review dashboards
//!
//! Findings are returned to the caller; nothing is stored here.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{handle_assess, handle_check, handle_health, handle_list_categories};

/// Command-line arguments for the adcheck server
#[derive(Parser, Debug)]
#[command(name = "adcheck-server")]
#[command(about = "Compliance check API for Japanese ad copy")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Maximum accepted text size in bytes
    #[arg(long, default_value = "65536")]
    max_text_bytes: usize,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Maximum accepted text size in bytes
    pub max_text_bytes: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting adcheck server on {}:{}", args.host, args.port);

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit * 2)
            .finish()
            .expect("Failed to create rate limiter config"),
    );

    // Create shared state
    let state = AppState {
        max_text_bytes: args.max_text_bytes,
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/categories", get(handle_list_categories))
        .route("/api/check", post(handle_check))
        .route("/api/assess", post(handle_assess))
        // Apply middleware
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(cors)
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);
    info!("Max text size: {} bytes", args.max_text_bytes);

    axum::serve(listener, app).await?;

    Ok(())
}
