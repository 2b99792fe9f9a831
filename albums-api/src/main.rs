//! albums-api - Album catalog HTTP service
//!
//! Serves an in-memory album catalog as JSON over HTTP. State lives for the
//! process lifetime only.

use std::path::PathBuf;

use albums_common::config::{ConfigOverrides, ServiceConfig};
use albums_common::AlbumStore;
use albums_api::{build_router, AppState};
use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for albums-api
#[derive(Parser, Debug)]
#[command(name = "albums-api")]
#[command(about = "In-memory album catalog HTTP service")]
#[command(version)]
struct Args {
    /// Address to listen on [default: 127.0.0.1]
    #[arg(long, env = "ALBUMS_HOST")]
    host: Option<String>,

    /// Port to listen on [default: 8080]
    #[arg(short, long, env = "ALBUMS_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error) [default: info]
    #[arg(long, env = "ALBUMS_LOG_LEVEL")]
    log_level: Option<String>,

    /// TOML config file (also read from ALBUMS_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl From<Args> for ConfigOverrides {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            config_file: args.config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let overrides: ConfigOverrides = Args::parse().into();
    let config = ServiceConfig::resolve(&overrides).context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    let level = &config.log_level;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "albums_api={level},albums_common={level},tower_http={level}"
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting albums-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    match &config.config_file {
        Some(path) => info!("Config file: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    let store = if config.seed {
        AlbumStore::seeded()
    } else {
        AlbumStore::new()
    };
    info!("Album store ready with {} albums", store.len().await);

    let app = build_router(AppState::new(store));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("albums-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
