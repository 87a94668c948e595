//! sonargreet: a single-endpoint greeting service.
//!
//! This is the application entry point. It initializes tracing, loads configuration
//! from a TOML file, builds the Axum router, and starts the HTTP server.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sonargreet::config::{AppConfig, ConfigSource, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use sonargreet::create_router;
use sonargreet::http::start_server;

/// sonargreet: answers GET /api/sonarqube with a fixed greeting
#[derive(Parser, Debug)]
#[command(name = "sonargreet", version, about)]
struct Args {
    /// Path to configuration file [default: config/default.toml, optional]
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "sonargreet=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (config, source) = AppConfig::load_or_default(
        args.config.as_deref().map(Path::new),
        Path::new(DEFAULT_CONFIG_PATH),
    )?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    match &source {
        ConfigSource::File(path) => {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }
        ConfigSource::Defaults => {
            tracing::warn!(
                path = DEFAULT_CONFIG_PATH,
                "Configuration file not found, using built-in defaults"
            );
        }
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        log_format = %config.logging.format,
        "HTTP server configured"
    );

    let app = create_router();

    start_server(app, &config).await?;

    tracing::info!("Server stopped");
    Ok(())
}
