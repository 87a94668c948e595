//! HTTP server startup logic.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Invalid listen address: {0}")]
    Address(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = config.http.socket_addr().map_err(|e| {
        ServerError::Address(format!(
            "{}:{} ({})",
            config.http.host, config.http.port, e
        ))
    })?;

    let handle = Handle::new();
    let grace = Duration::from_secs(config.http.shutdown_timeout_seconds);

    // Bind up front so a taken port surfaces as ServerError::Bind
    let listener = std::net::TcpListener::bind(addr)?;
    listener.set_nonblocking(true)?;
    let local_addr = listener.local_addr()?;

    tracing::info!(addr = %local_addr, "Starting HTTP server");

    shutdown::setup_shutdown_handler(handle.clone(), grace);

    axum_server::from_tcp(listener)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}
