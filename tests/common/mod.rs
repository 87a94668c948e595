#![allow(dead_code)]

use std::net::SocketAddr;

use tokio::net::TcpListener;

/// Spawn the application router on an ephemeral port.
///
/// Returns the base address, e.g. `http://127.0.0.1:41234`.
pub async fn spawn_app() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr: SocketAddr = listener.local_addr().unwrap();

    let app = sonargreet::create_router();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}
