//! HTTP route handlers.
//!
//! All application routes live under `/api`. Paths that match nothing are
//! answered by [`not_found`], while wrong methods on a known path get the
//! framework's 405.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod sonarqube;

use axum::{
    body::Body,
    http::{Response, Uri},
    middleware,
    routing::get,
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_GREETING;
use crate::error::AppError;
use crate::middleware::request_id_layer;

/// Base path all API routes are mounted under.
pub const API_BASE_PATH: &str = "/api";

/// Creates the Axum router with all routes and cache headers.
pub fn create_router() -> Router {
    // Greeting - constant body, safe to cache; 405s and other errors stay uncached
    let api_routes = Router::new()
        .route("/sonarqube", get(sonarqube::hello))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            cache_control_on_success,
        ));

    Router::new()
        .nest(API_BASE_PATH, api_routes)
        .fallback(not_found)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

/// Cache-Control value for successful greeting responses only.
fn cache_control_on_success(response: &Response<Body>) -> Option<HeaderValue> {
    response
        .status()
        .is_success()
        .then(|| HeaderValue::from_static(CACHE_CONTROL_GREETING))
}

/// Fallback for paths without a route.
async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
