//! Greeting endpoint.
//!
//! Answers `GET /api/sonarqube` with a constant plain-text body. The handler
//! reads nothing from the request and holds no state, so concurrent calls
//! never interact.

/// Body returned by [`hello`].
pub const GREETING: &str = "Hello, I'm cloud SonarQube!";

/// Greeting handler.
pub async fn hello() -> &'static str {
    GREETING
}
