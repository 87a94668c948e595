//! HTTP server module.
//!
//! The server includes:
//! - Plain HTTP listener bound from `[http]` configuration
//! - Graceful shutdown on SIGTERM/SIGINT with a bounded drain period

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
