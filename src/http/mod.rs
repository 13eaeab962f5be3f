//! HTTP server lifecycle.
//!
//! Serves plain HTTP on the configured address and drains in-flight requests
//! on SIGTERM/SIGINT before exiting. TLS is expected to terminate upstream.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
