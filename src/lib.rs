//! Launchpad: a small HTTP service.
//!
//! Serves a banner at `/`, a provider-backed message at `/hello` and a
//! liveness string at `/health`, all as plain text.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod service;
pub mod state;

pub use error::AppError;
pub use routes::create_router;
pub use service::{HelloService, MessageProvider};
pub use state::AppState;
