//! Top-level error type for process startup and serving.
//!
//! Request handlers cannot fail; everything here happens before the first
//! request is accepted or after the listener dies.

use crate::config::ConfigError;
use crate::http::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
