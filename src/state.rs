//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::service::{HelloService, MessageProvider};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the message provider behind the hello endpoint. Nothing in here is
/// mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub messages: Arc<dyn MessageProvider>,
}

impl AppState {
    /// Creates a new application state around the given message provider.
    pub fn new(messages: Arc<dyn MessageProvider>) -> Self {
        Self { messages }
    }

    /// Creates state with a `HelloService` serving the configured message.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(HelloService::new(config.message.hello.as_str())))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(HelloService::default()))
    }
}
