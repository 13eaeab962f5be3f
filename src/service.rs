//! Message providers backing the hello endpoint.

use std::sync::Arc;

use crate::config::DEFAULT_HELLO_MESSAGE;

/// Something that produces the text served by `GET /hello`.
///
/// Implementations must return the same non-empty value on every call for
/// the lifetime of the process; handlers read it concurrently without locking.
pub trait MessageProvider: Send + Sync {
    fn get_message(&self) -> &str;
}

/// Default provider holding a message fixed at startup.
#[derive(Clone, Debug)]
pub struct HelloService {
    message: Arc<str>,
}

impl HelloService {
    pub fn new(message: impl Into<Arc<str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for HelloService {
    fn default() -> Self {
        Self::new(DEFAULT_HELLO_MESSAGE)
    }
}

impl MessageProvider for HelloService {
    fn get_message(&self) -> &str {
        &self.message
    }
}
