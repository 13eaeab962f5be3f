//! Hello endpoint backed by the configured message provider.

use axum::{extract::State, Extension};
use tracing::instrument;

use crate::middleware::RequestId;
use crate::state::AppState;

/// Returns whatever the message provider produces.
#[instrument(name = "hello::hello", skip_all, fields(request_id = %request_id.0))]
pub async fn hello(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> String {
    let message = state.messages.get_message();
    tracing::debug!(len = message.len(), "Serving hello message");
    message.to_owned()
}
