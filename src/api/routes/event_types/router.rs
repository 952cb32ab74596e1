//! Router for the event types API

use axum::{Router, extract::State, response::Json};
use serde_json::Value;

use crate::api::public::ApiError;
use crate::api::state::SharedState;

async fn list_event_types(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let event_types = state
        .calendly
        .event_types(&state.config.user_uri)
        .await?;
    Ok(Json(event_types))
}

/// Create the event types router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::get(list_event_types))
}
