//! Router for the user API

use axum::{Router, extract::State, response::Json};
use serde_json::Value;

use crate::api::public::ApiError;
use crate::api::state::SharedState;

/// Calendly's user resource, passed through untouched
async fn current_user(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    let user = state.calendly.current_user().await?;
    Ok(Json(user))
}

/// Create the user router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::get(current_user))
}
