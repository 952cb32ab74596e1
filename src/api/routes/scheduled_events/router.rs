//! Router for the scheduled events API

use axum::{Router, extract::State, response::Json};

use super::public::BookingResponse;
use crate::api::public::ApiError;
use crate::api::state::SharedState;
use crate::calendly::booking::create_booking;

async fn create_booking_handler(
    State(state): State<SharedState>,
) -> Result<Json<BookingResponse>, ApiError> {
    let link = create_booking(&state.calendly, &state.config.event_type_uri).await?;
    Ok(Json(link.into()))
}

/// Create the scheduled events router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::post(create_booking_handler))
}
