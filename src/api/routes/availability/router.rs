//! Router for the availability API

use axum::{Router, extract::State, response::Json};
use axum_extra::extract::Query;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::SharedState;
use crate::calendly::availability::get_availability;

async fn availability_handler(
    State(state): State<SharedState>,
    Query(params): Query<public::AvailabilityQuery>,
) -> Result<Json<public::AvailabilityResponse>, ApiError> {
    let availability = get_availability(
        &state.calendly,
        &state.config.event_type_uri,
        &params.start_date,
        &params.end_date,
    )
    .await?;

    Ok(Json(availability.into()))
}

/// Create the availability router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::get(availability_handler))
}
