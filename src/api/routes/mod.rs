//! API routes module

pub mod availability;
pub mod event_types;
pub mod scheduled_events;
pub mod user;

use axum::Router;

use crate::api::state::SharedState;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Profile of the API key owner
        .nest("/user", user::router())
        // Event types owned by the configured user
        .nest("/event_types", event_types::router())
        // Open slots for the configured event type
        .nest("/availability", availability::router())
        // Single-use scheduling links
        .nest("/scheduled_events", scheduled_events::router())
}
