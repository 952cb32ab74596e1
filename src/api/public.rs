//! Public API types

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_json::json;

use crate::calendly::CalendlyError;

// Errors

pub struct ApiError(anyhow::Error);

impl ApiError {
    /// Upstream failures keep Calendly's status code, anything else is
    /// a 500
    pub fn status(&self) -> StatusCode {
        self.0
            .downcast_ref::<CalendlyError>()
            .and_then(CalendlyError::upstream_status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Always log the error
        tracing::error!("{}", self.0);

        (
            self.status(),
            Json(json!({ "detail": format!("Something went wrong: {}", self.0) })),
        )
            .into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// Re-export public types from each route

pub mod availability {
    pub use crate::api::routes::availability::public::*;
}

pub mod scheduled_events {
    pub use crate::api::routes::scheduled_events::public::*;
}
