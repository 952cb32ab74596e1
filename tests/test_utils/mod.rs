//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::Arc;

use axum::{Router, body::Body};
use serde_json::Value;

use calendly_gateway::api::AppState;
use calendly_gateway::api::app;
use calendly_gateway::core::AppConfig;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_USER_URI: &str = "https://api.calendly.com/users/USER1";
pub const TEST_EVENT_TYPE_URI: &str = "https://api.calendly.com/event_types/EVENT1";

pub fn test_config(api_base_url: &str) -> AppConfig {
    AppConfig {
        api_key: String::from(TEST_API_KEY),
        api_base_url: api_base_url.to_string(),
        user_uri: String::from(TEST_USER_URI),
        event_type_uri: String::from(TEST_EVENT_TYPE_URI),
        request_timeout_secs: 5,
    }
}

/// Creates a test application router that talks to a mock Calendly
/// server at `api_base_url`.
pub fn test_app(api_base_url: &str) -> Router {
    test_app_with_config(test_config(api_base_url))
}

pub fn test_app_with_config(config: AppConfig) -> Router {
    app(Arc::new(AppState::new(config)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not valid UTF-8")
}

pub async fn body_to_json(body: Body) -> Value {
    let body = body_to_string(body).await;
    serde_json::from_str(&body).expect("Body is not valid JSON")
}
