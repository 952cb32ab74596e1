use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.calendly.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Process-wide settings for talking to Calendly.
///
/// Nothing here is validated when the process starts. An empty API key
/// or URI shows up later as an upstream auth failure or a malformed
/// request.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub user_uri: String,
    pub event_type_uri: String,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        // Values in a local .env file are loaded but never override the
        // real environment
        dotenv::dotenv().ok();

        let api_key = env::var("CALENDLY_API_KEY").unwrap_or_default();
        let api_base_url =
            env::var("CALENDLY_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let user_uri = env::var("USER_URI").unwrap_or_default();
        let event_type_uri = env::var("EVENT_TYPE_URI").unwrap_or_default();
        let request_timeout_secs = parse_timeout_secs(env::var("CALENDLY_TIMEOUT_SECS").ok());

        Self {
            api_key,
            api_base_url,
            user_uri,
            event_type_uri,
            request_timeout_secs,
        }
    }
}

/// A zero timeout would fail every request, so it falls back to the
/// default like an unparseable value does
fn parse_timeout_secs(value: Option<String>) -> u64 {
    value
        .and_then(|secs| secs.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}
