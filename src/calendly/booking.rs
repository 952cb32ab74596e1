//! Scheduling link creation for the configured event type

use super::models::{SchedulingLink, SchedulingLinkRequest};
use super::{CalendlyClient, CalendlyError};

pub const OWNER_TYPE_EVENT_TYPE: &str = "EventType";

impl SchedulingLinkRequest {
    /// Single-use link owned by an event type. Quotes left over from
    /// env files are stripped from the URI.
    pub fn for_event_type(event_type_uri: &str) -> Self {
        Self {
            max_event_count: 1,
            owner: event_type_uri.trim_matches('"').trim().to_string(),
            owner_type: OWNER_TYPE_EVENT_TYPE.to_string(),
        }
    }
}

pub async fn create_booking(
    client: &CalendlyClient,
    event_type_uri: &str,
) -> Result<SchedulingLink, CalendlyError> {
    let payload = SchedulingLinkRequest::for_event_type(event_type_uri);
    client.create_scheduling_link(&payload).await
}
