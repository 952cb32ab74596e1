//! Response envelopes and payloads from the Calendly v2 API
use serde::{Deserialize, Serialize};

/// Envelope around a single object
#[derive(Debug, Deserialize)]
pub struct Resource<T> {
    pub resource: T,
}

/// Envelope around a list of objects
#[derive(Debug, Deserialize)]
pub struct Collection<T> {
    pub collection: Vec<T>,
}

// {
//   "collection": [
//     {
//       "status": "available",
//       "invitees_remaining": 1,
//       "start_time": "2024-01-01T09:00:00.000000Z",
//       "scheduling_url": "https://calendly.com/acmesales/discovery-call/2024-01-01T09:00:00Z"
//     }
//   ]
// }
#[derive(Debug, Deserialize)]
pub struct AvailableTimes {
    #[serde(default)]
    pub collection: Vec<AvailableTime>,
}

/// Only the start time is kept. The upstream `status` is not read, every
/// returned slot is reported as available.
#[derive(Debug, Deserialize)]
pub struct AvailableTime {
    pub start_time: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SchedulingLinkRequest {
    pub max_event_count: u32,
    pub owner: String,
    pub owner_type: String,
}

#[derive(Debug, Deserialize)]
pub struct SchedulingLink {
    pub booking_url: String,
    pub owner: String,
    pub owner_type: String,
}
