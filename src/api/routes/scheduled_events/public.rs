//! Public types for the scheduled events API
use serde::{Deserialize, Serialize};

use crate::calendly::models::SchedulingLink;

pub const BOOKING_CREATED_MESSAGE: &str = "✅ Booking link created successfully";

#[derive(Debug, Serialize, Deserialize)]
pub struct BookingResponse {
    pub message: String,
    pub booking_url: String,
    pub owner: String,
    pub owner_type: String,
}

impl From<SchedulingLink> for BookingResponse {
    fn from(link: SchedulingLink) -> Self {
        Self {
            message: BOOKING_CREATED_MESSAGE.to_string(),
            booking_url: link.booking_url,
            owner: link.owner,
            owner_type: link.owner_type,
        }
    }
}
