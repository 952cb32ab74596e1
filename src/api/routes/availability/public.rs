//! Public types for the availability API
use serde::{Deserialize, Serialize};

use crate::calendly::availability::{Availability, Slot};

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AvailableSlot {
    pub start_time: String,
    pub end_time: String,
    pub available: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub date_range: String,
    pub available_slots: Vec<AvailableSlot>,
}

impl From<Slot> for AvailableSlot {
    fn from(slot: Slot) -> Self {
        Self {
            start_time: slot.start_time,
            end_time: slot.end_time,
            // Calendly only returns open slots
            available: true,
        }
    }
}

impl From<Availability> for AvailabilityResponse {
    fn from(availability: Availability) -> Self {
        Self {
            date_range: availability.date_range,
            available_slots: availability.slots.into_iter().map(Into::into).collect(),
        }
    }
}
