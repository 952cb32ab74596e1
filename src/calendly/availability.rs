//! Availability lookup for the configured event type.
//!
//! Calendly only reports slot start times. Every slot is assumed to last
//! `SLOT_DURATION_MINUTES` and to be bookable, whatever the event type
//! actually says.

use chrono::{Duration, NaiveDateTime, Timelike};

use super::{CalendlyClient, CalendlyError};

pub const SLOT_DURATION_MINUTES: i64 = 30;

/// Time window sent upstream. Dates are used as-is, without parsing or
/// checking that start comes before end.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryWindow {
    pub start_time: String,
    pub end_time: String,
}

impl QueryWindow {
    pub fn for_dates(start_date: &str, end_date: &str) -> Self {
        Self {
            start_time: format!("{}T00:00:00Z", start_date),
            end_time: format!("{}T23:59:59Z", end_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    /// Start time exactly as Calendly returned it
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug)]
pub struct Availability {
    pub date_range: String,
    pub slots: Vec<Slot>,
}

/// Build a slot from an upstream start time such as
/// `2024-01-01T09:00:00Z`. The UTC marker is dropped rather than
/// interpreted and appended again to the computed end time.
pub fn slot_from_start(start_time: &str) -> Result<Slot, CalendlyError> {
    let start = start_time
        .replace('Z', "")
        .parse::<NaiveDateTime>()
        .map_err(|source| CalendlyError::InvalidStartTime {
            value: start_time.to_string(),
            source,
        })?;
    let end = start + Duration::minutes(SLOT_DURATION_MINUTES);

    Ok(Slot {
        start_time: start_time.to_string(),
        end_time: format!("{}Z", iso_format(end)),
    })
}

// Sub-second precision is only written out when present
fn iso_format(dt: NaiveDateTime) -> String {
    if dt.nanosecond() == 0 {
        dt.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

pub async fn get_availability(
    client: &CalendlyClient,
    event_type_uri: &str,
    start_date: &str,
    end_date: &str,
) -> Result<Availability, CalendlyError> {
    let window = QueryWindow::for_dates(start_date, end_date);
    let times = client
        .available_times(event_type_uri, &window.start_time, &window.end_time)
        .await?;

    let slots = times
        .iter()
        .map(|time| {
            tracing::debug!("Available time: {:?}", time);
            slot_from_start(&time.start_time)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Availability {
        date_range: format!("{} - {}", start_date, end_date),
        slots,
    })
}
