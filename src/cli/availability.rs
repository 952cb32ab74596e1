use anyhow::Result;

use crate::api::public::availability::AvailabilityResponse;
use crate::calendly::CalendlyClient;
use crate::calendly::availability::get_availability;
use crate::core::AppConfig;

pub async fn run(start_date: &str, end_date: &str) -> Result<()> {
    let config = AppConfig::default();
    let client = CalendlyClient::new(&config);

    let availability =
        get_availability(&client, &config.event_type_uri, start_date, end_date).await?;
    let resp = AvailabilityResponse::from(availability);
    println!("{}", serde_json::to_string_pretty(&resp)?);

    Ok(())
}
