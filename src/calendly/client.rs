use std::time::Duration;

use http::{HeaderValue, header};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

use super::CalendlyError;
use super::models::{
    AvailableTime, AvailableTimes, Collection, Resource, SchedulingLink, SchedulingLinkRequest,
};
use crate::core::AppConfig;

/// Thin client over the Calendly REST API.
///
/// Every request carries the static bearer token and a JSON content
/// type. Failed requests are never retried.
#[derive(Clone, Debug)]
pub struct CalendlyClient {
    client: Client,
    api_base_url: String,
    api_key: String,
    timeout: Duration,
}

impl CalendlyClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            api_base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            timeout: config.request_timeout(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, CalendlyError> {
        let mut request = request
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .build()?;
        // `RequestBuilder::json` has already set it on requests with a body
        request
            .headers_mut()
            .entry(header::CONTENT_TYPE)
            .or_insert(HeaderValue::from_static("application/json"));

        let res = self.client.execute(request).await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(CalendlyError::Upstream { status, body });
        }
        Ok(res)
    }

    /// Profile of the user that owns the API key
    pub async fn current_user(&self) -> Result<Value, CalendlyError> {
        let res = self.send(self.client.get(self.url("users/me"))).await?;
        let user: Resource<Value> = res.json().await?;
        Ok(user.resource)
    }

    pub async fn event_types(&self, user_uri: &str) -> Result<Vec<Value>, CalendlyError> {
        let request = self
            .client
            .get(self.url("event_types"))
            .query(&[("user", user_uri)]);
        let res = self.send(request).await?;
        let event_types: Collection<Value> = res.json().await?;
        Ok(event_types.collection)
    }

    /// Open slots for an event type between two ISO-8601 timestamps
    pub async fn available_times(
        &self,
        event_type_uri: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<Vec<AvailableTime>, CalendlyError> {
        let request = self
            .client
            .get(self.url("event_type_available_times"))
            .query(&[
                ("event_type", event_type_uri),
                ("start_time", start_time),
                ("end_time", end_time),
            ]);
        let res = self.send(request).await?;
        let times: AvailableTimes = res.json().await?;
        Ok(times.collection)
    }

    pub async fn create_scheduling_link(
        &self,
        payload: &SchedulingLinkRequest,
    ) -> Result<SchedulingLink, CalendlyError> {
        tracing::debug!("Scheduling link payload: {:?}", payload);

        let request = self
            .client
            .post(self.url("scheduling_links"))
            .json(payload);
        let res = match self.send(request).await {
            Ok(res) => res,
            Err(err) => {
                tracing::error!("Scheduling link request failed: {}", err);
                return Err(err);
            }
        };
        let status = res.status();
        let text = res.text().await?;
        tracing::debug!("Scheduling link response {}: {}", status, text);

        let link: Resource<SchedulingLink> =
            serde_json::from_str(&text).map_err(CalendlyError::Decode)?;
        Ok(link.resource)
    }
}
