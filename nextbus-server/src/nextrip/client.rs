//! NexTrip HTTP client.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::domain::{DirectionCode, RouteCode, StopCode};

use super::error::NexTripError;
use super::types::{DepartureDto, DirectionDto, RouteDto, StopDto};
use super::TransitApi;

/// Default base URL for the NexTrip API.
const DEFAULT_BASE_URL: &str = "https://svc.metrotransit.org/NexTrip";

/// Configuration for the NexTrip client.
#[derive(Debug, Clone)]
pub struct NexTripConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NexTripConfig {
    /// Create a config with the production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for NexTripConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the NexTrip API.
///
/// NexTrip is unauthenticated; the only resilience mechanism is the
/// request timeout. There are no retries, matching the upstream
/// service's usage guidance.
#[derive(Debug, Clone)]
pub struct NexTripClient {
    http: reqwest::Client,
    base_url: String,
}

impl NexTripClient {
    /// Create a new NexTrip client with the given configuration.
    pub fn new(config: NexTripConfig) -> Result<Self, NexTripError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Issue a GET and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, NexTripError> {
        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NexTripError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| NexTripError::Json {
            message: e.to_string(),
        })
    }
}

impl TransitApi for NexTripClient {
    async fn routes(&self) -> Result<Vec<RouteDto>, NexTripError> {
        self.get_json(format!("{}/Routes", self.base_url)).await
    }

    async fn directions(&self, route: &RouteCode) -> Result<Vec<DirectionDto>, NexTripError> {
        self.get_json(format!("{}/Directions/{}", self.base_url, route))
            .await
    }

    async fn stops(
        &self,
        route: &RouteCode,
        direction: &DirectionCode,
    ) -> Result<Vec<StopDto>, NexTripError> {
        self.get_json(format!("{}/Stops/{}/{}", self.base_url, route, direction))
            .await
    }

    async fn departures(
        &self,
        route: &RouteCode,
        direction: &DirectionCode,
        stop: &StopCode,
    ) -> Result<Vec<DepartureDto>, NexTripError> {
        self.get_json(format!(
            "{}/{}/{}/{}",
            self.base_url, route, direction, stop
        ))
        .await
    }
}
