//! HTTP access to the National Weather Service API.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::constants::{GEO_JSON, NWS_API_BASE, USER_AGENT};
use crate::error::{Result, WeatherError};
use crate::models::{Coordinate, ForecastResponse, PointsResponse};

/// Where forecast documents come from.
///
/// Lookups yield `None` on any failure; callers only need to know that no
/// data is available, not why.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Resolves a coordinate to its NWS grid point
    async fn grid_point(&self, coord: &Coordinate) -> Option<PointsResponse>;

    /// Fetches the forecast document a grid point links to
    async fn forecast(&self, url: &str) -> Option<ForecastResponse>;
}

#[derive(Debug, Clone)]
pub struct NwsClient {
    client: Client,
    base_url: String,
}

impl NwsClient {
    /// Creates a client for the public NWS endpoint
    pub fn new() -> Result<Self> {
        Self::with_base_url(NWS_API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GEO_JSON));

        let builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers);
        // Tests talk to a loopback listener; keep ambient proxy settings out of it.
        #[cfg(test)]
        let builder = builder.no_proxy();
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn points_url(&self, coord: &Coordinate) -> String {
        format!("{}{}", self.base_url, coord.points_path())
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ForecastSource for NwsClient {
    async fn grid_point(&self, coord: &Coordinate) -> Option<PointsResponse> {
        let url = self.points_url(coord);
        self.get_json(&url)
            .await
            .map_err(|e| tracing::warn!("Grid point lookup failed: {}", e))
            .ok()
    }

    async fn forecast(&self, url: &str) -> Option<ForecastResponse> {
        self.get_json(url)
            .await
            .map_err(|e| tracing::warn!("Forecast lookup failed: {}", e))
            .ok()
    }
}
