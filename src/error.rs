//! Error types for the forecast pipeline.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} failed with status: {status}")]
    Status { url: String, status: StatusCode },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid coordinates: {latitude}, {longitude} (latitude must be within -90..=90, longitude within -180..=180)")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

pub type Result<T> = std::result::Result<T, WeatherError>;
