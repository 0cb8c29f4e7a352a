use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WeatherError};

// ============================================================================
// National Weather Service API Models
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PointsResponse {
    #[serde(default)]
    pub properties: PointsProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PointsProperties {
    /// URL of the forecast resource for this grid cell
    pub forecast: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

/// One forecast entry. NWS does not guarantee any of these, so all are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastPeriod {
    pub name: Option<String>,
    pub temperature: Option<f64>,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: Option<String>,
    #[serde(rename = "windSpeed")]
    pub wind_speed: Option<String>,
    #[serde(rename = "windDirection")]
    pub wind_direction: Option<String>,
    #[serde(rename = "shortForecast")]
    pub short_forecast: Option<String>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
}

/// A validated latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let in_range = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !in_range {
            return Err(WeatherError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Path of the NWS points endpoint, coordinates fixed to 4 decimal places
    pub fn points_path(&self) -> String {
        format!("/points/{:.4},{:.4}", self.latitude, self.longitude)
    }
}

impl TryFrom<GetForecastRequest> for Coordinate {
    type Error = WeatherError;

    fn try_from(request: GetForecastRequest) -> Result<Self> {
        Coordinate::new(request.latitude, request.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn points_path_uses_four_decimals() {
        let coord = Coordinate::new(38.88945, -77.0).unwrap();
        assert!(coord.points_path().starts_with("/points/38.889"));
        assert!(coord.points_path().ends_with(",-77.0000"));

        let coord = Coordinate::new(40.7128, -74.006).unwrap();
        assert_eq!(coord.points_path(), "/points/40.7128,-74.0060");
    }

    #[test]
    fn coordinate_rejects_out_of_range_values() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(matches!(
            Coordinate::new(91.0, 0.0),
            Err(WeatherError::InvalidCoordinate { .. })
        ));
        assert!(Coordinate::new(0.0, -180.5).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn points_response_tolerates_missing_forecast() {
        let points: PointsResponse =
            serde_json::from_value(json!({ "properties": { "gridId": "LWX" } })).unwrap();
        assert!(points.properties.forecast.is_none());

        let points: PointsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(points.properties.forecast.is_none());
    }

    #[test]
    fn forecast_period_fields_are_optional() {
        let forecast: ForecastResponse = serde_json::from_value(json!({
            "properties": {
                "periods": [
                    {
                        "name": "Tonight",
                        "temperature": 72,
                        "temperatureUnit": "F",
                        "windSpeed": "5 mph",
                        "windDirection": "NW",
                        "shortForecast": "Clear"
                    },
                    { "temperature": null },
                    {}
                ]
            }
        }))
        .unwrap();

        let periods = &forecast.properties.periods;
        assert_eq!(periods.len(), 3);
        assert_eq!(periods[0].name.as_deref(), Some("Tonight"));
        assert_eq!(periods[0].temperature, Some(72.0));
        assert_eq!(periods[0].wind_direction.as_deref(), Some("NW"));
        assert!(periods[1].temperature.is_none());
        assert!(periods[2].short_forecast.is_none());
    }

    #[test]
    fn forecast_response_requires_periods() {
        let result = serde_json::from_value::<ForecastResponse>(json!({ "properties": {} }));
        assert!(result.is_err());
    }
}
