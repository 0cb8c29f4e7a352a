use crate::models::{Coordinate, ForecastPeriod};

pub const MISSING_FORECAST_URL: &str = "Failed to get forecast URL from grid point data";
pub const FORECAST_UNAVAILABLE: &str = "Failed to retrieve forecast data";

/// Message returned when NWS has no grid point for the coordinates
pub fn format_points_unavailable(coord: &Coordinate) -> String {
    format!(
        "Failed to retrieve grid point data for coordinates: {}, {}. \
         This location may not be supported by the NWS API (only US locations are supported).",
        coord.latitude(),
        coord.longitude()
    )
}

/// Formats NWS forecast periods into a human-readable string.
///
/// The header names the coordinates the caller asked for, not the resolved grid point.
pub fn format_forecast(coord: &Coordinate, periods: &[ForecastPeriod]) -> String {
    let blocks: Vec<String> = periods.iter().map(format_period).collect();
    format!(
        "Forecast for {}, {}:\n\n{}",
        coord.latitude(),
        coord.longitude(),
        blocks.join("\n")
    )
}

/// Renders one period as five lines, the last being a `---` separator.
pub fn format_period(period: &ForecastPeriod) -> String {
    let temperature = period
        .temperature
        .map(|t| t.to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    [
        format!("{}:", text_or(&period.name, "Unknown")),
        format!(
            "Temperature: {}\u{00b0}{}",
            temperature,
            text_or(&period.temperature_unit, "F")
        ),
        format!(
            "Wind: {} {}",
            text_or(&period.wind_speed, "Unknown"),
            text_or(&period.wind_direction, "")
        ),
        text_or(&period.short_forecast, "No forecast available").to_string(),
        "---".to_string(),
    ]
    .join("\n")
}

// Empty strings from NWS are treated like missing fields.
fn text_or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    match value.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => default,
    }
}
