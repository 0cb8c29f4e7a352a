/// User agent string for HTTP requests (NWS rejects requests without one)
pub const USER_AGENT: &str = "nws-forecast-mcp/0.1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Media type NWS serves grid point and forecast documents as
pub const GEO_JSON: &str = "application/geo+json";
