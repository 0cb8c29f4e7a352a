use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::client::{ForecastSource, NwsClient};
use crate::formatters::{
    format_forecast, format_points_unavailable, FORECAST_UNAVAILABLE, MISSING_FORECAST_URL,
};
use crate::models::{Coordinate, GetForecastRequest};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    source: Arc<dyn ForecastSource>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a Weather service backed by the public NWS API
    pub fn new() -> Result<Self> {
        Ok(Self::with_source(Arc::new(NwsClient::new()?)))
    }

    pub fn with_source(source: Arc<dyn ForecastSource>) -> Self {
        Self {
            source,
            tool_router: Self::tool_router(),
        }
    }

    /// Resolves a coordinate to forecast text.
    ///
    /// Upstream failures are reported in the returned text rather than as errors.
    pub async fn forecast_text(&self, coord: &Coordinate) -> String {
        let Some(points) = self.source.grid_point(coord).await else {
            return format_points_unavailable(coord);
        };

        let Some(forecast_url) = points.properties.forecast.filter(|url| !url.is_empty()) else {
            tracing::warn!("Grid point response has no forecast URL");
            return MISSING_FORECAST_URL.to_string();
        };

        let Some(forecast) = self.source.forecast(&forecast_url).await else {
            return FORECAST_UNAVAILABLE.to_string();
        };

        format_forecast(coord, &forecast.properties.periods)
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nws-forecast".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Weather forecasts from the National Weather Service API. \
                Only US locations are covered."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets the weather forecast for a US location
    #[tool(description = "Get weather forecast for a location")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let coord = Coordinate::try_from(request)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let text = self.forecast_text(&coord).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
