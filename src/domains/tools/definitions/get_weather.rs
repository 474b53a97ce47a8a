//! Weather lookup tool definition.
//!
//! Reads the weather catalog and reports a one-line summary for a city.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::Config;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the weather lookup tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetWeatherParams {
    /// Name of the city to report on.
    #[schemars(description = "City name")]
    pub city: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Weather lookup tool - reports the recorded reading for a city.
pub struct GetWeatherTool;

impl GetWeatherTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_weather";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get weather for a city";

    /// Execute the tool logic.
    ///
    /// The lookup is case-insensitive, but the response echoes the city
    /// exactly as the caller spelled it. Cities missing from the catalog get
    /// the fallback reading rather than an error.
    #[instrument(skip_all, fields(city = %params.city))]
    pub fn execute(params: &GetWeatherParams, config: &Config) -> CallToolResult {
        let reading = config.weather.reading_for(&params.city);

        info!(
            "Reporting {}°C, {} for {}",
            reading.temperature, reading.condition, params.city
        );

        CallToolResult::success(vec![Content::text(format!(
            "Weather in {}: {}°C, {}",
            params.city, reading.temperature, reading.condition
        ))])
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetWeatherParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: GetWeatherParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
