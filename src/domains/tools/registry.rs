//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry is the inspectable name-to-handler mapping: it lists the
//! available tools and dispatches direct calls, returning a typed error
//! value instead of raising through the protocol layer.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use tracing::warn;

use crate::core::config::Config;

use super::definitions::{GetWeatherParams, GetWeatherTool};
use super::error::ToolError;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![GetWeatherTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the advertised tool list.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![GetWeatherTool::to_tool()]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Unknown names and malformed arguments come back as `ToolError`
    /// values; the lookup itself cannot fail.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        match name {
            GetWeatherTool::NAME => {
                let params: GetWeatherParams = serde_json::from_value(arguments)
                    .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
                Ok(GetWeatherTool::execute(&params, &self.config))
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(Config::default()))
    }

    #[test]
    fn test_registry_tool_names() {
        let names = test_registry().tool_names();
        assert_eq!(names, vec!["get_weather"]);
    }

    #[test]
    fn test_registry_metadata_lists_single_tool() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name.as_ref(), "get_weather");
    }

    #[test]
    fn test_call_get_weather() {
        let result = test_registry()
            .call_tool("get_weather", json!({ "city": "tokyo" }))
            .unwrap();
        assert!(!result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_call_unknown_tool() {
        let err = test_registry().call_tool("get_time", json!({})).unwrap_err();
        assert!(matches!(err, ToolError::NotFound(ref name) if name == "get_time"));
        assert_eq!(err.to_string(), "Unknown tool: get_time");
    }

    #[test]
    fn test_call_with_missing_city() {
        let err = test_registry()
            .call_tool("get_weather", json!({}))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_call_with_non_string_city() {
        let err = test_registry()
            .call_tool("get_weather", json!({ "city": 7 }))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
