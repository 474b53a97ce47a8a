//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol: tool listing and tool invocation.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! The ToolRouter is built in `domains/tools/router.rs` and serves the wire
//! path; the ToolRegistry provides direct dispatch for embedding and tests.
//! Adding a new tool does not require modifying this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::tool::{ToolCallContext, ToolRouter},
    model::*,
    service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::tools::{ToolRegistry, build_tool_router};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Everything it
/// carries is immutable after construction, so each invocation is
/// independent of every other.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration, including the weather catalog.
    config: Arc<Config>,

    /// Tool router handling tool calls on the wire path.
    tool_router: ToolRouter<Self>,

    /// Registry for direct tool dispatch and metadata.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        Self {
            tool_router: build_tool_router::<Self>(config.clone()),
            registry: Arc::new(ToolRegistry::new(config.clone())),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration (for tool access).
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// List all available tools without going through the transport.
    pub fn list_tools(&self) -> Vec<Tool> {
        ToolRegistry::get_all_tools()
    }

    /// Call a tool by name without going through the transport.
    ///
    /// Dispatches through the ToolRegistry, so unknown names and malformed
    /// arguments come back as typed error values rather than protocol
    /// failures.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> crate::core::Result<CallToolResult> {
        Ok(self.registry.call_tool(name, arguments)?)
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("Simple weather MCP server".to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tool_router.list_all(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);

        // Unknown tools are a protocol error naming the offender; the server
        // keeps serving afterwards.
        if !self.tool_router.has_route(request.name.as_ref()) {
            return Err(McpError::new(
                ErrorCode::METHOD_NOT_FOUND,
                format!("Unknown tool: {}", request.name),
                None,
            ));
        }

        let context = ToolCallContext::new(self, request, context);
        self.tool_router.call(context).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn test_server() -> McpServer {
        McpServer::new(Config::default())
    }

    #[test]
    fn test_get_info_advertises_tools_only() {
        let info = test_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_list_tools_direct() {
        let tools = test_server().list_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name.as_ref(), "get_weather");
    }

    #[test]
    fn test_call_tool_direct() {
        let server = test_server();
        let result =
            tokio_test::block_on(server.call_tool("get_weather", json!({ "city": "London" })))
                .unwrap();

        let text = match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "Weather in London: 15°C, cloudy");
    }

    #[test]
    fn test_unknown_tool_then_recovers() {
        let server = test_server();

        let err = tokio_test::block_on(server.call_tool("get_time", json!({}))).unwrap_err();
        assert!(err.to_string().contains("get_time"));

        // A failed dispatch must not disturb later calls.
        let result =
            tokio_test::block_on(server.call_tool("get_weather", json!({ "city": "PARIS" })))
                .unwrap();
        assert!(!result.is_error.unwrap_or(false));
    }
}
