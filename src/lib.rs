//! Weather MCP Server Library
//!
//! This crate provides a minimal Model Context Protocol (MCP) server that
//! exposes a single tool, `get_weather`, backed by an immutable in-memory
//! weather catalog.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server handler, and the stdio transport lifecycle
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients
//!   - **weather**: the weather catalog backing the tools
//!
//! # Example
//!
//! ```rust,no_run
//! use weather_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
