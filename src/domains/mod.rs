//! Domain modules organized by bounded contexts.
//!
//! - **tools**: MCP tools that can be executed by clients
//! - **weather**: the weather catalog backing the tools

pub mod tools;
pub mod weather;
