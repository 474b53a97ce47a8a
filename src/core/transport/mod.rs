//! Transport layer for the weather server.
//!
//! The server speaks MCP over standard input/output. The transport handles
//! the connection lifecycle and delegates message processing to the server
//! handler.

mod error;
mod service;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use service::TransportService;
pub use stdio::StdioTransport;
