//! Model Context Protocol (MCP) surface
//!
//! Exposes every ClickUp operation as an MCP tool.
//!
//! # Architecture
//!
//! - **catalogue**: operation descriptors and the name → handler lookup table
//! - **tools**: one module per ClickUp resource, each registering its handlers
//! - **arguments**: validation of call arguments against a descriptor
//! - **render**: plain-text summaries of ClickUp JSON
//! - **adapter**: [`ToolAdapter`], dispatch of a named call to the client
//! - **server**: [`McpServer`], the rmcp `ServerHandler`
//! - **service**: stdio and Streamable HTTP transports

mod adapter;
pub mod arguments;
pub mod catalogue;
mod error;
pub mod render;
pub mod server;
mod service;
pub mod tools;

#[cfg(test)]
mod adapter_test;

pub use adapter::ToolAdapter;
pub use error::{ServerError, ToolError, ToolResult};
pub use server::McpServer;
pub use service::{create_mcp_service, router, serve_http, serve_stdio};
