//! Tool invocation errors and their MCP representation.

use miette::Diagnostic;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde_json::json;
use thiserror::Error;

use crate::clickup::ClickUpError;

#[derive(Error, Diagnostic, Debug)]
pub enum ToolError {
    #[error("Unknown tool: {name}")]
    #[diagnostic(code(clickup_operator::tool::unknown_operation))]
    UnknownOperation { name: String },

    #[error("Missing arguments for {operation}: {}", fields.join(", "))]
    #[diagnostic(code(clickup_operator::tool::missing_arguments))]
    MissingArguments {
        operation: String,
        fields: Vec<String>,
    },

    #[error("Invalid argument '{field}' for {operation}: expected {expected}")]
    #[diagnostic(code(clickup_operator::tool::invalid_argument))]
    InvalidArgument {
        operation: String,
        field: String,
        expected: String,
    },

    #[error("Remote request failed: {0}")]
    #[diagnostic(code(clickup_operator::tool::remote_request_failed))]
    RemoteRequestFailed(#[from] ClickUpError),
}

impl ToolError {
    /// Remote HTTP status, for `RemoteRequestFailed` errors that have one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ToolError::RemoteRequestFailed(e) => e.status(),
            _ => None,
        }
    }

    /// Map onto the MCP surface.
    ///
    /// Caller mistakes become protocol errors. Remote failures become a tool
    /// result flagged as an error, so the agent sees the service's own
    /// message.
    pub fn into_call_result(self) -> Result<CallToolResult, McpError> {
        match self {
            ToolError::UnknownOperation { ref name } => Err(McpError::invalid_params(
                self.to_string(),
                Some(json!({"tool": name})),
            )),
            ToolError::MissingArguments {
                ref operation,
                ref fields,
            } => Err(McpError::invalid_params(
                self.to_string(),
                Some(json!({"tool": operation, "missing": fields})),
            )),
            ToolError::InvalidArgument {
                ref operation,
                ref field,
                ref expected,
            } => Err(McpError::invalid_params(
                self.to_string(),
                Some(json!({"tool": operation, "field": field, "expected": expected})),
            )),
            ToolError::RemoteRequestFailed(_) => {
                Ok(CallToolResult::error(vec![Content::text(self.to_string())]))
            }
        }
    }
}

pub type ToolResult<T> = Result<T, ToolError>;

/// Failures of the transport serving the MCP surface.
#[derive(Error, Diagnostic, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(clickup_operator::server::io))]
    Io(#[from] std::io::Error),

    #[error("MCP session failed to initialize: {message}")]
    #[diagnostic(code(clickup_operator::server::initialize))]
    Initialize { message: String },

    #[error("MCP session task failed: {0}")]
    #[diagnostic(code(clickup_operator::server::join))]
    Join(#[from] tokio::task::JoinError),
}
