//! MCP server implementation
//!
//! Bridges rmcp's `tools/list` and `tools/call` onto the [`ToolAdapter`].

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::{
        CallToolRequestParams, CallToolResult, Content, ListToolsResult,
        PaginatedRequestParams, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
};
use tracing::debug;

use super::adapter::ToolAdapter;

const INSTRUCTIONS: &str = "ClickUp MCP server. Manage teams, spaces, folders, lists, tasks, \
comments, checklists, tags, custom fields, time tracking, dependencies, members, guests, \
goals and webhooks. Start with get-teams to discover team IDs, then walk down the hierarchy.";

/// MCP server coordinator. Cheap to clone; every clone shares one adapter.
#[derive(Clone)]
pub struct McpServer {
    adapter: Arc<ToolAdapter>,
}

impl McpServer {
    pub fn new(adapter: impl Into<Arc<ToolAdapter>>) -> Self {
        Self {
            adapter: adapter.into(),
        }
    }

    /// Every operation as an MCP tool definition.
    pub fn tools(&self) -> Vec<Tool> {
        self.adapter
            .list_operations()
            .into_iter()
            .map(|descriptor| descriptor.to_tool())
            .collect()
    }

    pub fn adapter(&self) -> &ToolAdapter {
        &self.adapter
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.instructions = Some(INSTRUCTIONS.to_string());
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        debug!(tool = %request.name, "Received tool call");
        match self.adapter.call(&request.name, request.arguments).await {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => e.into_call_result(),
        }
    }
}
