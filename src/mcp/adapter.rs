//! Dispatch of named tool invocations to the ClickUp client.

use std::sync::Arc;

use rmcp::model::JsonObject;
use tracing::{info, instrument, warn};

use crate::clickup::ClickUpClient;

use super::arguments::Arguments;
use super::catalogue::{Catalogue, OperationDescriptor};
use super::error::{ToolError, ToolResult};
use super::tools;

/// The tool catalogue bound to one client session.
pub struct ToolAdapter {
    client: Arc<ClickUpClient>,
    catalogue: Catalogue,
}

impl ToolAdapter {
    /// Bind the full ClickUp catalogue to `client`.
    pub fn new(client: Arc<ClickUpClient>) -> Self {
        Self::with_catalogue(client, tools::catalogue())
    }

    /// Bind an arbitrary catalogue, e.g. a reduced tool set.
    pub fn with_catalogue(client: Arc<ClickUpClient>, catalogue: Catalogue) -> Self {
        Self { client, catalogue }
    }

    /// Every operation, in registration order. Pure.
    pub fn list_operations(&self) -> Vec<&OperationDescriptor> {
        self.catalogue.descriptors().collect()
    }

    /// Validate and execute one invocation, returning rendered text.
    ///
    /// Exactly one remote request is made on success; none when the name is
    /// unknown or the arguments do not satisfy the schema.
    #[instrument(skip(self, arguments))]
    pub async fn call(&self, name: &str, arguments: Option<JsonObject>) -> ToolResult<String> {
        let (descriptor, handler) =
            self.catalogue
                .get(name)
                .ok_or_else(|| ToolError::UnknownOperation {
                    name: name.to_string(),
                })?;

        let arguments = Arguments::extract(descriptor, arguments)?;

        match handler(&self.client, arguments).await {
            Ok(text) => {
                info!("Tool call succeeded");
                Ok(text)
            }
            Err(e) => {
                warn!(error = %e, "Tool call failed");
                Err(e)
            }
        }
    }
}
