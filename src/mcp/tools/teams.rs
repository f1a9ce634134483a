//! Tools for the authorized user and teams (workspaces).

use futures_util::future::BoxFuture;

use crate::clickup::ClickUpClient;
use crate::mcp::arguments::Arguments;
use crate::mcp::catalogue::{Catalogue, OperationDescriptor};
use crate::mcp::error::ToolResult;
use crate::mcp::render;

pub(super) fn register(catalogue: &mut Catalogue) {
    catalogue
        .register(
            OperationDescriptor::new(
                "get-authorized-user",
                "Get information about the currently authorized user",
            ),
            get_authorized_user,
        )
        .register(
            OperationDescriptor::new("get-teams", "Get all accessible teams/workspaces"),
            get_teams,
        );
}

fn get_authorized_user(client: &ClickUpClient, _args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let user = client.get_authorized_user().await?;
        Ok(format!(
            "Authorized user: {} (ID: {})",
            render::field(&user, "username"),
            render::id(&user)
        ))
    })
}

fn get_teams(client: &ClickUpClient, _args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let teams = client.get_teams().await?;
        Ok(render::bullets("Available teams", "teams", &teams))
    })
}
