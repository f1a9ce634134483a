//! Space tools.

use futures_util::future::BoxFuture;

use crate::clickup::ClickUpClient;
use crate::mcp::arguments::Arguments;
use crate::mcp::catalogue::{Catalogue, FieldType, OperationDescriptor};
use crate::mcp::error::ToolResult;
use crate::mcp::render;

pub(super) fn register(catalogue: &mut Catalogue) {
    catalogue
        .register(
            OperationDescriptor::new("get-spaces", "List the spaces in a team")
                .required("team_id", FieldType::String, "Team (workspace) ID")
                .optional("archived", FieldType::Boolean, "Include archived spaces"),
            get_spaces,
        )
        .register(
            OperationDescriptor::new("get-space", "Get a space by ID")
                .required("space_id", FieldType::String, "Space ID"),
            get_space,
        )
        .register(
            OperationDescriptor::new("create-space", "Create a new space in a team")
                .required("team_id", FieldType::String, "Team (workspace) ID")
                .required("name", FieldType::String, "Space name")
                .optional(
                    "multiple_assignees",
                    FieldType::Boolean,
                    "Allow multiple assignees on tasks",
                )
                .optional(
                    "features",
                    FieldType::Object,
                    "ClickApp feature toggles, e.g. {\"due_dates\": {\"enabled\": true}}",
                ),
            create_space,
        )
        .register(
            OperationDescriptor::new("update-space", "Rename or reconfigure a space")
                .required("space_id", FieldType::String, "Space ID")
                .optional("name", FieldType::String, "New name")
                .optional("color", FieldType::String, "Hex color, e.g. #7B68EE")
                .optional("private", FieldType::Boolean, "Make the space private")
                .optional(
                    "admin_can_manage",
                    FieldType::Boolean,
                    "Allow admins to manage the space",
                )
                .optional(
                    "multiple_assignees",
                    FieldType::Boolean,
                    "Allow multiple assignees on tasks",
                )
                .optional("features", FieldType::Object, "ClickApp feature toggles"),
            update_space,
        )
        .register(
            OperationDescriptor::new("delete-space", "Delete a space and everything in it")
                .required("space_id", FieldType::String, "Space ID"),
            delete_space,
        );
}

fn get_spaces(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let team_id = args.take_id("team_id")?;
        let spaces = client.get_spaces(&team_id, args.into_params()).await?;
        Ok(render::bullets("Spaces", "spaces", &spaces))
    })
}

fn get_space(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let space_id = args.take_id("space_id")?;
        let space = client.get_space(&space_id).await?;
        Ok(format!("Space: {}", render::summary(&space)))
    })
}

fn create_space(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let team_id = args.take_id("team_id")?;
        let space = client.create_space(&team_id, args.into_params()).await?;
        Ok(render::created("space", &space))
    })
}

fn update_space(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let space_id = args.take_id("space_id")?;
        let space = client.update_space(&space_id, args.into_params()).await?;
        Ok(render::updated("space", &space))
    })
}

fn delete_space(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let space_id = args.take_id("space_id")?;
        let response = client.delete_space(&space_id).await?;
        Ok(render::deleted("space", &space_id, &response))
    })
}
