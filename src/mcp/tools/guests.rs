//! Guest tools (Enterprise workspaces).

use futures_util::future::BoxFuture;

use crate::clickup::ClickUpClient;
use crate::mcp::arguments::Arguments;
use crate::mcp::catalogue::{Catalogue, FieldType, OperationDescriptor};
use crate::mcp::error::ToolResult;
use crate::mcp::render;

pub(super) fn register(catalogue: &mut Catalogue) {
    catalogue
        .register(
            OperationDescriptor::new("invite-guest", "Invite a guest to a team")
                .required("team_id", FieldType::String, "Team (workspace) ID")
                .required("email", FieldType::String, "Guest email address")
                .optional("can_edit_tags", FieldType::Boolean, "Allow editing tags")
                .optional(
                    "can_see_time_estimated",
                    FieldType::Boolean,
                    "Allow seeing time estimates",
                )
                .optional("can_see_time_spent", FieldType::Boolean, "Allow seeing time spent"),
            invite_guest,
        )
        .register(
            OperationDescriptor::new("get-guest", "Get a guest by ID")
                .required("team_id", FieldType::String, "Team (workspace) ID")
                .required("guest_id", FieldType::String, "Guest ID"),
            get_guest,
        )
        .register(
            OperationDescriptor::new("remove-guest", "Remove a guest from a team")
                .required("team_id", FieldType::String, "Team (workspace) ID")
                .required("guest_id", FieldType::String, "Guest ID"),
            remove_guest,
        )
        .register(
            OperationDescriptor::new("add-guest-to-task", "Share a task with a guest")
                .required("task_id", FieldType::String, "Task ID")
                .required("guest_id", FieldType::String, "Guest ID")
                .required(
                    "permission_level",
                    FieldType::String,
                    "Access granted to the guest: read, comment, edit or create",
                ),
            add_guest_to_task,
        );
}

fn invite_guest(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let team_id = args.take_id("team_id")?;
        let email = args.get_str("email").unwrap_or(render::UNKNOWN).to_string();
        client.invite_guest(&team_id, args.into_params()).await?;
        Ok(format!("Invited guest: {}", email))
    })
}

fn get_guest(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let team_id = args.take_id("team_id")?;
        let guest_id = args.take_id("guest_id")?;
        let guest = client.get_guest(&team_id, &guest_id).await?;
        let user = guest.get("user").unwrap_or(&guest);
        Ok(format!("Guest: {}", render::summary(user)))
    })
}

fn remove_guest(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let team_id = args.take_id("team_id")?;
        let guest_id = args.take_id("guest_id")?;
        client.remove_guest(&team_id, &guest_id).await?;
        Ok(format!("Removed guest (ID: {}) from team {}", guest_id, team_id))
    })
}

fn add_guest_to_task(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let guest_id = args.take_id("guest_id")?;
        client
            .add_guest_to_task(&task_id, &guest_id, args.into_params())
            .await?;
        Ok(format!("Added guest {} to task {}", guest_id, task_id))
    })
}
