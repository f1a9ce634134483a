//! Goal tools.

use futures_util::future::BoxFuture;

use crate::clickup::ClickUpClient;
use crate::mcp::arguments::Arguments;
use crate::mcp::catalogue::{Catalogue, FieldType, OperationDescriptor};
use crate::mcp::error::ToolResult;
use crate::mcp::render;

pub(super) fn register(catalogue: &mut Catalogue) {
    catalogue
        .register(
            OperationDescriptor::new("get-goals", "List the goals in a team")
                .required("team_id", FieldType::String, "Team (workspace) ID")
                .optional("include_completed", FieldType::Boolean, "Include completed goals"),
            get_goals,
        )
        .register(
            OperationDescriptor::new("create-goal", "Create a goal in a team")
                .required("team_id", FieldType::String, "Team (workspace) ID")
                .required("name", FieldType::String, "Goal name")
                .optional("due_date", FieldType::Integer, "Due date (Unix ms)")
                .optional("description", FieldType::String, "Goal description")
                .optional("multiple_owners", FieldType::Boolean, "Allow several owners")
                .optional(
                    "owners",
                    FieldType::array_of(FieldType::Integer),
                    "Owner user IDs",
                )
                .optional("color", FieldType::String, "Hex color"),
            create_goal,
        )
        .register(
            OperationDescriptor::new("update-goal", "Update a goal")
                .required("goal_id", FieldType::String, "Goal ID (UUID)")
                .optional("name", FieldType::String, "New name")
                .optional("due_date", FieldType::Integer, "Due date (Unix ms)")
                .optional("description", FieldType::String, "Goal description")
                .optional("color", FieldType::String, "Hex color"),
            update_goal,
        )
        .register(
            OperationDescriptor::new("delete-goal", "Delete a goal")
                .required("goal_id", FieldType::String, "Goal ID (UUID)"),
            delete_goal,
        );
}

fn get_goals(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let team_id = args.take_id("team_id")?;
        let goals = client.get_goals(&team_id, args.into_params()).await?;
        Ok(render::bullets("Goals", "goals", &goals))
    })
}

fn create_goal(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let team_id = args.take_id("team_id")?;
        let goal = client.create_goal(&team_id, args.into_params()).await?;
        Ok(render::created("goal", &goal))
    })
}

fn update_goal(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let goal_id = args.take_id("goal_id")?;
        let goal = client.update_goal(&goal_id, args.into_params()).await?;
        Ok(render::updated("goal", &goal))
    })
}

fn delete_goal(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let goal_id = args.take_id("goal_id")?;
        let response = client.delete_goal(&goal_id).await?;
        Ok(render::deleted("goal", &goal_id, &response))
    })
}
