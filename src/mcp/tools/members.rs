//! Watcher and member tools.

use futures_util::future::BoxFuture;
use serde_json::Value;

use crate::clickup::ClickUpClient;
use crate::mcp::arguments::Arguments;
use crate::mcp::catalogue::{Catalogue, FieldType, OperationDescriptor};
use crate::mcp::error::ToolResult;
use crate::mcp::render;

pub(super) fn register(catalogue: &mut Catalogue) {
    catalogue
        .register(
            OperationDescriptor::new("get-task-watchers", "List the users watching a task")
                .required("task_id", FieldType::String, "Task ID"),
            get_task_watchers,
        )
        .register(
            OperationDescriptor::new("add-task-watcher", "Add a watcher to a task")
                .required("task_id", FieldType::String, "Task ID")
                .required("watcher_id", FieldType::Integer, "User ID"),
            add_task_watcher,
        )
        .register(
            OperationDescriptor::new(
                "get-task-members",
                "List the users with explicit access to a task",
            )
            .required("task_id", FieldType::String, "Task ID"),
            get_task_members,
        )
        .register(
            OperationDescriptor::new(
                "get-list-members",
                "List the users with explicit access to a list",
            )
            .required("list_id", FieldType::String, "List ID"),
            get_list_members,
        );
}

fn get_task_watchers(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let watchers = client.get_task_watchers(&task_id).await?;
        Ok(render::bullets("Watchers", "watchers", &watchers))
    })
}

fn add_task_watcher(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let body = args.into_params();
        let watcher_id = body
            .get("watcher_id")
            .map_or_else(|| render::UNKNOWN.to_string(), Value::to_string);
        client.add_task_watcher(&task_id, body).await?;
        Ok(format!("Added watcher {} to task {}", watcher_id, task_id))
    })
}

fn get_task_members(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let members = client.get_task_members(&task_id).await?;
        Ok(render::bullets("Task members", "members", &members))
    })
}

fn get_list_members(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let list_id = args.take_id("list_id")?;
        let members = client.get_list_members(&list_id).await?;
        Ok(render::bullets("List members", "members", &members))
    })
}
