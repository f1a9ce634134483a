//! Task dependency and task link tools.

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
            OperationDescriptor::new("get-task-dependencies", "List a task's dependencies")
                .required("task_id", FieldType::String, "Task ID"),
            get_task_dependencies,
        )
        .register(
            OperationDescriptor::new(
                "add-task-dependency",
                "Make a task wait on another task",
            )
            .required("task_id", FieldType::String, "Task that waits")
            .required("depends_on", FieldType::String, "Task it waits on")
            .optional_enum(
                "dependency_type",
                &["waiting_on", "blocking"],
                "Direction of the dependency",
            ),
            add_task_dependency,
        )
        .register(
            OperationDescriptor::new("remove-task-dependency", "Remove a task dependency")
                .required("task_id", FieldType::String, "Task ID")
                .required("dependency_id", FieldType::String, "ID of the task depended on"),
            remove_task_dependency,
        )
        .register(
            OperationDescriptor::new("add-task-link", "Link two tasks together")
                .required("task_id", FieldType::String, "Task ID")
                .required("links_to", FieldType::String, "Task ID to link to"),
            add_task_link,
        )
        .register(
            OperationDescriptor::new("delete-task-link", "Remove the link between two tasks")
                .required("task_id", FieldType::String, "Task ID")
                .required("links_to", FieldType::String, "Linked task ID"),
            delete_task_link,
        );
}

/// `- task_id depends on depends_on`
fn dependency_line(dependency: &Value) -> String {
    format!(
        "- {} depends on {}",
        render::field(dependency, "task_id"),
        render::field(dependency, "depends_on")
    )
}

fn get_task_dependencies(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let dependencies = client.get_task_dependencies(&task_id).await?;
        Ok(render::listing(
            "Dependencies",
            "dependencies",
            &dependencies,
            dependency_line,
        ))
    })
}

fn add_task_dependency(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let depends_on = args.get_str("depends_on").unwrap_or(render::UNKNOWN).to_string();
        client
            .add_task_dependency(&task_id, args.into_params())
            .await?;
        Ok(format!("Task {} now depends on {}", task_id, depends_on))
    })
}

fn remove_task_dependency(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let dependency_id = args.take_id("dependency_id")?;
        client
            .remove_task_dependency(&task_id, &dependency_id)
            .await?;
        Ok(format!(
            "Removed dependency of task {} on {}",
            task_id, dependency_id
        ))
    })
}

fn add_task_link(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let links_to = args.take_id("links_to")?;
        client.add_task_link(&task_id, &links_to).await?;
        Ok(format!("Linked task {} to {}", task_id, links_to))
    })
}

fn delete_task_link(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let links_to = args.take_id("links_to")?;
        client.delete_task_link(&task_id, &links_to).await?;
        Ok(format!("Removed link between task {} and {}", task_id, links_to))
    })
}
