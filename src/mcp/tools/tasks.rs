//! Task tools.

use futures_util::future::BoxFuture;
use serde_json::Value;

use crate::clickup::ClickUpClient;
use crate::mcp::arguments::Arguments;
use crate::mcp::catalogue::{Catalogue, FieldType, OperationDescriptor};
use crate::mcp::error::ToolResult;
use crate::mcp::render;

const ORDER_BY: &[&str] = &["id", "created", "updated", "due_date"];

pub(super) fn register(catalogue: &mut Catalogue) {
    catalogue
        .register(
            OperationDescriptor::new("get-tasks", "List the tasks in a list, one page at a time")
                .required("list_id", FieldType::String, "List ID")
                .optional("archived", FieldType::Boolean, "Include archived tasks")
                .optional("page", FieldType::Integer, "Page number, starting at 0")
                .optional_enum("order_by", ORDER_BY, "Sort field")
                .optional("reverse", FieldType::Boolean, "Reverse the sort order")
                .optional("subtasks", FieldType::Boolean, "Include subtasks")
                .optional(
                    "statuses",
                    FieldType::array_of(FieldType::String),
                    "Only tasks in these statuses",
                )
                .optional("include_closed", FieldType::Boolean, "Include closed tasks")
                .optional(
                    "assignees",
                    FieldType::array_of(FieldType::String),
                    "Only tasks assigned to these user IDs",
                )
                .optional(
                    "tags",
                    FieldType::array_of(FieldType::String),
                    "Only tasks with these tag names",
                )
                .optional("due_date_gt", FieldType::Integer, "Due after (Unix ms)")
                .optional("due_date_lt", FieldType::Integer, "Due before (Unix ms)"),
            get_tasks,
        )
        .register(
            OperationDescriptor::new(
                "get-filtered-team-tasks",
                "Search tasks across a whole team with filters",
            )
            .required("team_id", FieldType::String, "Team (workspace) ID")
            .optional("page", FieldType::Integer, "Page number, starting at 0")
            .optional_enum("order_by", ORDER_BY, "Sort field")
            .optional("reverse", FieldType::Boolean, "Reverse the sort order")
            .optional("subtasks", FieldType::Boolean, "Include subtasks")
            .optional(
                "space_ids",
                FieldType::array_of(FieldType::String),
                "Only tasks in these spaces",
            )
            .optional(
                "list_ids",
                FieldType::array_of(FieldType::String),
                "Only tasks in these lists",
            )
            .optional(
                "statuses",
                FieldType::array_of(FieldType::String),
                "Only tasks in these statuses",
            )
            .optional("include_closed", FieldType::Boolean, "Include closed tasks")
            .optional(
                "assignees",
                FieldType::array_of(FieldType::String),
                "Only tasks assigned to these user IDs",
            )
            .optional(
                "tags",
                FieldType::array_of(FieldType::String),
                "Only tasks with these tag names",
            ),
            get_filtered_team_tasks,
        )
        .register(
            OperationDescriptor::new("get-task", "Get a task by ID")
                .required("task_id", FieldType::String, "Task ID")
                .optional("include_subtasks", FieldType::Boolean, "Include subtasks"),
            get_task,
        )
        .register(
            OperationDescriptor::new("create-task", "Create a new task in a list")
                .required("list_id", FieldType::String, "List ID")
                .required("name", FieldType::String, "Task name")
                .optional("description", FieldType::String, "Task description (markdown)")
                .optional(
                    "assignees",
                    FieldType::array_of(FieldType::Integer),
                    "User IDs to assign",
                )
                .optional(
                    "tags",
                    FieldType::array_of(FieldType::String),
                    "Tag names to apply",
                )
                .optional("status", FieldType::String, "Status name")
                .optional("priority", FieldType::Integer, "Priority: 1 urgent, 2 high, 3 normal, 4 low")
                .optional("due_date", FieldType::Integer, "Due date (Unix ms)")
                .optional("time_estimate", FieldType::Integer, "Time estimate (ms)")
                .optional("notify_all", FieldType::Boolean, "Notify everyone on the task")
                .optional("parent", FieldType::String, "Parent task ID, to create a subtask"),
            create_task,
        )
        .register(
            OperationDescriptor::new("update-task", "Update a task's fields")
                .required("task_id", FieldType::String, "Task ID")
                .optional("name", FieldType::String, "New name")
                .optional("description", FieldType::String, "New description")
                .optional("status", FieldType::String, "Status name")
                .optional("priority", FieldType::Integer, "Priority: 1 urgent, 2 high, 3 normal, 4 low")
                .optional("due_date", FieldType::Integer, "Due date (Unix ms)")
                .optional("time_estimate", FieldType::Integer, "Time estimate (ms)")
                .optional("archived", FieldType::Boolean, "Archive or unarchive")
                .optional("parent", FieldType::String, "Move under this parent task"),
            update_task,
        )
        .register(
            OperationDescriptor::new("delete-task", "Delete a task")
                .required("task_id", FieldType::String, "Task ID"),
            delete_task,
        );
}

/// `- Name (ID: id) [status]`
fn task_line(task: &Value) -> String {
    format!(
        "{} [{}]",
        render::bullet(task),
        render::path(task, &["status", "status"])
    )
}

fn assignee_names(task: &Value) -> String {
    let names: Vec<String> = task
        .get("assignees")
        .and_then(Value::as_array)
        .map(|assignees| assignees.iter().map(render::display_name).collect())
        .unwrap_or_default();

    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

fn get_tasks(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let list_id = args.take_id("list_id")?;
        let tasks = client.get_tasks(&list_id, args.into_params()).await?;
        Ok(render::listing("Tasks", "tasks", &tasks, task_line))
    })
}

fn get_filtered_team_tasks(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let team_id = args.take_id("team_id")?;
        let tasks = client
            .get_filtered_team_tasks(&team_id, args.into_params())
            .await?;
        Ok(render::listing("Tasks", "tasks", &tasks, task_line))
    })
}

fn get_task(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let task = client.get_task(&task_id, args.into_params()).await?;
        Ok(format!(
            "Task: {}\nStatus: {}\nURL: {}\nAssignees: {}",
            render::summary(&task),
            render::path(&task, &["status", "status"]),
            render::field(&task, "url"),
            assignee_names(&task)
        ))
    })
}

fn create_task(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let list_id = args.take_id("list_id")?;
        let task = client.create_task(&list_id, args.into_params()).await?;
        Ok(render::created("task", &task))
    })
}

fn update_task(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let task = client.update_task(&task_id, args.into_params()).await?;
        Ok(render::updated("task", &task))
    })
}

fn delete_task(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let response = client.delete_task(&task_id).await?;
        Ok(render::deleted("task", &task_id, &response))
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn task_line_includes_nested_status() {
        let task = json!({"id": "9", "name": "Ship", "status": {"status": "open"}});
        assert_eq!(task_line(&task), "- Ship (ID: 9) [open]");
    }

    #[test]
    fn assignees_fall_back_to_none() {
        assert_eq!(assignee_names(&json!({"assignees": []})), "none");
        assert_eq!(
            assignee_names(&json!({"assignees": [{"id": 1, "username": "ana"}, {"id": 2}]})),
            "ana, 2"
        );
    }
}
