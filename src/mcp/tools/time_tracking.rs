//! Time tracking tools.

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
            OperationDescriptor::new(
                "get-time-entries",
                "List time entries in a team, by default the last 30 days for the caller",
            )
            .required("team_id", FieldType::String, "Team (workspace) ID")
            .optional("start_date", FieldType::Integer, "Range start (Unix ms)")
            .optional("end_date", FieldType::Integer, "Range end (Unix ms)")
            .optional("assignee", FieldType::String, "Comma separated user IDs")
            .optional("space_id", FieldType::String, "Only entries in this space")
            .optional("folder_id", FieldType::String, "Only entries in this folder")
            .optional("list_id", FieldType::String, "Only entries in this list")
            .optional("task_id", FieldType::String, "Only entries on this task"),
            get_time_entries,
        )
        .register(
            OperationDescriptor::new("get-running-time-entry", "Get the timer that is currently running")
                .required("team_id", FieldType::String, "Team (workspace) ID")
                .optional("assignee", FieldType::String, "User ID, defaults to the caller"),
            get_running_time_entry,
        )
        .register(
            OperationDescriptor::new("start-time-entry", "Start a timer on a task")
                .required("task_id", FieldType::String, "Task ID")
                .optional("description", FieldType::String, "What the time is spent on")
                .optional("billable", FieldType::Boolean, "Mark the entry billable"),
            start_time_entry,
        )
        .register(
            OperationDescriptor::new("stop-time-entry", "Stop the running timer on a task")
                .required("task_id", FieldType::String, "Task ID"),
            stop_time_entry,
        )
        .register(
            OperationDescriptor::new("delete-time-entry", "Delete a time entry")
                .required("team_id", FieldType::String, "Team (workspace) ID")
                .required("timer_id", FieldType::String, "Time entry ID"),
            delete_time_entry,
        );
}

/// Timer responses may wrap the entry in `data`.
fn unwrap_data(value: &Value) -> &Value {
    value.get("data").filter(|d| d.is_object()).unwrap_or(value)
}

/// `- task (ID: id): duration ms`
fn entry_line(entry: &Value) -> String {
    format!(
        "- {} (ID: {}): {} ms",
        render::path(entry, &["task", "name"]),
        render::id(entry),
        render::field(entry, "duration")
    )
}

fn get_time_entries(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let team_id = args.take_id("team_id")?;
        let entries = client.get_time_entries(&team_id, args.into_params()).await?;
        Ok(render::listing("Time entries", "time entries", &entries, entry_line))
    })
}

fn get_running_time_entry(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let team_id = args.take_id("team_id")?;
        let entry = client
            .get_running_time_entry(&team_id, args.into_params())
            .await?;
        if entry.is_null() {
            return Ok("No time entry is running.".to_string());
        }
        Ok(format!(
            "Running time entry (ID: {}) on task: {}",
            render::id(&entry),
            render::path(&entry, &["task", "name"])
        ))
    })
}

fn start_time_entry(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let entry = client.start_time_entry(&task_id, args.into_params()).await?;
        Ok(format!(
            "Started time entry (ID: {})",
            render::id(unwrap_data(&entry))
        ))
    })
}

fn stop_time_entry(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let entry = client.stop_time_entry(&task_id, args.into_params()).await?;
        Ok(format!(
            "Stopped time entry (ID: {}) on task {}",
            render::id(unwrap_data(&entry)),
            task_id
        ))
    })
}

fn delete_time_entry(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let team_id = args.take_id("team_id")?;
        let timer_id = args.take_id("timer_id")?;
        let response = client.delete_time_entry(&team_id, &timer_id).await?;
        Ok(render::deleted("time entry", &timer_id, &response))
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unwrap_data_prefers_wrapped_entry() {
        let wrapped = json!({"data": {"id": "t1"}});
        assert_eq!(render::id(unwrap_data(&wrapped)), "t1");

        let bare = json!({"id": "t2"});
        assert_eq!(render::id(unwrap_data(&bare)), "t2");
    }
}
