//! List tools.

use futures_util::future::BoxFuture;

use crate::clickup::ClickUpClient;
use crate::mcp::arguments::Arguments;
use crate::mcp::catalogue::{Catalogue, FieldType, OperationDescriptor};
use crate::mcp::error::ToolResult;
use crate::mcp::render;

/// Body fields shared by both list-creation tools.
fn with_list_fields(descriptor: OperationDescriptor) -> OperationDescriptor {
    descriptor
        .required("name", FieldType::String, "List name")
        .optional("content", FieldType::String, "List description")
        .optional("due_date", FieldType::Integer, "Due date (Unix ms)")
        .optional("priority", FieldType::Integer, "Priority: 1 urgent, 2 high, 3 normal, 4 low")
        .optional("assignee", FieldType::Integer, "User ID of the list owner")
        .optional("status", FieldType::String, "List color status")
}

pub(super) fn register(catalogue: &mut Catalogue) {
    catalogue
        .register(
            OperationDescriptor::new("get-lists", "List the lists in a folder")
                .required("folder_id", FieldType::String, "Folder ID")
                .optional("archived", FieldType::Boolean, "Include archived lists"),
            get_lists,
        )
        .register(
            OperationDescriptor::new(
                "get-folderless-lists",
                "List the lists that sit directly in a space",
            )
            .required("space_id", FieldType::String, "Space ID")
            .optional("archived", FieldType::Boolean, "Include archived lists"),
            get_folderless_lists,
        )
        .register(
            OperationDescriptor::new("get-list", "Get a list by ID")
                .required("list_id", FieldType::String, "List ID"),
            get_list,
        )
        .register(
            with_list_fields(
                OperationDescriptor::new("create-list", "Create a new list in a folder")
                    .required("folder_id", FieldType::String, "Folder ID"),
            ),
            create_list,
        )
        .register(
            with_list_fields(
                OperationDescriptor::new(
                    "create-folderless-list",
                    "Create a list directly in a space without a folder",
                )
                .required("space_id", FieldType::String, "Space ID"),
            ),
            create_folderless_list,
        )
        .register(
            OperationDescriptor::new("update-list", "Update a list's name or settings")
                .required("list_id", FieldType::String, "List ID")
                .optional("name", FieldType::String, "New name")
                .optional("content", FieldType::String, "List description")
                .optional("due_date", FieldType::Integer, "Due date (Unix ms)")
                .optional("priority", FieldType::Integer, "Priority: 1 urgent to 4 low")
                .optional("assignee", FieldType::String, "User ID of the list owner")
                .optional("unset_status", FieldType::Boolean, "Remove the list color status"),
            update_list,
        )
        .register(
            OperationDescriptor::new("delete-list", "Delete a list")
                .required("list_id", FieldType::String, "List ID"),
            delete_list,
        )
        .register(
            OperationDescriptor::new(
                "add-task-to-list",
                "Add a task to an additional list (Tasks in Multiple Lists)",
            )
            .required("list_id", FieldType::String, "List ID")
            .required("task_id", FieldType::String, "Task ID"),
            add_task_to_list,
        )
        .register(
            OperationDescriptor::new(
                "remove-task-from-list",
                "Remove a task from an additional list",
            )
            .required("list_id", FieldType::String, "List ID")
            .required("task_id", FieldType::String, "Task ID"),
            remove_task_from_list,
        );
}

fn get_lists(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let folder_id = args.take_id("folder_id")?;
        let lists = client.get_lists(&folder_id, args.into_params()).await?;
        Ok(render::bullets("Lists", "lists", &lists))
    })
}

fn get_folderless_lists(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let space_id = args.take_id("space_id")?;
        let lists = client
            .get_folderless_lists(&space_id, args.into_params())
            .await?;
        Ok(render::bullets("Folderless lists", "lists", &lists))
    })
}

fn get_list(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let list_id = args.take_id("list_id")?;
        let list = client.get_list(&list_id).await?;
        let mut text = format!("List: {}", render::summary(&list));
        if let Some(count) = list.get("task_count").filter(|c| !c.is_null()) {
            text.push_str(&format!("\nTasks: {}", count));
        }
        Ok(text)
    })
}

fn create_list(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let folder_id = args.take_id("folder_id")?;
        let list = client.create_list(&folder_id, args.into_params()).await?;
        Ok(render::created("list", &list))
    })
}

fn create_folderless_list(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let space_id = args.take_id("space_id")?;
        let list = client
            .create_folderless_list(&space_id, args.into_params())
            .await?;
        Ok(render::created("list", &list))
    })
}

fn update_list(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let list_id = args.take_id("list_id")?;
        let list = client.update_list(&list_id, args.into_params()).await?;
        Ok(render::updated("list", &list))
    })
}

fn delete_list(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let list_id = args.take_id("list_id")?;
        let response = client.delete_list(&list_id).await?;
        Ok(render::deleted("list", &list_id, &response))
    })
}

fn add_task_to_list(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let list_id = args.take_id("list_id")?;
        let task_id = args.take_id("task_id")?;
        client.add_task_to_list(&list_id, &task_id).await?;
        Ok(format!("Added task {} to list {}", task_id, list_id))
    })
}

fn remove_task_from_list(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let list_id = args.take_id("list_id")?;
        let task_id = args.take_id("task_id")?;
        client.remove_task_from_list(&list_id, &task_id).await?;
        Ok(format!("Removed task {} from list {}", task_id, list_id))
    })
}
