//! Checklist and checklist item tools.

use futures_util::future::BoxFuture;

use crate::clickup::ClickUpClient;
use crate::mcp::arguments::Arguments;
use crate::mcp::catalogue::{Catalogue, FieldType, OperationDescriptor};
use crate::mcp::error::ToolResult;
use crate::mcp::render;

pub(super) fn register(catalogue: &mut Catalogue) {
    catalogue
        .register(
            OperationDescriptor::new("create-checklist", "Add a checklist to a task")
                .required("task_id", FieldType::String, "Task ID")
                .required("name", FieldType::String, "Checklist name"),
            create_checklist,
        )
        .register(
            OperationDescriptor::new("edit-checklist", "Rename or reorder a checklist")
                .required("checklist_id", FieldType::String, "Checklist ID")
                .optional("name", FieldType::String, "New name")
                .optional("position", FieldType::Integer, "Position among the task's checklists"),
            edit_checklist,
        )
        .register(
            OperationDescriptor::new("delete-checklist", "Delete a checklist")
                .required("checklist_id", FieldType::String, "Checklist ID"),
            delete_checklist,
        )
        .register(
            OperationDescriptor::new("create-checklist-item", "Add an item to a checklist")
                .required("checklist_id", FieldType::String, "Checklist ID")
                .required("name", FieldType::String, "Item name")
                .optional("assignee", FieldType::Integer, "User ID to assign"),
            create_checklist_item,
        )
        .register(
            OperationDescriptor::new(
                "edit-checklist-item",
                "Rename, assign, resolve or nest a checklist item",
            )
            .required("checklist_id", FieldType::String, "Checklist ID")
            .required("checklist_item_id", FieldType::String, "Checklist item ID")
            .optional("name", FieldType::String, "New name")
            .optional("assignee", FieldType::Integer, "User ID to assign")
            .optional("resolved", FieldType::Boolean, "Mark resolved or unresolved")
            .optional("parent", FieldType::String, "Nest under this checklist item ID"),
            edit_checklist_item,
        )
        .register(
            OperationDescriptor::new("delete-checklist-item", "Delete a checklist item")
                .required("checklist_id", FieldType::String, "Checklist ID")
                .required("checklist_item_id", FieldType::String, "Checklist item ID"),
            delete_checklist_item,
        );
}

fn create_checklist(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let checklist = client.create_checklist(&task_id, args.into_params()).await?;
        Ok(render::created("checklist", &checklist))
    })
}

fn edit_checklist(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let checklist_id = args.take_id("checklist_id")?;
        client
            .edit_checklist(&checklist_id, args.into_params())
            .await?;
        Ok(format!("Updated checklist (ID: {})", checklist_id))
    })
}

fn delete_checklist(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let checklist_id = args.take_id("checklist_id")?;
        let response = client.delete_checklist(&checklist_id).await?;
        Ok(render::deleted("checklist", &checklist_id, &response))
    })
}

// Item operations answer with the whole parent checklist.

fn create_checklist_item(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let checklist_id = args.take_id("checklist_id")?;
        let checklist = client
            .create_checklist_item(&checklist_id, args.into_params())
            .await?;
        Ok(format!(
            "Created checklist item in checklist: {}",
            render::summary(&checklist)
        ))
    })
}

fn edit_checklist_item(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let checklist_id = args.take_id("checklist_id")?;
        let item_id = args.take_id("checklist_item_id")?;
        let checklist = client
            .edit_checklist_item(&checklist_id, &item_id, args.into_params())
            .await?;
        Ok(format!(
            "Updated checklist item (ID: {}) in checklist: {}",
            item_id,
            render::summary(&checklist)
        ))
    })
}

fn delete_checklist_item(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let checklist_id = args.take_id("checklist_id")?;
        let item_id = args.take_id("checklist_item_id")?;
        let response = client.delete_checklist_item(&checklist_id, &item_id).await?;
        Ok(render::deleted("checklist item", &item_id, &response))
    })
}
