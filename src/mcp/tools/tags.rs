//! Space tag tools and tagging of tasks.

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
            OperationDescriptor::new("get-space-tags", "List the tags defined in a space")
                .required("space_id", FieldType::String, "Space ID"),
            get_space_tags,
        )
        .register(
            OperationDescriptor::new("create-space-tag", "Define a new tag in a space")
                .required("space_id", FieldType::String, "Space ID")
                .required("name", FieldType::String, "Tag name")
                .optional("tag_fg", FieldType::String, "Foreground color, e.g. #FFFFFF")
                .optional("tag_bg", FieldType::String, "Background color, e.g. #000000"),
            create_space_tag,
        )
        .register(
            OperationDescriptor::new("edit-space-tag", "Rename or recolor a space tag")
                .required("space_id", FieldType::String, "Space ID")
                .required("tag_name", FieldType::String, "Current tag name")
                .optional("name", FieldType::String, "New tag name")
                .optional("tag_fg", FieldType::String, "Foreground color")
                .optional("tag_bg", FieldType::String, "Background color"),
            edit_space_tag,
        )
        .register(
            OperationDescriptor::new("delete-space-tag", "Delete a tag from a space")
                .required("space_id", FieldType::String, "Space ID")
                .required("tag_name", FieldType::String, "Tag name"),
            delete_space_tag,
        )
        .register(
            OperationDescriptor::new("add-tag-to-task", "Apply an existing space tag to a task")
                .required("task_id", FieldType::String, "Task ID")
                .required("tag_name", FieldType::String, "Tag name"),
            add_tag_to_task,
        )
        .register(
            OperationDescriptor::new("remove-tag-from-task", "Remove a tag from a task")
                .required("task_id", FieldType::String, "Task ID")
                .required("tag_name", FieldType::String, "Tag name"),
            remove_tag_from_task,
        );
}

/// Tags have no ID; the name is the key.
fn tag_line(tag: &Value) -> String {
    format!("- {}", render::field(tag, "name"))
}

fn get_space_tags(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let space_id = args.take_id("space_id")?;
        let tags = client.get_space_tags(&space_id).await?;
        Ok(render::listing("Tags", "tags", &tags, tag_line))
    })
}

fn create_space_tag(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let space_id = args.take_id("space_id")?;
        let name = args.get_str("name").unwrap_or(render::UNKNOWN).to_string();
        client.create_space_tag(&space_id, args.into_params()).await?;
        Ok(format!("Created tag: {} in space {}", name, space_id))
    })
}

fn edit_space_tag(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let space_id = args.take_id("space_id")?;
        let tag_name = args.take_id("tag_name")?;
        client
            .edit_space_tag(&space_id, &tag_name, args.into_params())
            .await?;
        Ok(format!("Updated tag: {} in space {}", tag_name, space_id))
    })
}

fn delete_space_tag(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let space_id = args.take_id("space_id")?;
        let tag_name = args.take_id("tag_name")?;
        client.delete_space_tag(&space_id, &tag_name).await?;
        Ok(format!("Deleted tag: {} from space {}", tag_name, space_id))
    })
}

fn add_tag_to_task(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let tag_name = args.take_id("tag_name")?;
        client.add_tag_to_task(&task_id, &tag_name).await?;
        Ok(format!("Added tag {} to task {}", tag_name, task_id))
    })
}

fn remove_tag_from_task(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let tag_name = args.take_id("tag_name")?;
        client.remove_tag_from_task(&task_id, &tag_name).await?;
        Ok(format!("Removed tag {} from task {}", tag_name, task_id))
    })
}
