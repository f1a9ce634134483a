//! Comment tools for tasks and lists.

use futures_util::future::BoxFuture;
use serde_json::Value;

use crate::clickup::ClickUpClient;
use crate::mcp::arguments::Arguments;
use crate::mcp::catalogue::{Catalogue, FieldType, OperationDescriptor};
use crate::mcp::error::ToolResult;
use crate::mcp::render;

fn with_comment_fields(descriptor: OperationDescriptor) -> OperationDescriptor {
    descriptor
        .required("comment_text", FieldType::String, "Comment text")
        .optional("assignee", FieldType::Integer, "User ID to assign the comment to")
        .optional("notify_all", FieldType::Boolean, "Notify everyone, including the creator")
}

pub(super) fn register(catalogue: &mut Catalogue) {
    catalogue
        .register(
            OperationDescriptor::new("get-task-comments", "List the comments on a task")
                .required("task_id", FieldType::String, "Task ID"),
            get_task_comments,
        )
        .register(
            with_comment_fields(
                OperationDescriptor::new("create-task-comment", "Comment on a task")
                    .required("task_id", FieldType::String, "Task ID"),
            ),
            create_task_comment,
        )
        .register(
            OperationDescriptor::new("get-list-comments", "List the comments on a list")
                .required("list_id", FieldType::String, "List ID"),
            get_list_comments,
        )
        .register(
            with_comment_fields(
                OperationDescriptor::new("create-list-comment", "Comment on a list")
                    .required("list_id", FieldType::String, "List ID"),
            ),
            create_list_comment,
        )
        .register(
            OperationDescriptor::new("update-comment", "Edit, reassign or resolve a comment")
                .required("comment_id", FieldType::String, "Comment ID")
                .required("comment_text", FieldType::String, "New comment text")
                .optional("assignee", FieldType::Integer, "User ID to assign the comment to")
                .optional("resolved", FieldType::Boolean, "Mark resolved or unresolved"),
            update_comment,
        )
        .register(
            OperationDescriptor::new("delete-comment", "Delete a comment")
                .required("comment_id", FieldType::String, "Comment ID"),
            delete_comment,
        );
}

/// `- user: text (ID: id)`
fn comment_line(comment: &Value) -> String {
    format!(
        "- {}: {} (ID: {})",
        render::path(comment, &["user", "username"]),
        render::field(comment, "comment_text"),
        render::id(comment)
    )
}

fn comment_created(comment: &Value) -> String {
    format!("Created comment (ID: {})", render::id(comment))
}

fn get_task_comments(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let comments = client.get_task_comments(&task_id).await?;
        Ok(render::listing("Comments", "comments", &comments, comment_line))
    })
}

fn create_task_comment(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let comment = client
            .create_task_comment(&task_id, args.into_params())
            .await?;
        Ok(comment_created(&comment))
    })
}

fn get_list_comments(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let list_id = args.take_id("list_id")?;
        let comments = client.get_list_comments(&list_id).await?;
        Ok(render::listing("Comments", "comments", &comments, comment_line))
    })
}

fn create_list_comment(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let list_id = args.take_id("list_id")?;
        let comment = client
            .create_list_comment(&list_id, args.into_params())
            .await?;
        Ok(comment_created(&comment))
    })
}

fn update_comment(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let comment_id = args.take_id("comment_id")?;
        client.update_comment(&comment_id, args.into_params()).await?;
        Ok(format!("Updated comment (ID: {})", comment_id))
    })
}

fn delete_comment(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let comment_id = args.take_id("comment_id")?;
        let response = client.delete_comment(&comment_id).await?;
        Ok(render::deleted("comment", &comment_id, &response))
    })
}
