//! Custom field tools.

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
                "get-custom-fields",
                "List the custom fields accessible from a list",
            )
            .required("list_id", FieldType::String, "List ID"),
            get_custom_fields,
        )
        .register(
            OperationDescriptor::new("set-custom-field-value", "Set a custom field on a task")
                .required("task_id", FieldType::String, "Task ID")
                .required("field_id", FieldType::String, "Custom field ID (UUID)")
                .required(
                    "value",
                    FieldType::Any,
                    "New value; its shape depends on the field type",
                ),
            set_custom_field_value,
        )
        .register(
            OperationDescriptor::new("remove-custom-field-value", "Clear a custom field on a task")
                .required("task_id", FieldType::String, "Task ID")
                .required("field_id", FieldType::String, "Custom field ID (UUID)"),
            remove_custom_field_value,
        );
}

/// `- name (Type: type, ID: id)`
fn field_line(field: &Value) -> String {
    format!(
        "- {} (Type: {}, ID: {})",
        render::field(field, "name"),
        render::field(field, "type"),
        render::id(field)
    )
}

fn get_custom_fields(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let list_id = args.take_id("list_id")?;
        let fields = client.get_accessible_custom_fields(&list_id).await?;
        Ok(render::listing("Custom fields", "custom fields", &fields, field_line))
    })
}

fn set_custom_field_value(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let field_id = args.take_id("field_id")?;
        client
            .set_custom_field_value(&task_id, &field_id, args.into_params())
            .await?;
        Ok(format!("Set custom field {} on task {}", field_id, task_id))
    })
}

fn remove_custom_field_value(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let task_id = args.take_id("task_id")?;
        let field_id = args.take_id("field_id")?;
        client.remove_custom_field_value(&task_id, &field_id).await?;
        Ok(format!("Removed custom field {} from task {}", field_id, task_id))
    })
}
