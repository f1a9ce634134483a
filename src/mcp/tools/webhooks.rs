//! Webhook tools.

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
            OperationDescriptor::new("get-webhooks", "List the webhooks created in a team")
                .required("team_id", FieldType::String, "Team (workspace) ID"),
            get_webhooks,
        )
        .register(
            OperationDescriptor::new("create-webhook", "Subscribe an endpoint to team events")
                .required("team_id", FieldType::String, "Team (workspace) ID")
                .required("endpoint", FieldType::String, "URL that receives the events")
                .required(
                    "events",
                    FieldType::array_of(FieldType::String),
                    "Event names, e.g. [\"taskCreated\"], or [\"*\"] for all",
                )
                .optional("space_id", FieldType::String, "Only events in this space")
                .optional("folder_id", FieldType::String, "Only events in this folder")
                .optional("list_id", FieldType::String, "Only events in this list")
                .optional("task_id", FieldType::String, "Only events on this task"),
            create_webhook,
        )
        .register(
            OperationDescriptor::new("update-webhook", "Change a webhook's endpoint, events or status")
                .required("webhook_id", FieldType::String, "Webhook ID (UUID)")
                .optional("endpoint", FieldType::String, "URL that receives the events")
                .optional(
                    "events",
                    FieldType::array_of(FieldType::String),
                    "Event names",
                )
                .optional_enum("status", &["active", "inactive"], "Webhook status"),
            update_webhook,
        )
        .register(
            OperationDescriptor::new("delete-webhook", "Delete a webhook")
                .required("webhook_id", FieldType::String, "Webhook ID (UUID)"),
            delete_webhook,
        );
}

/// `- endpoint (ID: id)`
fn webhook_line(webhook: &Value) -> String {
    format!(
        "- {} (ID: {})",
        render::field(webhook, "endpoint"),
        render::id(webhook)
    )
}

fn get_webhooks(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let team_id = args.take_id("team_id")?;
        let webhooks = client.get_webhooks(&team_id).await?;
        Ok(render::listing("Webhooks", "webhooks", &webhooks, webhook_line))
    })
}

fn create_webhook(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let team_id = args.take_id("team_id")?;
        let webhook = client.create_webhook(&team_id, args.into_params()).await?;
        Ok(format!(
            "Created webhook for {} (ID: {})",
            render::field(&webhook, "endpoint"),
            render::id(&webhook)
        ))
    })
}

fn update_webhook(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let webhook_id = args.take_id("webhook_id")?;
        let webhook = client
            .update_webhook(&webhook_id, args.into_params())
            .await?;
        Ok(format!(
            "Updated webhook for {} (ID: {})",
            render::field(&webhook, "endpoint"),
            render::id(&webhook)
        ))
    })
}

fn delete_webhook(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let webhook_id = args.take_id("webhook_id")?;
        let response = client.delete_webhook(&webhook_id).await?;
        Ok(render::deleted("webhook", &webhook_id, &response))
    })
}
