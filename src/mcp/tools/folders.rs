//! Folder tools.

use futures_util::future::BoxFuture;

use crate::clickup::ClickUpClient;
use crate::mcp::arguments::Arguments;
use crate::mcp::catalogue::{Catalogue, FieldType, OperationDescriptor};
use crate::mcp::error::ToolResult;
use crate::mcp::render;

pub(super) fn register(catalogue: &mut Catalogue) {
    catalogue
        .register(
            OperationDescriptor::new("get-folders", "List the folders in a space")
                .required("space_id", FieldType::String, "Space ID")
                .optional("archived", FieldType::Boolean, "Include archived folders"),
            get_folders,
        )
        .register(
            OperationDescriptor::new("get-folder", "Get a folder by ID")
                .required("folder_id", FieldType::String, "Folder ID"),
            get_folder,
        )
        .register(
            OperationDescriptor::new("create-folder", "Create a new folder in a space")
                .required("space_id", FieldType::String, "Space ID")
                .required("name", FieldType::String, "Folder name"),
            create_folder,
        )
        .register(
            OperationDescriptor::new("update-folder", "Rename a folder")
                .required("folder_id", FieldType::String, "Folder ID")
                .required("name", FieldType::String, "New folder name"),
            update_folder,
        )
        .register(
            OperationDescriptor::new("delete-folder", "Delete a folder and its lists")
                .required("folder_id", FieldType::String, "Folder ID"),
            delete_folder,
        );
}

fn get_folders(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let space_id = args.take_id("space_id")?;
        let folders = client.get_folders(&space_id, args.into_params()).await?;
        Ok(render::bullets("Folders", "folders", &folders))
    })
}

fn get_folder(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let folder_id = args.take_id("folder_id")?;
        let folder = client.get_folder(&folder_id).await?;
        let mut text = format!("Folder: {}", render::summary(&folder));
        if let Some(lists) = folder.get("lists") {
            text.push('\n');
            text.push_str(&render::bullets("Lists", "lists", lists));
        }
        Ok(text)
    })
}

fn create_folder(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let space_id = args.take_id("space_id")?;
        let folder = client.create_folder(&space_id, args.into_params()).await?;
        Ok(render::created("folder", &folder))
    })
}

fn update_folder(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let folder_id = args.take_id("folder_id")?;
        let folder = client.update_folder(&folder_id, args.into_params()).await?;
        Ok(render::updated("folder", &folder))
    })
}

fn delete_folder(client: &ClickUpClient, mut args: Arguments) -> BoxFuture<'_, ToolResult<String>> {
    Box::pin(async move {
        let folder_id = args.take_id("folder_id")?;
        let response = client.delete_folder(&folder_id).await?;
        Ok(render::deleted("folder", &folder_id, &response))
    })
}
