//! Workspace hierarchy endpoints: teams, spaces, folders and lists.

use serde_json::Value;

use super::{ClickUpClient, ClickUpResult, Params};

impl ClickUpClient {
    // =========================================================================
    // Teams
    // =========================================================================

    /// Get all teams (workspaces) the token can access.
    pub async fn get_teams(&self) -> ClickUpResult<Value> {
        self.get(&["team"], Params::new(), Some("teams")).await
    }

    // =========================================================================
    // Spaces
    // =========================================================================

    pub async fn get_spaces(&self, team_id: &str, query: Params) -> ClickUpResult<Value> {
        self.get(&["team", team_id, "space"], query, Some("spaces"))
            .await
    }

    pub async fn get_space(&self, space_id: &str) -> ClickUpResult<Value> {
        self.get(&["space", space_id], Params::new(), None).await
    }

    pub async fn create_space(&self, team_id: &str, body: Params) -> ClickUpResult<Value> {
        self.post(&["team", team_id, "space"], body, None).await
    }

    pub async fn update_space(&self, space_id: &str, body: Params) -> ClickUpResult<Value> {
        self.put(&["space", space_id], body, None).await
    }

    pub async fn delete_space(&self, space_id: &str) -> ClickUpResult<Value> {
        self.delete(&["space", space_id]).await
    }

    // =========================================================================
    // Folders
    // =========================================================================

    pub async fn get_folders(&self, space_id: &str, query: Params) -> ClickUpResult<Value> {
        self.get(&["space", space_id, "folder"], query, Some("folders"))
            .await
    }

    pub async fn get_folder(&self, folder_id: &str) -> ClickUpResult<Value> {
        self.get(&["folder", folder_id], Params::new(), None).await
    }

    pub async fn create_folder(&self, space_id: &str, body: Params) -> ClickUpResult<Value> {
        self.post(&["space", space_id, "folder"], body, None).await
    }

    pub async fn update_folder(&self, folder_id: &str, body: Params) -> ClickUpResult<Value> {
        self.put(&["folder", folder_id], body, None).await
    }

    pub async fn delete_folder(&self, folder_id: &str) -> ClickUpResult<Value> {
        self.delete(&["folder", folder_id]).await
    }

    // =========================================================================
    // Lists
    // =========================================================================

    /// Lists inside a folder.
    pub async fn get_lists(&self, folder_id: &str, query: Params) -> ClickUpResult<Value> {
        self.get(&["folder", folder_id, "list"], query, Some("lists"))
            .await
    }

    /// Lists that live directly in a space, outside any folder.
    pub async fn get_folderless_lists(&self, space_id: &str, query: Params) -> ClickUpResult<Value> {
        self.get(&["space", space_id, "list"], query, Some("lists"))
            .await
    }

    pub async fn get_list(&self, list_id: &str) -> ClickUpResult<Value> {
        self.get(&["list", list_id], Params::new(), None).await
    }

    pub async fn create_list(&self, folder_id: &str, body: Params) -> ClickUpResult<Value> {
        self.post(&["folder", folder_id, "list"], body, None).await
    }

    pub async fn create_folderless_list(&self, space_id: &str, body: Params) -> ClickUpResult<Value> {
        self.post(&["space", space_id, "list"], body, None).await
    }

    pub async fn update_list(&self, list_id: &str, body: Params) -> ClickUpResult<Value> {
        self.put(&["list", list_id], body, None).await
    }

    pub async fn delete_list(&self, list_id: &str) -> ClickUpResult<Value> {
        self.delete(&["list", list_id]).await
    }

    /// Add a task to an additional list (requires the Tasks in Multiple Lists
    /// ClickApp).
    pub async fn add_task_to_list(&self, list_id: &str, task_id: &str) -> ClickUpResult<Value> {
        self.post(&["list", list_id, "task", task_id], Params::new(), None)
            .await
    }

    pub async fn remove_task_from_list(&self, list_id: &str, task_id: &str) -> ClickUpResult<Value> {
        self.delete(&["list", list_id, "task", task_id]).await
    }
}
