//! Endpoints relating tasks to each other and to people: dependencies,
//! links, watchers, members and guests.

use serde_json::Value;

use super::{ClickUpClient, ClickUpResult, Params};

impl ClickUpClient {
    // =========================================================================
    // Dependencies and links
    // =========================================================================

    pub async fn get_task_dependencies(&self, task_id: &str) -> ClickUpResult<Value> {
        self.get(
            &["task", task_id, "dependency"],
            Params::new(),
            Some("dependencies"),
        )
        .await
    }

    pub async fn add_task_dependency(&self, task_id: &str, body: Params) -> ClickUpResult<Value> {
        self.post(&["task", task_id, "dependency"], body, None).await
    }

    pub async fn remove_task_dependency(&self, task_id: &str, dependency_id: &str) -> ClickUpResult<Value> {
        self.delete(&["task", task_id, "dependency", dependency_id])
            .await
    }

    pub async fn add_task_link(&self, task_id: &str, links_to: &str) -> ClickUpResult<Value> {
        self.post(&["task", task_id, "link", links_to], Params::new(), None)
            .await
    }

    pub async fn delete_task_link(&self, task_id: &str, links_to: &str) -> ClickUpResult<Value> {
        self.delete(&["task", task_id, "link", links_to]).await
    }

    // =========================================================================
    // Watchers and members
    // =========================================================================

    pub async fn get_task_watchers(&self, task_id: &str) -> ClickUpResult<Value> {
        self.get(&["task", task_id, "watching"], Params::new(), Some("watchers"))
            .await
    }

    pub async fn add_task_watcher(&self, task_id: &str, body: Params) -> ClickUpResult<Value> {
        self.post(&["task", task_id, "watching"], body, None).await
    }

    pub async fn get_task_members(&self, task_id: &str) -> ClickUpResult<Value> {
        self.get(&["task", task_id, "member"], Params::new(), Some("members"))
            .await
    }

    pub async fn get_list_members(&self, list_id: &str) -> ClickUpResult<Value> {
        self.get(&["list", list_id, "member"], Params::new(), Some("members"))
            .await
    }

    // =========================================================================
    // Guests
    // =========================================================================

    pub async fn invite_guest(&self, team_id: &str, body: Params) -> ClickUpResult<Value> {
        self.post(&["team", team_id, "guest"], body, None).await
    }

    pub async fn get_guest(&self, team_id: &str, guest_id: &str) -> ClickUpResult<Value> {
        self.get(&["team", team_id, "guest", guest_id], Params::new(), Some("guest"))
            .await
    }

    pub async fn remove_guest(&self, team_id: &str, guest_id: &str) -> ClickUpResult<Value> {
        self.delete(&["team", team_id, "guest", guest_id]).await
    }

    pub async fn add_guest_to_task(&self, task_id: &str, guest_id: &str, body: Params) -> ClickUpResult<Value> {
        self.post(&["task", task_id, "guest", guest_id], body, None)
            .await
    }
}
