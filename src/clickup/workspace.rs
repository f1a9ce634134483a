//! Team-wide endpoints: time tracking, goals and webhooks.

use serde_json::Value;

use super::{ClickUpClient, ClickUpResult, Params};

impl ClickUpClient {
    // =========================================================================
    // Time tracking
    // =========================================================================

    pub async fn get_time_entries(&self, team_id: &str, query: Params) -> ClickUpResult<Value> {
        self.get(&["team", team_id, "time_entries"], query, Some("data"))
            .await
    }

    /// The running timer, or `null` when nothing is being tracked.
    pub async fn get_running_time_entry(&self, team_id: &str, query: Params) -> ClickUpResult<Value> {
        self.get(
            &["team", team_id, "time_entries", "current"],
            query,
            Some("data"),
        )
        .await
    }

    pub async fn start_time_entry(&self, task_id: &str, body: Params) -> ClickUpResult<Value> {
        self.post(&["task", task_id, "time"], body, None).await
    }

    pub async fn stop_time_entry(&self, task_id: &str, body: Params) -> ClickUpResult<Value> {
        self.put(&["task", task_id, "time"], body, None).await
    }

    pub async fn delete_time_entry(&self, team_id: &str, timer_id: &str) -> ClickUpResult<Value> {
        self.delete(&["team", team_id, "time_entries", timer_id]).await
    }

    // =========================================================================
    // Goals
    // =========================================================================

    pub async fn get_goals(&self, team_id: &str, query: Params) -> ClickUpResult<Value> {
        self.get(&["team", team_id, "goal"], query, Some("goals"))
            .await
    }

    pub async fn create_goal(&self, team_id: &str, body: Params) -> ClickUpResult<Value> {
        self.post(&["team", team_id, "goal"], body, Some("goal")).await
    }

    pub async fn update_goal(&self, goal_id: &str, body: Params) -> ClickUpResult<Value> {
        self.put(&["goal", goal_id], body, Some("goal")).await
    }

    pub async fn delete_goal(&self, goal_id: &str) -> ClickUpResult<Value> {
        self.delete(&["goal", goal_id]).await
    }

    // =========================================================================
    // Webhooks
    // =========================================================================

    pub async fn get_webhooks(&self, team_id: &str) -> ClickUpResult<Value> {
        self.get(&["team", team_id, "webhook"], Params::new(), Some("webhooks"))
            .await
    }

    pub async fn create_webhook(&self, team_id: &str, body: Params) -> ClickUpResult<Value> {
        self.post(&["team", team_id, "webhook"], body, Some("webhook"))
            .await
    }

    pub async fn update_webhook(&self, webhook_id: &str, body: Params) -> ClickUpResult<Value> {
        self.put(&["webhook", webhook_id], body, Some("webhook"))
            .await
    }

    pub async fn delete_webhook(&self, webhook_id: &str) -> ClickUpResult<Value> {
        self.delete(&["webhook", webhook_id]).await
    }
}
