//! Task-level endpoints: tasks, comments, checklists, tags and custom fields.

use serde_json::Value;

use super::{ClickUpClient, ClickUpResult, Params};

impl ClickUpClient {
    // =========================================================================
    // Tasks
    // =========================================================================

    pub async fn get_tasks(&self, list_id: &str, query: Params) -> ClickUpResult<Value> {
        self.get(&["list", list_id, "task"], query, Some("tasks"))
            .await
    }

    /// Tasks across a whole team, filtered by the query.
    pub async fn get_filtered_team_tasks(&self, team_id: &str, query: Params) -> ClickUpResult<Value> {
        self.get(&["team", team_id, "task"], query, Some("tasks"))
            .await
    }

    pub async fn get_task(&self, task_id: &str, query: Params) -> ClickUpResult<Value> {
        self.get(&["task", task_id], query, None).await
    }

    pub async fn create_task(&self, list_id: &str, body: Params) -> ClickUpResult<Value> {
        self.post(&["list", list_id, "task"], body, None).await
    }

    pub async fn update_task(&self, task_id: &str, body: Params) -> ClickUpResult<Value> {
        self.put(&["task", task_id], body, None).await
    }

    pub async fn delete_task(&self, task_id: &str) -> ClickUpResult<Value> {
        self.delete(&["task", task_id]).await
    }

    // =========================================================================
    // Comments
    // =========================================================================

    pub async fn get_task_comments(&self, task_id: &str) -> ClickUpResult<Value> {
        self.get(&["task", task_id, "comment"], Params::new(), Some("comments"))
            .await
    }

    pub async fn create_task_comment(&self, task_id: &str, body: Params) -> ClickUpResult<Value> {
        self.post(&["task", task_id, "comment"], body, None).await
    }

    pub async fn get_list_comments(&self, list_id: &str) -> ClickUpResult<Value> {
        self.get(&["list", list_id, "comment"], Params::new(), Some("comments"))
            .await
    }

    pub async fn create_list_comment(&self, list_id: &str, body: Params) -> ClickUpResult<Value> {
        self.post(&["list", list_id, "comment"], body, None).await
    }

    pub async fn update_comment(&self, comment_id: &str, body: Params) -> ClickUpResult<Value> {
        self.put(&["comment", comment_id], body, None).await
    }

    pub async fn delete_comment(&self, comment_id: &str) -> ClickUpResult<Value> {
        self.delete(&["comment", comment_id]).await
    }

    // =========================================================================
    // Checklists
    // =========================================================================

    pub async fn create_checklist(&self, task_id: &str, body: Params) -> ClickUpResult<Value> {
        self.post(&["task", task_id, "checklist"], body, Some("checklist"))
            .await
    }

    pub async fn edit_checklist(&self, checklist_id: &str, body: Params) -> ClickUpResult<Value> {
        self.put(&["checklist", checklist_id], body, None).await
    }

    pub async fn delete_checklist(&self, checklist_id: &str) -> ClickUpResult<Value> {
        self.delete(&["checklist", checklist_id]).await
    }

    pub async fn create_checklist_item(&self, checklist_id: &str, body: Params) -> ClickUpResult<Value> {
        self.post(
            &["checklist", checklist_id, "checklist_item"],
            body,
            Some("checklist"),
        )
        .await
    }

    pub async fn edit_checklist_item(
        &self,
        checklist_id: &str,
        checklist_item_id: &str,
        body: Params,
    ) -> ClickUpResult<Value> {
        self.put(
            &["checklist", checklist_id, "checklist_item", checklist_item_id],
            body,
            Some("checklist"),
        )
        .await
    }

    pub async fn delete_checklist_item(
        &self,
        checklist_id: &str,
        checklist_item_id: &str,
    ) -> ClickUpResult<Value> {
        self.delete(&["checklist", checklist_id, "checklist_item", checklist_item_id])
            .await
    }

    // =========================================================================
    // Tags
    // =========================================================================

    pub async fn get_space_tags(&self, space_id: &str) -> ClickUpResult<Value> {
        self.get(&["space", space_id, "tag"], Params::new(), Some("tags"))
            .await
    }

    /// Create a space tag. ClickUp expects the tag nested under `"tag"`.
    pub async fn create_space_tag(&self, space_id: &str, tag: Params) -> ClickUpResult<Value> {
        self.post(&["space", space_id, "tag"], nest("tag", tag), None)
            .await
    }

    pub async fn edit_space_tag(&self, space_id: &str, tag_name: &str, tag: Params) -> ClickUpResult<Value> {
        self.put(&["space", space_id, "tag", tag_name], nest("tag", tag), None)
            .await
    }

    pub async fn delete_space_tag(&self, space_id: &str, tag_name: &str) -> ClickUpResult<Value> {
        self.delete(&["space", space_id, "tag", tag_name]).await
    }

    pub async fn add_tag_to_task(&self, task_id: &str, tag_name: &str) -> ClickUpResult<Value> {
        self.post(&["task", task_id, "tag", tag_name], Params::new(), None)
            .await
    }

    /// The tag is addressed by path only; no body or query is sent.
    pub async fn remove_tag_from_task(&self, task_id: &str, tag_name: &str) -> ClickUpResult<Value> {
        self.delete(&["task", task_id, "tag", tag_name]).await
    }

    // =========================================================================
    // Custom fields
    // =========================================================================

    pub async fn get_accessible_custom_fields(&self, list_id: &str) -> ClickUpResult<Value> {
        self.get(&["list", list_id, "field"], Params::new(), Some("fields"))
            .await
    }

    pub async fn set_custom_field_value(
        &self,
        task_id: &str,
        field_id: &str,
        body: Params,
    ) -> ClickUpResult<Value> {
        self.post(&["task", task_id, "field", field_id], body, None)
            .await
    }

    pub async fn remove_custom_field_value(&self, task_id: &str, field_id: &str) -> ClickUpResult<Value> {
        self.delete(&["task", task_id, "field", field_id]).await
    }
}

fn nest(key: &str, inner: Params) -> Params {
    let mut outer = Params::new();
    outer.insert(key.to_string(), Value::Object(inner));
    outer
}
