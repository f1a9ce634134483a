//! Tests for tool dispatch against an in-process mock ClickUp API.

use std::collections::HashSet;
use std::sync::Arc;

use axum::http::Method;
use rmcp::model::JsonObject;
use serde_json::{Value, json};

use crate::clickup::mock::{MockClickUp, universal_body};
use crate::mcp::catalogue::{Catalogue, FieldType, OperationDescriptor};
use crate::mcp::tools;
use crate::mcp::{ToolAdapter, ToolError};

fn adapter(mock: &MockClickUp) -> ToolAdapter {
    ToolAdapter::new(Arc::new(mock.client()))
}

fn args(value: Value) -> Option<JsonObject> {
    match value {
        Value::Object(map) => Some(map),
        _ => panic!("expected object"),
    }
}

/// A value that satisfies a required field. String values are derived from
/// the field name, so `task_id` becomes `task1`.
fn sample(name: &str, field_type: &FieldType) -> Value {
    match field_type {
        FieldType::String => json!(format!("{}1", name.trim_end_matches("_id"))),
        FieldType::Integer | FieldType::Number => json!(1),
        FieldType::Boolean => json!(true),
        FieldType::Object => json!({}),
        FieldType::Array(_) => json!(["taskCreated"]),
        FieldType::Any => json!("v"),
    }
}

fn required_args(descriptor: &OperationDescriptor) -> Option<JsonObject> {
    let map: JsonObject = descriptor
        .required_fields()
        .map(|f| (f.name.to_string(), sample(f.name, &f.field_type)))
        .collect();
    Some(map)
}

/// Verb and path every operation must hit, given [`required_args`].
const ROUTES: &[(&str, &str, &str)] = &[
    ("get-authorized-user", "GET", "/user"),
    ("get-teams", "GET", "/team"),
    ("get-spaces", "GET", "/team/team1/space"),
    ("get-space", "GET", "/space/space1"),
    ("create-space", "POST", "/team/team1/space"),
    ("update-space", "PUT", "/space/space1"),
    ("delete-space", "DELETE", "/space/space1"),
    ("get-folders", "GET", "/space/space1/folder"),
    ("get-folder", "GET", "/folder/folder1"),
    ("create-folder", "POST", "/space/space1/folder"),
    ("update-folder", "PUT", "/folder/folder1"),
    ("delete-folder", "DELETE", "/folder/folder1"),
    ("get-lists", "GET", "/folder/folder1/list"),
    ("get-folderless-lists", "GET", "/space/space1/list"),
    ("get-list", "GET", "/list/list1"),
    ("create-list", "POST", "/folder/folder1/list"),
    ("create-folderless-list", "POST", "/space/space1/list"),
    ("update-list", "PUT", "/list/list1"),
    ("delete-list", "DELETE", "/list/list1"),
    ("add-task-to-list", "POST", "/list/list1/task/task1"),
    ("remove-task-from-list", "DELETE", "/list/list1/task/task1"),
    ("get-tasks", "GET", "/list/list1/task"),
    ("get-filtered-team-tasks", "GET", "/team/team1/task"),
    ("get-task", "GET", "/task/task1"),
    ("create-task", "POST", "/list/list1/task"),
    ("update-task", "PUT", "/task/task1"),
    ("delete-task", "DELETE", "/task/task1"),
    ("get-task-comments", "GET", "/task/task1/comment"),
    ("create-task-comment", "POST", "/task/task1/comment"),
    ("get-list-comments", "GET", "/list/list1/comment"),
    ("create-list-comment", "POST", "/list/list1/comment"),
    ("update-comment", "PUT", "/comment/comment1"),
    ("delete-comment", "DELETE", "/comment/comment1"),
    ("create-checklist", "POST", "/task/task1/checklist"),
    ("edit-checklist", "PUT", "/checklist/checklist1"),
    ("delete-checklist", "DELETE", "/checklist/checklist1"),
    ("create-checklist-item", "POST", "/checklist/checklist1/checklist_item"),
    (
        "edit-checklist-item",
        "PUT",
        "/checklist/checklist1/checklist_item/checklist_item1",
    ),
    (
        "delete-checklist-item",
        "DELETE",
        "/checklist/checklist1/checklist_item/checklist_item1",
    ),
    ("get-space-tags", "GET", "/space/space1/tag"),
    ("create-space-tag", "POST", "/space/space1/tag"),
    ("edit-space-tag", "PUT", "/space/space1/tag/tag_name1"),
    ("delete-space-tag", "DELETE", "/space/space1/tag/tag_name1"),
    ("add-tag-to-task", "POST", "/task/task1/tag/tag_name1"),
    ("remove-tag-from-task", "DELETE", "/task/task1/tag/tag_name1"),
    ("get-custom-fields", "GET", "/list/list1/field"),
    ("set-custom-field-value", "POST", "/task/task1/field/field1"),
    ("remove-custom-field-value", "DELETE", "/task/task1/field/field1"),
    ("get-time-entries", "GET", "/team/team1/time_entries"),
    ("get-running-time-entry", "GET", "/team/team1/time_entries/current"),
    ("start-time-entry", "POST", "/task/task1/time"),
    ("stop-time-entry", "PUT", "/task/task1/time"),
    ("delete-time-entry", "DELETE", "/team/team1/time_entries/timer1"),
    ("get-task-dependencies", "GET", "/task/task1/dependency"),
    ("add-task-dependency", "POST", "/task/task1/dependency"),
    ("remove-task-dependency", "DELETE", "/task/task1/dependency/dependency1"),
    ("add-task-link", "POST", "/task/task1/link/links_to1"),
    ("delete-task-link", "DELETE", "/task/task1/link/links_to1"),
    ("get-task-watchers", "GET", "/task/task1/watching"),
    ("add-task-watcher", "POST", "/task/task1/watching"),
    ("get-task-members", "GET", "/task/task1/member"),
    ("get-list-members", "GET", "/list/list1/member"),
    ("invite-guest", "POST", "/team/team1/guest"),
    ("get-guest", "GET", "/team/team1/guest/guest1"),
    ("remove-guest", "DELETE", "/team/team1/guest/guest1"),
    ("add-guest-to-task", "POST", "/task/task1/guest/guest1"),
    ("get-goals", "GET", "/team/team1/goal"),
    ("create-goal", "POST", "/team/team1/goal"),
    ("update-goal", "PUT", "/goal/goal1"),
    ("delete-goal", "DELETE", "/goal/goal1"),
    ("get-webhooks", "GET", "/team/team1/webhook"),
    ("create-webhook", "POST", "/team/team1/webhook"),
    ("update-webhook", "PUT", "/webhook/webhook1"),
    ("delete-webhook", "DELETE", "/webhook/webhook1"),
];

// =========================================================================
// Catalogue-wide properties
// =========================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_routes_cover_every_operation() {
    let mock = MockClickUp::respond_with(200, universal_body()).await;
    let adapter = adapter(&mock);

    let listed: HashSet<&str> = adapter.list_operations().iter().map(|d| d.name).collect();
    let routed: HashSet<&str> = ROUTES.iter().map(|(name, _, _)| *name).collect();

    assert_eq!(listed, routed);
    assert_eq!(ROUTES.len(), 74);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_every_operation_issues_one_request_to_its_route() {
    let mock = MockClickUp::respond_with(200, universal_body()).await;
    let adapter = adapter(&mock);

    for (index, (name, method, path)) in ROUTES.iter().enumerate() {
        let descriptor = adapter
            .list_operations()
            .into_iter()
            .find(|d| d.name == *name)
            .unwrap_or_else(|| panic!("{} is not registered", name));

        let result = adapter.call(name, required_args(descriptor)).await;
        assert!(result.is_ok(), "{} failed: {:?}", name, result);

        let requests = mock.requests();
        assert_eq!(requests.len(), index + 1, "{} sent more than one request", name);
        let request = &requests[index];
        assert_eq!(request.method.as_str(), *method, "{} used the wrong verb", name);
        assert_eq!(request.path, *path, "{} hit the wrong path", name);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_required_fields_make_no_request() {
    let mock = MockClickUp::respond_with(200, universal_body()).await;
    let adapter = adapter(&mock);

    for descriptor in adapter.list_operations() {
        let required: Vec<String> = descriptor
            .required_fields()
            .map(|f| f.name.to_string())
            .collect();
        if required.is_empty() {
            continue;
        }

        for raw in [None, args(json!({}))] {
            match adapter.call(descriptor.name, raw).await {
                Err(ToolError::MissingArguments { operation, fields }) => {
                    assert_eq!(operation, descriptor.name);
                    assert_eq!(fields, required, "{}", descriptor.name);
                }
                other => panic!("{}: expected MissingArguments, got {:?}", descriptor.name, other),
            }
        }
    }

    assert_eq!(mock.request_count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_each_dropped_required_field_is_reported() {
    let mock = MockClickUp::respond_with(200, universal_body()).await;
    let adapter = adapter(&mock);

    for descriptor in adapter.list_operations() {
        let Some(complete) = required_args(descriptor) else {
            continue;
        };

        for field in descriptor.required_fields() {
            let mut partial = complete.clone();
            partial.remove(field.name);

            match adapter.call(descriptor.name, Some(partial)).await {
                Err(ToolError::MissingArguments { fields, .. }) => {
                    assert_eq!(fields, vec![field.name], "{}", descriptor.name);
                }
                other => panic!(
                    "{} without {}: expected MissingArguments, got {:?}",
                    descriptor.name, field.name, other
                ),
            }
        }
    }

    assert_eq!(mock.request_count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_blank_and_dot_identifiers_make_no_request() {
    let mock = MockClickUp::respond_with(200, universal_body()).await;
    let adapter = adapter(&mock);

    let calls = [
        ("delete-goal", json!({"goal_id": ".."}), "goal_id"),
        ("remove-tag-from-task", json!({"task_id": "abc", "tag_name": "."}), "tag_name"),
        ("delete-task", json!({"task_id": ""}), "task_id"),
        ("get-task", json!({"task_id": "   "}), "task_id"),
    ];

    for (name, raw, expected_field) in calls {
        match adapter.call(name, args(raw)).await {
            Err(ToolError::InvalidArgument { operation, field, .. }) => {
                assert_eq!(operation, name);
                assert_eq!(field, expected_field);
            }
            other => panic!("{}: expected InvalidArgument, got {:?}", name, other),
        }
    }
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_listing_is_idempotent() {
    let mock = MockClickUp::respond_with(200, universal_body()).await;
    let adapter = adapter(&mock);

    let first: Vec<&str> = adapter.list_operations().iter().map(|d| d.name).collect();
    let second: Vec<&str> = adapter.list_operations().iter().map(|d| d.name).collect();

    assert_eq!(first, second);
    assert_eq!(mock.request_count(), 0);
}

// =========================================================================
// Dispatch errors
// =========================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_operation() {
    let mock = MockClickUp::respond_with(200, universal_body()).await;

    let result = adapter(&mock).call("launch-rocket", args(json!({}))).await;

    match result {
        Err(ToolError::UnknownOperation { name }) => assert_eq!(name, "launch-rocket"),
        other => panic!("expected UnknownOperation, got {:?}", other),
    }
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_custom_catalogue_limits_dispatch() {
    let mock = MockClickUp::respond_with(200, json!({"teams": [{"id": "1", "name": "Acme"}]})).await;
    let full = tools::catalogue();
    let (descriptor, handler) = full.get("get-teams").unwrap();
    let mut catalogue = Catalogue::new();
    catalogue.register(descriptor.clone(), handler);
    let adapter = ToolAdapter::with_catalogue(Arc::new(mock.client()), catalogue);

    let names: Vec<&str> = adapter.list_operations().iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["get-teams"]);

    let teams = adapter.call("get-teams", None).await.unwrap();
    assert!(teams.contains("Acme (ID: 1)"));

    let result = adapter.call("get-task", args(json!({"task_id": "9"}))).await;
    assert!(matches!(result, Err(ToolError::UnknownOperation { .. })));
    assert_eq!(mock.request_count(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_partially_missing_fields_are_listed() {
    let mock = MockClickUp::respond_with(200, universal_body()).await;

    let result = adapter(&mock)
        .call("create-task", args(json!({"list_id": "123", "name": null})))
        .await;

    match result {
        Err(ToolError::MissingArguments { fields, .. }) => assert_eq!(fields, vec!["name"]),
        other => panic!("expected MissingArguments, got {:?}", other),
    }
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_wrong_type_is_invalid_argument() {
    let mock = MockClickUp::respond_with(200, universal_body()).await;

    let result = adapter(&mock)
        .call(
            "create-task",
            args(json!({"list_id": "123", "name": "x", "priority": "high"})),
        )
        .await;

    match result {
        Err(ToolError::InvalidArgument {
            field, expected, ..
        }) => {
            assert_eq!(field, "priority");
            assert_eq!(expected, "integer");
        }
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_remote_404_surfaces_status() {
    let mock = MockClickUp::respond_with(404, json!({"err": "Task not found", "ECODE": "ITEM_015"}))
        .await;

    let error = adapter(&mock)
        .call("get-task", args(json!({"task_id": "nope"})))
        .await
        .unwrap_err();

    assert!(matches!(error, ToolError::RemoteRequestFailed(_)));
    assert_eq!(error.status(), Some(404));
    assert!(error.to_string().contains("Task not found"));
    assert_eq!(mock.request_count(), 1);
}

// =========================================================================
// Request shaping
// =========================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_create_task_scenario() {
    let mock = MockClickUp::respond_with(200, json!({"id": "9", "name": "Write spec"})).await;

    let text = adapter(&mock)
        .call("create-task", args(json!({"list_id": "123", "name": "Write spec"})))
        .await
        .unwrap();

    assert_eq!(text, "Created task: Write spec (ID: 9)");
    let request = mock.only_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/list/123/task");
    assert_eq!(request.body, Some(json!({"name": "Write spec"})));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_null_and_undeclared_fields_are_not_sent() {
    let mock = MockClickUp::respond_with(200, json!({"id": "9", "name": "Write spec"})).await;

    adapter(&mock)
        .call(
            "create-task",
            args(json!({
                "list_id": "123",
                "name": "Write spec",
                "description": null,
                "priority": 2,
                "mood": "cheerful"
            })),
        )
        .await
        .unwrap();

    assert_eq!(
        mock.only_request().body,
        Some(json!({"name": "Write spec", "priority": 2}))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_numeric_ids_are_accepted() {
    let mock = MockClickUp::respond_with(200, json!({"id": "9", "name": "Ship"})).await;

    adapter(&mock)
        .call("get-task", args(json!({"task_id": 9})))
        .await
        .unwrap();

    assert_eq!(mock.only_request().path, "/task/9");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_filters_become_query_parameters() {
    let mock = MockClickUp::respond_with(200, json!({"tasks": []})).await;

    adapter(&mock)
        .call(
            "get-tasks",
            args(json!({"list_id": "5", "statuses": ["open"], "page": 2})),
        )
        .await
        .unwrap();

    let request = mock.only_request();
    assert_eq!(request.path, "/list/5/task");
    assert_eq!(request.body, None);
    let query = request.query.unwrap_or_default();
    assert!(query.contains("statuses%5B%5D=open"), "query: {}", query);
    assert!(query.contains("page=2"), "query: {}", query);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_remove_tag_uses_path_only() {
    let mock = MockClickUp::respond_with(200, json!({})).await;

    let text = adapter(&mock)
        .call(
            "remove-tag-from-task",
            args(json!({"task_id": "abc", "tag_name": "urgent"})),
        )
        .await
        .unwrap();

    assert_eq!(text, "Removed tag urgent from task abc");
    let request = mock.only_request();
    assert_eq!(request.method, Method::DELETE);
    assert_eq!(request.path, "/task/abc/tag/urgent");
    assert_eq!(request.query, None);
    assert_eq!(request.body, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_space_tag_body_is_nested() {
    let mock = MockClickUp::respond_with(200, json!({})).await;

    let text = adapter(&mock)
        .call(
            "create-space-tag",
            args(json!({"space_id": "7", "name": "bug", "tag_bg": "#ff0000"})),
        )
        .await
        .unwrap();

    assert_eq!(text, "Created tag: bug in space 7");
    assert_eq!(
        mock.only_request().body,
        Some(json!({"tag": {"name": "bug", "tag_bg": "#ff0000"}}))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_custom_field_value_accepts_any_json() {
    let mock = MockClickUp::respond_with(200, json!({})).await;

    adapter(&mock)
        .call(
            "set-custom-field-value",
            args(json!({"task_id": "1", "field_id": "f", "value": {"add": [3]}})),
        )
        .await
        .unwrap();

    assert_eq!(mock.only_request().body, Some(json!({"value": {"add": [3]}})));
}

// =========================================================================
// Rendering
// =========================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_get_teams_scenario() {
    let mock = MockClickUp::respond_with(200, json!({"teams": [{"id": "1", "name": "Acme"}]})).await;

    let text = adapter(&mock).call("get-teams", None).await.unwrap();

    assert!(text.contains("- Acme (ID: 1)"), "text: {}", text);
    let request = mock.only_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/team");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_collection() {
    let mock = MockClickUp::respond_with(200, json!({"tasks": []})).await;

    let text = adapter(&mock)
        .call("get-tasks", args(json!({"list_id": "5"})))
        .await
        .unwrap();

    assert_eq!(text, "No tasks found.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_authorized_user() {
    let mock = MockClickUp::respond_with(200, json!({"user": {"id": 42, "username": "ana"}})).await;

    let text = adapter(&mock).call("get-authorized-user", None).await.unwrap();

    assert_eq!(text, "Authorized user: ana (ID: 42)");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_task_details() {
    let mock = MockClickUp::respond_with(
        200,
        json!({
            "id": "9",
            "name": "Ship",
            "status": {"status": "in progress"},
            "url": "https://app.clickup.com/t/9",
            "assignees": [{"id": 1, "username": "ana"}]
        }),
    )
    .await;

    let text = adapter(&mock)
        .call("get-task", args(json!({"task_id": "9"})))
        .await
        .unwrap();

    assert_eq!(
        text,
        "Task: Ship (ID: 9)\nStatus: in progress\nURL: https://app.clickup.com/t/9\nAssignees: ana"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_custom_fields_show_type() {
    let mock = MockClickUp::respond_with(
        200,
        json!({"fields": [{"id": "f1", "name": "Effort", "type": "number"}]}),
    )
    .await;

    let text = adapter(&mock)
        .call("get-custom-fields", args(json!({"list_id": "5"})))
        .await
        .unwrap();

    assert_eq!(text, "Custom fields:\n- Effort (Type: number, ID: f1)");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_no_running_time_entry() {
    let mock = MockClickUp::respond_with(200, json!({"data": null})).await;

    let text = adapter(&mock)
        .call("get-running-time-entry", args(json!({"team_id": "1"})))
        .await
        .unwrap();

    assert_eq!(text, "No time entry is running.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_comment_and_timer_confirmations() {
    let mock = MockClickUp::respond_with(200, json!({"id": "c7", "data": {"id": "t3"}})).await;
    let adapter = adapter(&mock);

    let comment = adapter
        .call(
            "create-task-comment",
            args(json!({"task_id": "1", "comment_text": "Looks good"})),
        )
        .await
        .unwrap();
    let timer = adapter
        .call("start-time-entry", args(json!({"task_id": "1"})))
        .await
        .unwrap();

    assert_eq!(comment, "Created comment (ID: c7)");
    assert_eq!(timer, "Started time entry (ID: t3)");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invite_guest_and_delete_confirmations() {
    let mock = MockClickUp::respond_with(200, json!({})).await;
    let adapter = adapter(&mock);

    let invited = adapter
        .call(
            "invite-guest",
            args(json!({"team_id": "1", "email": "guest@example.com"})),
        )
        .await
        .unwrap();
    let deleted = adapter
        .call("delete-task", args(json!({"task_id": "9"})))
        .await
        .unwrap();

    assert_eq!(invited, "Invited guest: guest@example.com");
    assert_eq!(deleted, "Deleted task: 9 (ID: 9)");
}
