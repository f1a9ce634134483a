//! In-process stand-in for the ClickUp API, used by tests.
//!
//! Every request is recorded, then answered by a responder closure.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::clickup::ClickUpClient;
use crate::config::ClientConfig;

pub(crate) const TEST_TOKEN: &str = "pk_test_token";

/// One request as the mock server saw it.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    /// Path relative to the API root, e.g. `/list/123/task`.
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

type Responder = dyn Fn(&RecordedRequest) -> (u16, Value) + Send + Sync;

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responder: Arc<Responder>,
}

pub(crate) struct MockClickUp {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockClickUp {
    /// Spawn a mock that answers every request with the same status and body.
    pub async fn respond_with(status: u16, body: Value) -> Self {
        Self::start(move |_| (status, body.clone())).await
    }

    /// Spawn a mock whose answers depend on the request.
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> (u16, Value) + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            requests: Arc::clone(&requests),
            responder: Arc::new(responder),
        };
        let app = Router::new().fallback(record).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/api/v2", addr),
            requests,
            _handle: handle,
        }
    }

    /// Client configured against this mock.
    pub fn client(&self) -> ClickUpClient {
        ClickUpClient::new(&ClientConfig::new(TEST_TOKEN).with_base_url(&self.base_url))
            .expect("client should build")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {:?}", requests);
        requests.into_iter().next().unwrap()
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let request = RecordedRequest {
        method,
        path: uri
            .path()
            .strip_prefix("/api/v2")
            .unwrap_or(uri.path())
            .to_string(),
        query: uri.query().map(str::to_string),
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: if body.is_empty() {
            None
        } else {
            serde_json::from_slice(&body).ok()
        },
    };

    let (status, response) = (state.responder)(&request);
    state.requests.lock().unwrap().push(request);

    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

/// A body that satisfies every endpoint's extraction key, so any operation
/// can succeed against it.
pub(crate) fn universal_body() -> Value {
    let entity = json!({"id": "1", "name": "Mock", "username": "mock", "email": "mock@example.com"});
    json!({
        "id": "1",
        "name": "Mock",
        "user": entity,
        "teams": [entity],
        "spaces": [entity],
        "folders": [entity],
        "lists": [entity],
        "tasks": [entity],
        "comments": [{"id": "1", "comment_text": "hi"}],
        "checklist": entity,
        "tags": [{"name": "bug"}],
        "fields": [{"id": "1", "name": "Mock", "type": "text"}],
        "data": [entity],
        "dependencies": [{"task_id": "1", "depends_on": "2"}],
        "watchers": [entity],
        "members": [entity],
        "guest": {"user": entity},
        "goals": [entity],
        "goal": entity,
        "webhooks": [entity],
        "webhook": entity,
    })
}
