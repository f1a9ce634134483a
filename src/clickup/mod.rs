//! ClickUp REST API v2 client.
//!
//! [`ClickUpClient`] owns one `reqwest` connection pool and the fixed header
//! set every call carries. Each remote endpoint is one method, grouped by
//! resource family in the submodules:
//!
//! - **hierarchy**: teams, spaces, folders, lists
//! - **tasks**: tasks, comments, checklists, tags, custom fields
//! - **relations**: dependencies, links, watchers, members, guests
//! - **workspace**: time tracking, goals, webhooks
//!
//! Methods return decoded JSON. Endpoints whose payload lives under a fixed
//! key (e.g. `"tasks"` for task listings) return only that value.

mod error;
mod hierarchy;
pub mod params;
mod relations;
mod tasks;
mod workspace;

#[cfg(test)]
pub(crate) mod mock;


use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response, Url};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;

pub use error::{ClickUpError, ClickUpResult};
pub use params::Params;

/// Production ClickUp API root.
pub const DEFAULT_BASE_URL: &str = "https://api.clickup.com/api/v2";

/// Startup health check attempts before giving up.
pub const HEALTH_CHECK_ATTEMPTS: u32 = 3;

/// Pause between failed health check attempts.
pub const HEALTH_CHECK_DELAY: Duration = Duration::from_secs(1);

/// Typed wrapper around the ClickUp REST API.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference counted and
/// safe for concurrent use, so every clone shares one connection pool.
#[derive(Clone, Debug)]
pub struct ClickUpClient {
    base_url: Url,
    client: Client,
}

impl ClickUpClient {
    /// Build a client from configuration without touching the network.
    pub fn new(config: &ClientConfig) -> ClickUpResult<Self> {
        // reqwest is built without a bundled crypto provider.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let base_url = parse_base_url(&config.base_url)?;

        let mut auth =
            HeaderValue::from_str(&config.token).map_err(|e| ClickUpError::InvalidToken {
                message: e.to_string(),
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        // ClickUp takes the raw personal token, without a `Bearer ` prefix.
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool_size)
            .build()?;

        Ok(Self { base_url, client })
    }

    /// Build a client and verify the token by fetching the authorized user.
    ///
    /// Retries [`HEALTH_CHECK_ATTEMPTS`] times, [`HEALTH_CHECK_DELAY`] apart.
    pub async fn connect(config: &ClientConfig) -> ClickUpResult<Self> {
        Self::new(config)?
            .health_checked(HEALTH_CHECK_ATTEMPTS, HEALTH_CHECK_DELAY)
            .await
    }

    /// Run the startup health check with an explicit retry policy.
    pub async fn health_checked(self, attempts: u32, delay: Duration) -> ClickUpResult<Self> {
        let attempts = attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.get_authorized_user().await {
                Ok(user) => {
                    let username = user
                        .get("username")
                        .and_then(Value::as_str)
                        .unwrap_or("unknown");
                    info!(user = username, "Connected to ClickUp");
                    return Ok(self);
                }
                Err(e) if attempt < attempts => {
                    warn!(attempt, error = %e, "ClickUp health check failed, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    return Err(ClickUpError::HealthCheck {
                        attempts,
                        last: Box::new(e),
                    });
                }
            }
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Get the user that owns the API token.
    pub async fn get_authorized_user(&self) -> ClickUpResult<Value> {
        self.get(&["user"], Params::new(), Some("user")).await
    }

    /// Append `segments` to the base URL.
    ///
    /// Empty and dot segments are refused: the URL parser would drop or
    /// collapse them and the request would land on a different resource.
    fn url(&self, segments: &[&str]) -> ClickUpResult<Url> {
        if let Some(segment) = segments
            .iter()
            .find(|s| matches!(s.trim(), "" | "." | ".."))
        {
            return Err(ClickUpError::InvalidPath {
                segment: segment.to_string(),
            });
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClickUpError::InvalidUrl {
                url: self.base_url.to_string(),
                message: "URL cannot carry path segments".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, segments: &[&str], query: Params, key: Option<&str>) -> ClickUpResult<Value> {
        self.execute(Method::GET, segments, Some(query), None, key)
            .await
    }

    async fn post(&self, segments: &[&str], body: Params, key: Option<&str>) -> ClickUpResult<Value> {
        self.execute(Method::POST, segments, None, Some(body), key)
            .await
    }

    async fn put(&self, segments: &[&str], body: Params, key: Option<&str>) -> ClickUpResult<Value> {
        self.execute(Method::PUT, segments, None, Some(body), key)
            .await
    }

    async fn delete(&self, segments: &[&str]) -> ClickUpResult<Value> {
        self.execute(Method::DELETE, segments, None, None, None)
            .await
    }

    #[instrument(skip_all, fields(method = %method, path = %segments.join("/")))]
    async fn execute(
        &self,
        method: Method,
        segments: &[&str],
        query: Option<Params>,
        body: Option<Params>,
        key: Option<&str>,
    ) -> ClickUpResult<Value> {
        let url = self.url(segments)?;
        let mut request = self.client.request(method, url);

        if let Some(query) = query {
            let pairs = params::query_pairs(&query);
            if !pairs.is_empty() {
                request = request.query(&pairs);
            }
        }
        if let Some(body) = body {
            request = request.json(&params::without_nulls(body));
        }

        debug!("Sending ClickUp request");
        let response = request.send().await?;
        debug!(status = response.status().as_u16(), "ClickUp responded");

        let document = Self::handle_response(response).await?;
        match key {
            Some(key) => extract(document, key),
            None => Ok(document),
        }
    }

    /// Handle API response with standardized error handling
    ///
    /// Returns the decoded body on success (an empty body decodes as `{}`),
    /// or [`ClickUpError::RequestFailed`] on non-success status codes.
    pub async fn handle_response(response: Response) -> ClickUpResult<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClickUpError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        Ok(serde_json::from_str(&text)?)
    }
}

fn parse_base_url(raw: &str) -> ClickUpResult<Url> {
    let url = Url::parse(raw.trim_end_matches('/')).map_err(|e| ClickUpError::InvalidUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ClickUpError::InvalidUrl {
            url: raw.to_string(),
            message: "URL cannot carry path segments".to_string(),
        });
    }
    Ok(url)
}

fn extract(document: Value, key: &str) -> ClickUpResult<Value> {
    match document {
        Value::Object(mut map) => map.remove(key).ok_or_else(|| ClickUpError::InvalidResponse {
            message: format!("response is missing `{}`", key),
        }),
        other => Err(ClickUpError::InvalidResponse {
            message: format!("expected an object with `{}`, got {}", key, other),
        }),
    }
}
