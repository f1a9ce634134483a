//! ClickUp client error types.
//!
//! Every failure of an outbound call collapses into [`ClickUpError`]. Callers
//! that only care about "did the remote side reject this" can use
//! [`ClickUpError::status`].

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ClickUpError {
    #[error("ClickUp API error ({status}): {body}")]
    #[diagnostic(code(clickup_operator::clickup::request_failed))]
    RequestFailed { status: u16, body: String },

    #[error("Failed to reach the ClickUp API: {source}")]
    #[diagnostic(
        code(clickup_operator::clickup::transport),
        help("Check network connectivity or raise --timeout-secs.")
    )]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from the ClickUp API: {message}")]
    #[diagnostic(code(clickup_operator::clickup::invalid_response))]
    InvalidResponse { message: String },

    #[error("Invalid ClickUp base URL '{url}': {message}")]
    #[diagnostic(
        code(clickup_operator::clickup::invalid_url),
        help("The base URL must be absolute, e.g. https://api.clickup.com/api/v2")
    )]
    InvalidUrl { url: String, message: String },

    #[error("Invalid path segment '{segment}'")]
    #[diagnostic(
        code(clickup_operator::clickup::invalid_path),
        help("Identifiers must not be empty, '.' or '..'.")
    )]
    InvalidPath { segment: String },

    #[error("Invalid API token: {message}")]
    #[diagnostic(code(clickup_operator::clickup::invalid_token))]
    InvalidToken { message: String },

    #[error("ClickUp health check failed after {attempts} attempts: {last}")]
    #[diagnostic(
        code(clickup_operator::clickup::health_check),
        help("Verify CLICKUP_API_TOKEN is a valid personal token.")
    )]
    HealthCheck {
        attempts: u32,
        #[source]
        last: Box<ClickUpError>,
    },
}

impl ClickUpError {
    /// HTTP status reported by the remote service, if the call got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClickUpError::RequestFailed { status, .. } => Some(*status),
            ClickUpError::Transport { source } => source.status().map(|s| s.as_u16()),
            ClickUpError::HealthCheck { last, .. } => last.status(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClickUpError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClickUpError::InvalidResponse {
                message: e.to_string(),
            }
        } else {
            ClickUpError::Transport { source: e }
        }
    }
}

impl From<serde_json::Error> for ClickUpError {
    fn from(e: serde_json::Error) -> Self {
        ClickUpError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type ClickUpResult<T> = Result<T, ClickUpError>;
