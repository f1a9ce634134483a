//! Command-line and environment configuration.
//!
//! Every option can come from a flag or an environment variable. A `.env`
//! file in the working directory is loaded by the binary before parsing.

use std::net::IpAddr;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use miette::Diagnostic;
use thiserror::Error;

use crate::clickup::DEFAULT_BASE_URL;

/// Environment variable holding the ClickUp personal API token.
pub const TOKEN_ENV: &str = "CLICKUP_API_TOKEN";

#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ClickUp API token is not set")]
    #[diagnostic(
        code(clickup_operator::config::missing_credential),
        help("Set CLICKUP_API_TOKEN (or pass --token). A .env file in the working directory is also read.")
    )]
    MissingCredential,

    #[error("Invalid value for {option}: {message}")]
    #[diagnostic(code(clickup_operator::config::invalid))]
    Invalid { option: String, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// How the MCP host talks to this process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// JSON-RPC over standard input/output
    #[default]
    Stdio,
    /// MCP Streamable HTTP, mounted at /mcp
    Http,
}

#[derive(Parser, Debug)]
#[command(name = "clickup-operator")]
#[command(author, version, about = "MCP server for the ClickUp API", long_about = None)]
pub struct Cli {
    /// ClickUp personal API token
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// ClickUp API base URL
    #[arg(long, env = "CLICKUP_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "CLICKUP_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[arg(long, env = "CLICKUP_CONNECT_TIMEOUT_SECS", default_value = "10")]
    pub connect_timeout_secs: u64,

    /// Maximum idle keep-alive connections kept to the API
    #[arg(long, env = "CLICKUP_POOL_SIZE", default_value = "4")]
    pub pool_size: usize,

    /// Transport used to talk to the MCP host
    #[arg(long, value_enum, default_value = "stdio")]
    pub transport: Transport,

    /// Host address to bind to (http transport)
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on (http transport)
    #[arg(short, long, default_value = "3737")]
    pub port: u16,
}

impl Cli {
    /// Resolve the settings the remote client needs.
    ///
    /// Fails with [`ConfigError::MissingCredential`] when no token was given
    /// or the token is blank.
    pub fn client_config(&self) -> ConfigResult<ClientConfig> {
        let token = self
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingCredential)?;

        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                option: "--timeout-secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(ClientConfig {
            token: token.to_string(),
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs.max(1)),
            pool_size: self.pool_size.max(1),
        })
    }
}

/// Settings for [`crate::clickup::ClickUpClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub token: String,
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub pool_size: usize,
}

impl ClientConfig {
    /// Defaults for everything but the token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_size: 4,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
