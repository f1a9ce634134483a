//! ClickUp MCP server binary.
//!
//! Resolves configuration, connects to ClickUp once, then serves the tool
//! catalogue over the chosen transport until it closes.

use std::sync::Arc;

use clap::Parser;
use clickup_operator::clickup::ClickUpClient;
use clickup_operator::config::{Cli, Transport};
use clickup_operator::mcp::{self, McpServer, ToolAdapter};
use miette::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Logs go to stderr: stdout carries the stdio transport.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clickup_operator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing();

    let config = cli.client_config()?;
    info!(base_url = %config.base_url, "Connecting to ClickUp");
    let client = ClickUpClient::connect(&config).await?;

    let adapter = Arc::new(ToolAdapter::new(Arc::new(client)));
    info!(tools = adapter.list_operations().len(), "Tool catalogue ready");

    match cli.transport {
        Transport::Stdio => mcp::serve_stdio(McpServer::new(adapter)).await?,
        Transport::Http => mcp::serve_http(adapter, cli.host, cli.port).await?,
    }

    Ok(())
}
