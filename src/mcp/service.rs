//! MCP transports
//!
//! stdio for local agents, Streamable HTTP nested into an Axum router for
//! remote ones.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use rmcp::{
    ServiceExt,
    transport::{
        stdio,
        streamable_http_server::{
            StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
        },
    },
};
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::adapter::ToolAdapter;
use super::error::ServerError;
use super::server::McpServer;

/// Create MCP Streamable HTTP service
///
/// Every session gets its own [`McpServer`] sharing `adapter`, and with it
/// one ClickUp connection pool.
///
/// ```no_run
/// use std::sync::Arc;
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// use clickup_operator::clickup::ClickUpClient;
/// use clickup_operator::config::ClientConfig;
/// use clickup_operator::mcp::{ToolAdapter, create_mcp_service};
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ClickUpClient::new(&ClientConfig::new("pk_123"))?;
/// let adapter = Arc::new(ToolAdapter::new(Arc::new(client)));
///
/// let app: Router = Router::new()
///     .nest_service("/mcp", create_mcp_service(adapter, CancellationToken::new()));
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service(
    adapter: Arc<ToolAdapter>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer, LocalSessionManager> {
    // rmcp expects the factory to fail with io::Error
    let service_factory =
        move || -> Result<McpServer, std::io::Error> { Ok(McpServer::new(Arc::clone(&adapter))) };

    let mut config = StreamableHttpServerConfig::default();
    config.stateful_mode = true;
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}

/// `/mcp` plus request tracing.
pub fn router(service: StreamableHttpService<McpServer, LocalSessionManager>) -> Router {
    Router::new()
        .nest_service("/mcp", service)
        .layer(TraceLayer::new_for_http())
}

/// Serve over Streamable HTTP until Ctrl-C.
pub async fn serve_http(adapter: Arc<ToolAdapter>, host: IpAddr, port: u16) -> Result<(), ServerError> {
    let ct = CancellationToken::new();
    let app = router(create_mcp_service(adapter, ct.child_token()));

    let addr = SocketAddr::new(host, port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c(), ct))
        .await?;
    Ok(())
}

/// Resolve once `signal` fires, cancelling `ct` on the way out.
///
/// A signal listener that cannot be installed never resolves, so the server
/// keeps running instead of stopping at startup.
pub(crate) async fn shutdown_on<F>(signal: F, ct: CancellationToken)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
    ct.cancel();
}

/// Serve over stdin/stdout until the client closes the stream.
pub async fn serve_stdio(server: McpServer) -> Result<(), ServerError> {
    info!("MCP server listening on stdio");
    let running = server
        .serve(stdio())
        .await
        .map_err(|e| ServerError::Initialize {
            message: e.to_string(),
        })?;
    running.waiting().await?;
    info!("stdio stream closed");
    Ok(())
}
