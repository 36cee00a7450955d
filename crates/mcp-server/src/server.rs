//! Transport binding: MCP over streamable HTTP plus a liveness route.

use crate::error::{Result, ServerError};
use crate::tools::RelayTools;
use profiler_upstream::config::UpstreamConfig;
use profiler_upstream::executor::UpstreamClient;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, InitializeRequestParam,
    InitializeResult, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct RelayServer {
    tools: Arc<RelayTools>,
}

impl RelayServer {
    #[must_use]
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            tools: Arc::new(RelayTools::new(UpstreamClient::new(config))),
        }
    }
}

impl ServerHandler for RelayServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Look up LinkedIn profiles, companies, company posts, and people.".to_string(),
            ),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        Ok(self.get_info())
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tools.list_tools(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match self.tools.call_tool(&request.name, request.arguments).await {
            Some(result) => Ok(result),
            None => Err(McpError::invalid_params(
                format!("Unknown tool: {}", request.name),
                None,
            )),
        }
    }
}

/// Liveness probe: fixed response, no upstream calls, no side effects.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

#[must_use]
pub fn router(server: RelayServer) -> axum::Router {
    let mcp_service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    axum::Router::new()
        .route("/health", axum::routing::get(health))
        .nest_service("/mcp", mcp_service)
}

/// Bind and serve until ctrl-c.
pub async fn run(bind: SocketAddr, server: RelayServer) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| ServerError::Startup(format!("failed to bind {bind}: {e}")))?;

    info!(%bind, "serving MCP at /mcp, liveness at /health");

    axum::serve(listener, router(server))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Io)?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
