//! Gateway HTTP server
//!
//! Builds the router over an explicitly constructed `AppState` injected at
//! startup; there are no global singletons. One tokio task per request,
//! no shared mutable state beyond the read-only `Arc<AppState>`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::models::ServerConfig;
use crate::domain::ports::McpClient;
use crate::services::ChatGateway;

use super::{chat, mcp, system};

/// Shared read-only state for the HTTP surface
pub struct AppState {
    pub gateway: ChatGateway,
    pub mcp: Arc<dyn McpClient>,
    /// Shared secret expected in the `X-API-Key` header of chat requests;
    /// `None` means the chat endpoints are misconfigured
    pub auth_key: Option<String>,
}

/// Gateway HTTP server
pub struct GatewayHttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl GatewayHttpServer {
    pub fn new(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Build the router over the given state
    pub fn build_router(state: Arc<AppState>) -> Router {
        Router::new()
            // Service endpoints
            .route("/", get(system::root))
            .route("/status", get(system::status))
            .route("/health", get(system::health))
            // MCP endpoints
            .route("/mcp", get(mcp::root))
            .route("/mcp/test", get(mcp::self_test))
            .route("/mcp/tools", get(mcp::list_tools))
            .route("/mcp/tools/{tool_name}", post(mcp::execute_tool))
            .route("/mcp/health", get(mcp::health))
            // Chat endpoints
            .route("/chat", post(chat::chat))
            .route("/deepseek-status", get(chat::deepseek_status))
            .with_state(state)
    }

    fn router(&self) -> Router {
        let router = Self::build_router(self.state.clone());

        if self.config.enable_cors {
            router
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(TraceLayer::new_for_http())
        } else {
            router.layer(TraceLayer::new_for_http())
        }
    }

    /// Start the server
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let router = self.router();

        tracing::info!("Toolbridge HTTP server listening on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;
        Ok(())
    }

    /// Start the server with a shutdown signal
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let router = self.router();

        tracing::info!("Toolbridge HTTP server listening on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}
