//! Toolbridge entry point.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use toolbridge::adapters::http::{AppState, GatewayHttpServer};
use toolbridge::domain::models::LoggingConfig;
use toolbridge::domain::ports::ChatCompletionsClient;
use toolbridge::infrastructure::deepseek::DeepSeekClientImpl;
use toolbridge::infrastructure::mcp::MockMcpClient;
use toolbridge::services::ChatGateway;
use toolbridge::ConfigLoader;

#[derive(Debug, Parser)]
#[command(name = "toolbridge", version, about = "Chat/MCP HTTP gateway")]
struct Cli {
    /// Path to a YAML configuration file (defaults to toolbridge.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured listen host
    #[arg(long)]
    host: Option<String>,

    /// Override the configured listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_tracing(&config.logging);

    let mcp: Arc<dyn toolbridge::McpClient> = Arc::new(MockMcpClient::new(&config.mcp.base_url));

    let chat_client: Option<Arc<dyn ChatCompletionsClient>> = if config.deepseek.api_key.is_some()
    {
        Some(Arc::new(DeepSeekClientImpl::new(&config.deepseek)?))
    } else {
        tracing::warn!("DEEPSEEK_API_KEY not set; chat endpoints will report NotConfigured");
        None
    };

    if config.auth.api_key.is_none() {
        tracing::warn!("GATEWAY_API_KEY not set; chat endpoints will report a misconfiguration");
    }

    let gateway = ChatGateway::new(chat_client, mcp.clone(), &config.deepseek);

    let state = Arc::new(AppState {
        gateway,
        mcp,
        auth_key: config.auth.api_key.clone(),
    });

    GatewayHttpServer::new(config.server.clone(), state)
        .serve()
        .await
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
