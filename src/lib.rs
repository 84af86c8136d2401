//! Toolbridge - Chat/MCP HTTP Gateway
//!
//! Toolbridge is a small HTTP service that bridges two backends behind a
//! uniform REST surface: a DeepSeek-compatible chat completion API and an
//! MCP (Model Context Protocol) tool backend. The MCP side ships with a
//! mocked client that serves canned tool responses; the real wire protocol
//! is a pluggable concern behind the `McpClient` port.
//!
//! # Architecture
//!
//! The crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, port traits, and the error taxonomy
//! - **Service Layer** (`services`): The chat gateway orchestrating provider
//!   calls and tool execution
//! - **Infrastructure Layer** (`infrastructure`): DeepSeek HTTP client,
//!   mock MCP client, configuration loading
//! - **Adapter Layer** (`adapters`): The axum HTTP surface

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::error::{ChatApiError, GatewayError, McpError};
pub use domain::models::{
    ChatReply, Config, ConnectionProbe, DeepSeekConfig, LoggingConfig, McpConfig, McpHealth,
    ServerConfig, ToolOutcome,
};
pub use domain::ports::{ChatCompletionsClient, McpClient};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::ChatGateway;
