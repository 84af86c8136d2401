//! Domain models for the Toolbridge gateway

pub mod config;
pub mod outcome;

pub use config::{AuthConfig, Config, DeepSeekConfig, LoggingConfig, McpConfig, ServerConfig};
pub use outcome::{ChatReply, ConnectionProbe, McpHealth, ToolOutcome};
