use async_trait::async_trait;
use serde_json::Value;

use crate::domain::error::McpError;
use crate::domain::models::{McpHealth, ToolOutcome};

/// Port trait for the MCP (Model Context Protocol) tool backend
///
/// `execute_tool` never fails at the trait level: lookup misses and handler
/// failures are both folded into the error arm of `ToolOutcome`, so callers
/// only have to inspect the outcome's status discriminator.
#[async_trait]
pub trait McpClient: Send + Sync {
    /// List the names of the available tools
    async fn list_tools(&self) -> Result<Vec<String>, McpError>;

    /// Execute a tool by name with a JSON parameter object
    async fn execute_tool(&self, tool_name: &str, parameters: Value) -> ToolOutcome;

    /// Report backend connectivity and configuration
    async fn health_check(&self) -> McpHealth;
}
