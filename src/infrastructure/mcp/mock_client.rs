//! Mock MCP client serving canned tool responses
//!
//! Stands in for a real MCP transport behind the `McpClient` port. Tool
//! dispatch is real (registry lookup plus handler execution); the payloads
//! the handlers return are canned.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing::debug;

use crate::domain::error::McpError;
use crate::domain::models::{McpHealth, ToolOutcome};
use crate::domain::ports::McpClient;
use crate::infrastructure::mcp::tools::{self, ToolName};

/// Mock MCP client implementation
pub struct MockMcpClient {
    base_url: String,
}

impl MockMcpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl McpClient for MockMcpClient {
    async fn list_tools(&self) -> Result<Vec<String>, McpError> {
        Ok(ToolName::ALL
            .iter()
            .map(|tool| tool.as_str().to_string())
            .collect())
    }

    async fn execute_tool(&self, tool_name: &str, parameters: Value) -> ToolOutcome {
        debug!(tool = tool_name, "executing MCP tool");

        match ToolName::from_name(tool_name) {
            Some(tool) => tools::execute(tool, &parameters),
            None => ToolOutcome::error(format!("Tool not found: {tool_name}")),
        }
    }

    async fn health_check(&self) -> McpHealth {
        // A real client would verify the transport here
        McpHealth {
            status: "success".to_string(),
            mcp_server: "online".to_string(),
            base_url: self.base_url.clone(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
