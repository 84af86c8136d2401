use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized result of a single tool dispatch
///
/// Tagged by `status`; exactly one of `result`/`error` is present per
/// variant. Created per call and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolOutcome {
    Success { result: Value },
    Error { error: String },
}

impl ToolOutcome {
    pub fn success(result: Value) -> Self {
        ToolOutcome::Success { result }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ToolOutcome::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ToolOutcome::Error { .. })
    }
}

/// Successful chat gateway result
///
/// The failure arm is `GatewayError`; on the wire the two are mutually
/// exclusive (`{response, tools_used, model}` or `{error}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// Final assistant message text
    pub response: String,

    /// Names of the tools actually invoked while producing the reply
    pub tools_used: Vec<String>,

    /// Model that produced the reply
    pub model: String,
}

/// Result of the chat provider liveness probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionProbe {
    /// "success" or "error"
    pub status: String,

    /// Human-readable outcome description
    pub message: String,

    /// Provider reply text, when the probe reached the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl ConnectionProbe {
    pub fn success(message: impl Into<String>, response: Option<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            response,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            response: None,
        }
    }
}

/// MCP backend health report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpHealth {
    pub status: String,
    pub mcp_server: String,
    pub base_url: String,
    pub timestamp: String,
}
