//! Port trait definitions (Hexagonal Architecture)
//!
//! Async trait interfaces that infrastructure adapters must implement:
//! - `ChatCompletionsClient`: OpenAI-style chat completion provider
//! - `McpClient`: MCP tool backend
//!
//! These traits keep the gateway and the HTTP surface independent of the
//! concrete provider and transport implementations.

pub mod chat_client;
pub mod mcp_client;

pub use chat_client::{
    ChatCompletionRequest, ChatCompletionResponse, ChatCompletionsClient, ChatMessage, Choice,
    FunctionCall, FunctionDefinition, ToolCall, ToolDefinition, Usage,
};
pub use mcp_client::McpClient;
