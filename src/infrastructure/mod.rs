//! Infrastructure layer module
//!
//! External integrations and adapters:
//! - DeepSeek HTTP client (reqwest)
//! - Mock MCP client serving canned tool responses
//! - Configuration management (figment)
//!
//! Infrastructure implementations satisfy the port traits defined in the
//! domain layer.

pub mod config;
pub mod deepseek;
pub mod mcp;
