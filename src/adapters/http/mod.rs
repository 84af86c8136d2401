//! HTTP surface for the Toolbridge gateway
//!
//! Routes validate request shape, delegate to the chat gateway or the MCP
//! client, and let `ApiError` translate the error taxonomy into status
//! codes in one place.

pub mod chat;
pub mod error;
pub mod mcp;
pub mod server;
pub mod system;

pub use error::ApiError;
pub use server::{AppState, GatewayHttpServer};
