//! Domain layer for the Toolbridge gateway
//!
//! This module contains the domain models, port traits, and error taxonomy.

pub mod error;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use error::{ChatApiError, GatewayError, McpError};
