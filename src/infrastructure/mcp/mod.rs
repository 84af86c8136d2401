//! MCP (Model Context Protocol) infrastructure module
//!
//! Provides the tool registry and the `MockMcpClient`, which satisfies the
//! `McpClient` port with canned responses instead of a real MCP transport.
//! Whether a production deployment replaces the mock with a real protocol
//! client is a deployment decision; everything above the port is unaffected.

pub mod mock_client;
pub mod tools;

pub use mock_client::MockMcpClient;
pub use tools::ToolName;
