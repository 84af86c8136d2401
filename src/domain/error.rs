use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the chat completion provider
#[derive(Error, Debug)]
pub enum ChatApiError {
    /// Invalid request parameters (HTTP 400)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid or missing API key (HTTP 401)
    #[error("Invalid API key - authentication failed")]
    InvalidApiKey,

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded - too many requests")]
    RateLimitExceeded,

    /// Server error from the provider (HTTP 5xx)
    #[error("Server error ({0}): {1}")]
    ServerError(StatusCode, String),

    /// Network or connection error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Unknown or unexpected error
    #[error("Unknown error ({0}): {1}")]
    UnknownError(StatusCode, String),
}

/// Errors specific to MCP client operations
///
/// Tool lookup misses are not errors at this level; dispatch reports them
/// as error outcomes. Only transport-level faults surface here.
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout error")]
    Timeout,
}

/// Errors surfaced by the chat gateway
///
/// Every failure inside the gateway is converted into one of these variants
/// at the gateway boundary; nothing propagates past it as an unhandled fault.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The provider credential is absent; no network call was attempted
    #[error("DeepSeek not configured. Set DEEPSEEK_API_KEY")]
    NotConfigured,

    /// The provider call failed or returned an unusable response
    #[error("DeepSeek error: {0}")]
    Upstream(String),
}

impl From<ChatApiError> for GatewayError {
    fn from(err: ChatApiError) -> Self {
        GatewayError::Upstream(err.to_string())
    }
}
