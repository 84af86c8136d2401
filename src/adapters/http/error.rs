//! HTTP error mapping
//!
//! The single place where the error taxonomy is translated to status codes:
//! validation failures to 400, auth failures to 401, misconfiguration to
//! 500, upstream faults to 502. Handlers return `ApiError` and never build
//! status codes themselves.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::domain::error::{GatewayError, McpError};

/// Client-facing error, mapped uniformly to an HTTP response
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed request field
    #[error("{0}")]
    Validation(String),

    /// Caller did not present an API key
    #[error("Missing X-API-Key header")]
    MissingApiKey,

    /// Caller-presented API key does not match
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Tool dispatch produced an error outcome
    #[error("{0}")]
    ToolFailed(String),

    /// Required server-side configuration is absent
    #[error("{0}")]
    Misconfigured(String),

    /// Outbound provider or backend call failed
    #[error("{0}")]
    Upstream(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::ToolFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingApiKey | ApiError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            ApiError::Misconfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::MissingApiKey => "MISSING_API_KEY",
            ApiError::InvalidApiKey => "INVALID_API_KEY",
            ApiError::ToolFailed(_) => "TOOL_ERROR",
            ApiError::Misconfigured(_) => "NOT_CONFIGURED",
            ApiError::Upstream(_) => "UPSTREAM_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotConfigured => ApiError::Misconfigured(err.to_string()),
            GatewayError::Upstream(message) => ApiError::Upstream(message),
        }
    }
}

impl From<McpError> for ApiError {
    fn from(err: McpError) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("prompt".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::MissingApiKey.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidApiKey.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::ToolFailed("Tool not found: x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Misconfigured("no key".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Upstream("boom".into()).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_gateway_error_mapping() {
        let err: ApiError = GatewayError::NotConfigured.into();
        assert!(matches!(err, ApiError::Misconfigured(_)));

        let err: ApiError = GatewayError::Upstream("provider down".into()).into();
        assert!(matches!(err, ApiError::Upstream(_)));
    }

    #[test]
    fn test_mcp_error_maps_to_bad_gateway() {
        let err: ApiError = McpError::ConnectionError("refused".into()).into();
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);

        let err: ApiError = McpError::Timeout.into();
        assert!(matches!(err, ApiError::Upstream(_)));
    }
}
