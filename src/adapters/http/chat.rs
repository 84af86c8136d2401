//! Chat route handlers
//!
//! Both endpoints delegate to the chat gateway; the key check runs before
//! any validation or gateway work, so unauthenticated callers never reach
//! the provider.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;
use serde::Deserialize;

use crate::domain::models::{ChatReply, ConnectionProbe};

use super::error::ApiError;
use super::server::AppState;

const API_KEY_HEADER: &str = "x-api-key";

/// POST /chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: String,

    #[serde(default)]
    pub use_tools: bool,

    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub tools_list: Option<Vec<String>>,
}

/// POST /chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    check_api_key(&state, &headers)?;

    let prompt = request.prompt.trim();
    if prompt.is_empty() {
        return Err(ApiError::Validation("prompt must not be empty".to_string()));
    }

    let reply = if request.use_tools {
        let user_id = request.user_id.as_deref().unwrap_or("default");
        state
            .gateway
            .chat_with_tools(prompt, user_id, request.tools_list.as_deref())
            .await?
    } else {
        state.gateway.simple_chat(prompt).await?
    };

    Ok(Json(reply))
}

/// GET /deepseek-status
pub async fn deepseek_status(State(state): State<Arc<AppState>>) -> Json<ConnectionProbe> {
    Json(state.gateway.test_connection().await)
}

/// Compare the caller's `X-API-Key` against the configured secret
///
/// An absent server-side key is a misconfiguration (500), distinct from a
/// missing or mismatched client key (401).
fn check_api_key(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(expected) = state.auth_key.as_deref() else {
        return Err(ApiError::Misconfigured(
            "Gateway API key not configured".to_string(),
        ));
    };

    let presented = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::MissingApiKey)?;

    if presented != expected {
        return Err(ApiError::InvalidApiKey);
    }

    Ok(())
}
