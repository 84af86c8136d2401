//! MCP route handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::models::{McpHealth, ToolOutcome};

use super::error::ApiError;
use super::server::AppState;

/// Tool listing response: `{status, tools}`
#[derive(Debug, Serialize)]
pub struct ToolListResponse {
    pub status: String,
    pub tools: Vec<String>,
}

/// One entry of the self-test report
#[derive(Debug, Serialize)]
pub struct ToolTestResult {
    pub test: String,
    pub result: ToolOutcome,
}

/// Self-test response
#[derive(Debug, Serialize)]
pub struct SelfTestResponse {
    pub status: String,
    pub health_check: McpHealth,
    pub available_tools: ToolListResponse,
    pub test_results: Vec<ToolTestResult>,
    pub message: String,
}

/// GET /mcp - router summary with health, tools, and endpoint map
pub async fn root(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let health = state.mcp.health_check().await;
    let tools = state.mcp.list_tools().await?;

    Ok(Json(json!({
        "message": "MCP router active",
        "health": health,
        "available_tools": tools,
        "endpoints": {
            "test": "/mcp/test",
            "health": "/mcp/health",
            "tools": "/mcp/tools",
            "execute_tool": "/mcp/tools/{tool_name} (POST)",
        },
    })))
}

/// GET /mcp/tools
pub async fn list_tools(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ToolListResponse>, ApiError> {
    let tools = state.mcp.list_tools().await?;
    Ok(Json(ToolListResponse {
        status: "success".to_string(),
        tools,
    }))
}

/// POST /mcp/tools/{tool_name}
///
/// The body is the tool parameter object; a missing body is treated as an
/// empty one. Error outcomes surface as 400 with the error as detail.
pub async fn execute_tool(
    State(state): State<Arc<AppState>>,
    Path(tool_name): Path<String>,
    parameters: Option<Json<Value>>,
) -> Result<Json<ToolOutcome>, ApiError> {
    let parameters = parameters.map_or_else(|| json!({}), |Json(value)| value);

    match state.mcp.execute_tool(&tool_name, parameters).await {
        ToolOutcome::Error { error } => Err(ApiError::ToolFailed(error)),
        outcome => Ok(Json(outcome)),
    }
}

/// GET /mcp/health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<McpHealth> {
    Json(state.mcp.health_check().await)
}

/// GET /mcp/test - exercise the backend end to end with sample calls
pub async fn self_test(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SelfTestResponse>, ApiError> {
    let health_check = state.mcp.health_check().await;
    let tools = state.mcp.list_tools().await?;

    let samples = [
        ("get_server_info", json!({})),
        (
            "calculate_operation",
            json!({"operation": "sum", "numbers": [1, 2, 3, 4, 5]}),
        ),
        (
            "format_text",
            json!({"text": "Hello MCP World!", "style": "uppercase"}),
        ),
    ];

    let mut test_results = Vec::with_capacity(samples.len());
    for (name, parameters) in samples {
        let result = state.mcp.execute_tool(name, parameters).await;
        test_results.push(ToolTestResult {
            test: name.to_string(),
            result,
        });
    }

    Ok(Json(SelfTestResponse {
        status: "success".to_string(),
        health_check,
        available_tools: ToolListResponse {
            status: "success".to_string(),
            tools,
        },
        test_results,
        message: "MCP self-test completed".to_string(),
    }))
}
