//! Chat gateway
//!
//! Wraps the chat completion provider, optionally augmented with MCP tool
//! calling, and normalizes every outcome into either a `ChatReply` or a
//! `GatewayError`. Provider faults never propagate past this boundary.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::domain::error::GatewayError;
use crate::domain::models::{ChatReply, ConnectionProbe, DeepSeekConfig};
use crate::domain::ports::{
    ChatCompletionRequest, ChatCompletionsClient, ChatMessage, Choice, McpClient, ToolDefinition,
};
use crate::infrastructure::mcp::ToolName;

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
const TOOL_SYSTEM_PROMPT: &str =
    "You are a helpful assistant with access to tools. Use them when appropriate.";

/// Gateway between the HTTP surface and the chat completion provider
///
/// Holds no mutable state; safe to share across requests. A missing
/// provider client (absent credential) short-circuits every operation
/// without a network call.
pub struct ChatGateway {
    client: Option<Arc<dyn ChatCompletionsClient>>,
    mcp: Arc<dyn McpClient>,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl ChatGateway {
    pub fn new(
        client: Option<Arc<dyn ChatCompletionsClient>>,
        mcp: Arc<dyn McpClient>,
        settings: &DeepSeekConfig,
    ) -> Self {
        Self {
            client,
            mcp,
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        }
    }

    /// Whether a provider credential is configured
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Forward a single user message without tools
    #[instrument(skip(self, message))]
    pub async fn simple_chat(&self, message: &str) -> Result<ChatReply, GatewayError> {
        let client = self.client.as_ref().ok_or(GatewayError::NotConfigured)?;

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(message)],
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
            tools: None,
            stream: false,
        };

        let response = client.chat_completions(request).await?;
        let model = response.model.clone();
        let choice = first_choice(response)?;

        Ok(ChatReply {
            response: message_text(&choice),
            tools_used: Vec::new(),
            model,
        })
    }

    /// Chat with the tool manifest offered to the model
    ///
    /// Tool calls requested by the model are executed against the MCP
    /// backend, their outcomes fed back, and the follow-up assistant
    /// message returned. `tools_used` records what was actually invoked.
    #[instrument(skip_all, fields(user_id = %user_id))]
    pub async fn chat_with_tools(
        &self,
        message: &str,
        user_id: &str,
        tools_list: Option<&[String]>,
    ) -> Result<ChatReply, GatewayError> {
        let client = self.client.as_ref().ok_or(GatewayError::NotConfigured)?;

        let manifest = build_manifest(tools_list);
        let tools = if manifest.is_empty() {
            None
        } else {
            Some(manifest)
        };

        let mut messages = vec![
            ChatMessage::system(TOOL_SYSTEM_PROMPT),
            ChatMessage::user(message),
        ];

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: messages.clone(),
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
            tools: tools.clone(),
            stream: false,
        };

        let response = client.chat_completions(request).await?;
        let model = response.model.clone();
        let choice = first_choice(response)?;

        let Some(tool_calls) = choice
            .message
            .tool_calls
            .clone()
            .filter(|calls| !calls.is_empty())
        else {
            return Ok(ChatReply {
                response: message_text(&choice),
                tools_used: Vec::new(),
                model,
            });
        };

        // The assistant turn carrying the tool calls must precede the
        // tool-result turns in the follow-up request.
        messages.push(choice.message);

        let mut tools_used = Vec::with_capacity(tool_calls.len());
        for call in &tool_calls {
            let arguments: Value =
                serde_json::from_str(&call.function.arguments).unwrap_or_else(|_| json!({}));
            let outcome = self.mcp.execute_tool(&call.function.name, arguments).await;

            debug!(tool = %call.function.name, failed = outcome.is_error(), "tool call resolved");
            tools_used.push(call.function.name.clone());

            let payload =
                serde_json::to_string(&outcome).unwrap_or_else(|_| "{}".to_string());
            messages.push(ChatMessage::tool(call.id.clone(), payload));
        }

        let follow_up = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
            tools,
            stream: false,
        };

        let response = client.chat_completions(follow_up).await?;
        let model = response.model.clone();
        let choice = first_choice(response)?;

        Ok(ChatReply {
            response: message_text(&choice),
            tools_used,
            model,
        })
    }

    /// Lightweight liveness probe: one short completion request
    pub async fn test_connection(&self) -> ConnectionProbe {
        let Some(client) = self.client.as_ref() else {
            return ConnectionProbe::error(GatewayError::NotConfigured.to_string());
        };

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user("Reply only with 'OK'")],
            max_tokens: 10,
            temperature: None,
            tools: None,
            stream: false,
        };

        match client.chat_completions(request).await {
            Ok(response) => {
                let text = response
                    .choices
                    .first()
                    .and_then(|choice| choice.message.content.clone());
                ConnectionProbe::success("Connection to DeepSeek succeeded", text)
            }
            Err(err) => ConnectionProbe::error(format!("Connection error: {err}")),
        }
    }
}

/// Resolve the requested tool names into a provider manifest
///
/// `None` offers the full registry; unknown names are silently dropped.
fn build_manifest(tools_list: Option<&[String]>) -> Vec<ToolDefinition> {
    let tools: Vec<ToolName> = match tools_list {
        Some(names) => names
            .iter()
            .filter_map(|name| ToolName::from_name(name))
            .collect(),
        None => ToolName::ALL.to_vec(),
    };

    tools
        .into_iter()
        .map(|tool| {
            ToolDefinition::function(tool.as_str(), tool.description(), tool.parameters_schema())
        })
        .collect()
}

fn first_choice(response: crate::domain::ports::ChatCompletionResponse) -> Result<Choice, GatewayError> {
    response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::Upstream("provider returned no choices".to_string()))
}

fn message_text(choice: &Choice) -> String {
    choice
        .message
        .content
        .clone()
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| "No text response".to_string())
}
