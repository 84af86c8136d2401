//! DeepSeek HTTP API client implementation

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::error::ChatApiError;
use crate::domain::models::DeepSeekConfig;
use crate::domain::ports::{ChatCompletionRequest, ChatCompletionResponse, ChatCompletionsClient};

/// HTTP client for the DeepSeek chat completion API
///
/// Uses a pooled `reqwest::Client` with a request timeout from config.
/// No retries: any outbound failure is terminal for the request that
/// triggered it.
pub struct DeepSeekClientImpl {
    http_client: ReqwestClient,
    api_key: String,
    base_url: String,
}

impl DeepSeekClientImpl {
    /// Create a client from provider configuration
    ///
    /// Fails if the configuration carries no API key or the HTTP client
    /// cannot be built.
    pub fn new(config: &DeepSeekConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .context("DeepSeek API key is not configured")?;

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(10)
            .tcp_nodelay(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn classify_failure(response: Response) -> ChatApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        match status {
            StatusCode::BAD_REQUEST => ChatApiError::InvalidRequest(body),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ChatApiError::InvalidApiKey,
            StatusCode::TOO_MANY_REQUESTS => ChatApiError::RateLimitExceeded,
            status if status.is_server_error() => ChatApiError::ServerError(status, body),
            status => ChatApiError::UnknownError(status, body),
        }
    }
}

#[async_trait]
impl ChatCompletionsClient for DeepSeekClientImpl {
    async fn chat_completions(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ChatApiError> {
        debug!(model = %request.model, messages = request.messages.len(), "sending chat completion request");

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    ChatApiError::Timeout
                } else {
                    ChatApiError::NetworkError(err)
                }
            })?;

        if !response.status().is_success() {
            let err = Self::classify_failure(response).await;
            warn!(error = %err, "chat completion request failed");
            return Err(err);
        }

        let completion = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(ChatApiError::NetworkError)?;

        debug!(id = %completion.id, choices = completion.choices.len(), "chat completion received");
        Ok(completion)
    }
}
