//! OpenRouter LLM session implementation
//!
//! The chat-completions API is stateless, and so is this session: every
//! `send` is one system + user exchange with no history.

use super::error::OpenRouterError;
use super::gateway::OpenRouterConfig;
use super::protocol::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use dialectic_application::{GatewayError, LlmSession};
use dialectic_domain::Model;
use std::sync::Arc;
use tracing::debug;

pub struct OpenRouterSession {
    client: reqwest::Client,
    config: Arc<OpenRouterConfig>,
    model: Model,
    system_prompt: Option<String>,
}

impl OpenRouterSession {
    pub fn new(
        client: reqwest::Client,
        config: Arc<OpenRouterConfig>,
        model: Model,
        system_prompt: Option<String>,
    ) -> Self {
        Self {
            client,
            config,
            model,
            system_prompt,
        }
    }

    async fn complete(&self, content: &str) -> Result<String, OpenRouterError> {
        let url = self.config.completions_url();
        let request = ChatRequest::single_turn(
            self.model.as_str(),
            self.system_prompt.as_deref(),
            content,
            self.config.temperature,
            self.config.max_tokens,
        );

        debug!(model = %self.model, bytes = content.len(), "POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| OpenRouterError::from_transport(&url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OpenRouterError::from_transport(&url, e))?;

        if !status.is_success() {
            return Err(OpenRouterError::Http {
                status: status.as_u16(),
                body,
            });
        }

        ChatResponse::parse(&body)?.into_text()
    }
}

#[async_trait]
impl LlmSession for OpenRouterSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        Ok(self.complete(content).await?)
    }
}
