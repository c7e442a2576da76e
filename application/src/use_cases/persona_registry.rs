//! Persona registry
//!
//! Binds each [`Role`] to a model and its fixed [`Constitution`], and turns a
//! role call into one fresh, stateless LLM session.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::persona::PersonaInvoker;
use async_trait::async_trait;
use dialectic_domain::{Constitution, PersonaModels, Role};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// [`PersonaInvoker`] backed by an [`LlmGateway`].
///
/// Every call opens a new session, so no role ever sees an earlier
/// exchange unless the prompt carries it.
pub struct PersonaRegistry<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    models: PersonaModels,
    call_timeout: Option<Duration>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> PersonaRegistry<G> {
    pub fn new(gateway: Arc<G>, models: PersonaModels) -> Self {
        Self {
            gateway,
            models,
            call_timeout: None,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_call_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.call_timeout = timeout;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn models(&self) -> &PersonaModels {
        &self.models
    }

    async fn call(&self, role: Role, prompt: &str) -> Result<String, GatewayError> {
        let model = self.models.for_role(role);
        let session = self
            .gateway
            .create_session_with_system_prompt(model, Constitution::for_role(role))
            .await?;

        match self.call_timeout {
            Some(limit) => tokio::time::timeout(limit, session.send(prompt))
                .await
                .map_err(|_| GatewayError::Timeout)?,
            None => session.send(prompt).await,
        }
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> PersonaInvoker for PersonaRegistry<G> {
    async fn invoke(&self, role: Role, prompt: &str) -> Result<String, GatewayError> {
        let model = self.models.for_role(role).to_string();
        debug!(role = role.as_str(), model = %model, "Invoking persona");

        let result = self.call(role, prompt).await;
        match &result {
            Ok(response) => {
                self.conversation_logger
                    .log(ConversationEvent::persona_response(
                        role.as_str(),
                        &model,
                        prompt,
                        response,
                    ));
            }
            Err(e) => {
                warn!(role = role.as_str(), model = %model, "Persona call failed: {}", e);
                self.conversation_logger.log(ConversationEvent::persona_error(
                    role.as_str(),
                    &model,
                    prompt,
                    &e.to_string(),
                ));
            }
        }
        result
    }
}
