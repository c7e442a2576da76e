//! Persona invocation port
//!
//! The debate only ever talks to a role, never to a model directly. A role
//! call is stateless: the full context travels in `prompt`.

use crate::ports::llm_gateway::GatewayError;
use async_trait::async_trait;
use dialectic_domain::Role;

/// Sends one prompt to one role and returns its raw text reply.
#[async_trait]
pub trait PersonaInvoker: Send + Sync {
    async fn invoke(&self, role: Role, prompt: &str) -> Result<String, GatewayError>;
}
