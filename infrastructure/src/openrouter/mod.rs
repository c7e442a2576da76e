//! OpenRouter chat-completions provider
//!
//! Implements the [`LlmGateway`](dialectic_application::LlmGateway) port over
//! any OpenAI-compatible `/chat/completions` endpoint, OpenRouter by default.

mod error;
mod gateway;
mod protocol;
mod session;

pub use error::OpenRouterError;
pub use gateway::{OpenRouterConfig, OpenRouterGateway};
