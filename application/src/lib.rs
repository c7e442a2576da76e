//! Application layer for dialectic-rag
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DebateParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    persona::PersonaInvoker,
    progress::{NoProgress, ProgressNotifier},
    result_sink::{ResultSink, ResultSinkError},
};
pub use use_cases::persona_registry::PersonaRegistry;
pub use use_cases::run_debate::{RunDebateError, RunDebateUseCase};
pub use use_cases::run_experiment::{
    ExperimentItem, ExperimentSummary, RunExperimentError, RunExperimentUseCase,
};
