//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording every persona
//! exchange (role, model, prompt, reply or failure) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port keeps the full text
//! of each call in a machine-readable format (JSONL) for later audit.

use serde_json::{Value, json};

/// A structured conversation event for logging.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "persona_response", "persona_error").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// A persona replied.
    pub fn persona_response(role: &str, model: &str, prompt: &str, response: &str) -> Self {
        Self::new(
            "persona_response",
            json!({
                "role": role,
                "model": model,
                "prompt": prompt,
                "response": response,
            }),
        )
    }

    /// A persona call failed at the transport level.
    pub fn persona_error(role: &str, model: &str, prompt: &str, error: &str) -> Self {
        Self::new(
            "persona_error",
            json!({
                "role": role,
                "model": model,
                "prompt": prompt,
                "error": error,
            }),
        )
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and non-fallible; a failed write must never
/// disturb the debate.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_response_payload() {
        let event = ConversationEvent::persona_response("judge", "openai/gpt-4o-mini", "p", "r");
        assert_eq!(event.event_type, "persona_response");
        assert_eq!(event.payload["role"], "judge");
        assert_eq!(event.payload["response"], "r");
    }

    #[test]
    fn test_persona_error_payload() {
        let event = ConversationEvent::persona_error("challenger", "m", "p", "Timeout");
        assert_eq!(event.event_type, "persona_error");
        assert_eq!(event.payload["error"], "Timeout");
        assert!(event.payload.get("response").is_none());
    }
}
