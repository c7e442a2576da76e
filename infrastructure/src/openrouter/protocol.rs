//! Chat-completions wire types (OpenAI-compatible, as served by OpenRouter)

use super::error::OpenRouterError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatRequest<'a> {
    /// A single user turn, preceded by the system prompt if there is one.
    pub fn single_turn(
        model: &'a str,
        system_prompt: Option<&'a str>,
        content: &'a str,
        temperature: f32,
        max_tokens: Option<u32>,
    ) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system_prompt.filter(|s| !s.is_empty()) {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content,
        });
        Self {
            model,
            messages,
            temperature,
            max_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub code: Option<serde_json::Value>,
}

impl ChatResponse {
    pub fn parse(body: &str) -> Result<Self, OpenRouterError> {
        serde_json::from_str(body).map_err(|e| OpenRouterError::Parse(e.to_string()))
    }

    /// Text of the first choice.
    pub fn into_text(self) -> Result<String, OpenRouterError> {
        if let Some(error) = self.error {
            return Err(OpenRouterError::Api(match error.code {
                Some(code) => format!("{} (code {})", error.message, code),
                None => error.message,
            }));
        }
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(OpenRouterError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_with_system_prompt() {
        let request =
            ChatRequest::single_turn("openai/gpt-4o-mini", Some("be terse"), "hi", 0.1, None);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "openai/gpt-4o-mini");
        assert_eq!(
            value["messages"],
            json!([
                {"role": "system", "content": "be terse"},
                {"role": "user", "content": "hi"}
            ])
        );
        assert!(value.get("max_tokens").is_none());
    }

    #[test]
    fn test_request_without_system_prompt() {
        let request = ChatRequest::single_turn("m", None, "hi", 0.0, Some(512));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["messages"].as_array().unwrap().len(), 1);
        assert_eq!(value["max_tokens"], 512);
    }

    #[test]
    fn test_first_choice_text() {
        let body = r#"{"id":"gen-1","choices":[{"message":{"role":"assistant","content":"{\"answer\":\"1963\"}"}}]}"#;
        let text = ChatResponse::parse(body).unwrap().into_text().unwrap();
        assert_eq!(text, r#"{"answer":"1963"}"#);
    }

    #[test]
    fn test_error_body() {
        let body = r#"{"error":{"message":"No endpoints found","code":404}}"#;
        let err = ChatResponse::parse(body).unwrap().into_text().unwrap_err();
        assert_eq!(err.to_string(), "API error: No endpoints found (code 404)");
    }

    #[test]
    fn test_no_choices() {
        let err = ChatResponse::parse(r#"{"choices":[]}"#)
            .unwrap()
            .into_text()
            .unwrap_err();
        assert!(matches!(err, OpenRouterError::EmptyResponse));
    }
}
