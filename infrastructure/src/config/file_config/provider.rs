//! Provider configuration from TOML (`[provider]` section)

use dialectic_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// OpenRouter (OpenAI-compatible) provider configuration.
///
/// # Example
///
/// ```toml
/// [provider]
/// base_url = "https://openrouter.ai/api/v1"
/// api_key_env = "OPENROUTER_API_KEY"
/// temperature = 0.1
/// timeout_secs = 120
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL of the chat-completions API.
    pub base_url: String,
    /// Environment variable name for the API key.
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Sampling temperature for every persona call.
    pub temperature: f32,
    /// Max tokens per response. Unset leaves it to the provider.
    pub max_tokens: Option<u32>,
    /// HTTP timeout per request, in seconds.
    pub timeout_secs: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            api_key: None,
            temperature: 0.1,
            max_tokens: None,
            timeout_secs: 120,
        }
    }
}

impl FileProviderConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::TemperatureOutOfRange {
                    value: self.temperature,
                },
                format!(
                    "provider.temperature: {} is outside 0.0..=2.0",
                    self.temperature
                ),
            ));
        }

        let has_key = self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty());
        if !has_key && self.api_key_env.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MissingApiKeySource,
                "provider: set api_key_env or api_key",
            ));
        }

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::Suspicious {
                    field: "provider.timeout_secs".to_string(),
                },
                "provider.timeout_secs: 0 makes every request time out immediately",
            ));
        }

        issues
    }
}
