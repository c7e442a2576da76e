//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Models addressable through an OpenAI-compatible router (Value Object)
///
/// Identifiers follow the OpenRouter `vendor/model` convention. Anything
/// not listed parses into [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gpt4oMini,
    Gpt4o,
    Gpt41Mini,
    ClaudeSonnet4,
    ClaudeHaiku35,
    Gemini25Flash,
    Llama3370b,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4oMini => "openai/gpt-4o-mini",
            Model::Gpt4o => "openai/gpt-4o",
            Model::Gpt41Mini => "openai/gpt-4.1-mini",
            Model::ClaudeSonnet4 => "anthropic/claude-sonnet-4",
            Model::ClaudeHaiku35 => "anthropic/claude-3.5-haiku",
            Model::Gemini25Flash => "google/gemini-2.5-flash",
            Model::Llama3370b => "meta-llama/llama-3.3-70b-instruct",
            Model::Custom(s) => s,
        }
    }

    /// Vendor prefix of the identifier (`openai`, `anthropic`, ...)
    pub fn vendor(&self) -> Option<&str> {
        self.as_str().split_once('/').map(|(vendor, _)| vendor)
    }
}

impl Default for Model {
    /// The low-cost model every persona uses unless configured otherwise
    fn default() -> Self {
        Model::Gpt4oMini
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "openai/gpt-4o-mini" => Model::Gpt4oMini,
            "openai/gpt-4o" => Model::Gpt4o,
            "openai/gpt-4.1-mini" => Model::Gpt41Mini,
            "anthropic/claude-sonnet-4" => Model::ClaudeSonnet4,
            "anthropic/claude-3.5-haiku" => Model::ClaudeHaiku35,
            "google/gemini-2.5-flash" => Model::Gemini25Flash,
            "meta-llama/llama-3.3-70b-instruct" => Model::Llama3370b,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
