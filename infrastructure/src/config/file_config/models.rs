//! Role-based model configuration from TOML (`[models]` section)

use dialectic_domain::{ConfigIssue, ConfigIssueCode, Model, PersonaModels};
use serde::{Deserialize, Serialize};

/// Role-based model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// default = "openai/gpt-4o-mini"        # Every role unless overridden
/// judge = "anthropic/claude-sonnet-4"   # Aggregator-Judge
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Fallback model for every role
    pub default: Option<String>,
    /// Model for the Proponent seats (Thesis and Rebuttal)
    pub proponent: Option<String>,
    /// Model for the Devil's Advocate (Antithesis)
    pub challenger: Option<String>,
    /// Model for the Aggregator-Judge (Synthesis)
    pub judge: Option<String>,
}

impl FileModelsConfig {
    /// Parse a single model string, collecting an issue for an empty name.
    fn parse_single_model(field: &str, value: Option<&String>) -> (Option<Model>, Vec<ConfigIssue>) {
        match value {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    format!("models.{}: model name cannot be empty", field),
                )],
            ),
            Some(s) => (Some(Model::from(s.trim())), Vec::new()),
        }
    }

    /// Resolve the model of every role.
    ///
    /// A role without its own entry uses `default`, then the built-in model.
    pub fn to_persona_models(&self) -> (PersonaModels, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut parse = |field: &str, value: Option<&String>| {
            let (model, found) = Self::parse_single_model(field, value);
            issues.extend(found);
            model
        };

        let fallback = parse("default", self.default.as_ref()).unwrap_or_default();
        let proponent = parse("proponent", self.proponent.as_ref());
        let challenger = parse("challenger", self.challenger.as_ref());
        let judge = parse("judge", self.judge.as_ref());

        let models = PersonaModels {
            proponent: proponent.unwrap_or_else(|| fallback.clone()),
            challenger: challenger.unwrap_or_else(|| fallback.clone()),
            judge: judge.unwrap_or(fallback),
        };
        (models, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_roles_use_builtin_model() {
        let (models, issues) = FileModelsConfig::default().to_persona_models();
        assert!(issues.is_empty());
        assert_eq!(models, PersonaModels::uniform(Model::Gpt4oMini));
    }

    #[test]
    fn test_default_then_role_override() {
        let config = FileModelsConfig {
            default: Some("openai/gpt-4o".to_string()),
            judge: Some("anthropic/claude-sonnet-4".to_string()),
            ..Default::default()
        };
        let (models, issues) = config.to_persona_models();
        assert!(issues.is_empty());
        assert_eq!(models.proponent, Model::Gpt4o);
        assert_eq!(models.challenger, Model::Gpt4o);
        assert_eq!(models.judge, Model::ClaudeSonnet4);
    }

    #[test]
    fn test_unknown_model_is_custom() {
        let config = FileModelsConfig {
            challenger: Some("mistralai/mistral-large".to_string()),
            ..Default::default()
        };
        let (models, _) = config.to_persona_models();
        assert_eq!(
            models.challenger,
            Model::Custom("mistralai/mistral-large".to_string())
        );
    }

    #[test]
    fn test_empty_model_name_is_error() {
        let config = FileModelsConfig {
            judge: Some("  ".to_string()),
            ..Default::default()
        };
        let (models, issues) = config.to_persona_models();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::EmptyModelName {
                field: "judge".to_string()
            }
        );
        assert_eq!(models.judge, Model::default());
    }
}
