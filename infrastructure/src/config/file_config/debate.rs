//! Debate scheduling configuration from TOML (`[debate]` section)

use dialectic_application::DebateParams;
use dialectic_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Above this, a concurrency bound is probably a typo.
const SUSPICIOUS_CONCURRENCY: usize = 64;

/// Debate scheduling configuration
///
/// # Example
///
/// ```toml
/// [debate]
/// seat_concurrency = 4       # Seat calls in flight per phase
/// debate_concurrency = 2     # Debates in flight per batch
/// call_timeout_secs = 180    # Per persona call; unset waits forever
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    pub seat_concurrency: usize,
    pub debate_concurrency: usize,
    pub call_timeout_secs: Option<u64>,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            seat_concurrency: 1,
            debate_concurrency: 1,
            call_timeout_secs: None,
        }
    }
}

impl FileDebateConfig {
    pub fn to_params(&self) -> DebateParams {
        DebateParams::default()
            .with_seat_concurrency(self.seat_concurrency)
            .with_debate_concurrency(self.debate_concurrency)
            .with_call_timeout(self.call_timeout_secs.map(Duration::from_secs))
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for (field, value) in [
            ("seat_concurrency", self.seat_concurrency),
            ("debate_concurrency", self.debate_concurrency),
        ] {
            let field = format!("debate.{field}");
            if value == 0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ZeroConcurrency {
                        field: field.clone(),
                    },
                    format!("{field}: must be at least 1"),
                ));
            } else if value > SUSPICIOUS_CONCURRENCY {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::Suspicious {
                        field: field.clone(),
                    },
                    format!("{field}: {value} concurrent calls may hit provider rate limits"),
                ));
            }
        }
        if self.call_timeout_secs == Some(0) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::Suspicious {
                    field: "debate.call_timeout_secs".to_string(),
                },
                "debate.call_timeout_secs: 0 makes every persona call time out",
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sequential() {
        let params = FileDebateConfig::default().to_params();
        assert_eq!(params, DebateParams::default());
    }

    #[test]
    fn test_to_params() {
        let config = FileDebateConfig {
            seat_concurrency: 3,
            debate_concurrency: 2,
            call_timeout_secs: Some(90),
        };
        let params = config.to_params();
        assert_eq!(params.seat_concurrency, 3);
        assert_eq!(params.debate_concurrency, 2);
        assert_eq!(params.call_timeout, Some(Duration::from_secs(90)));
    }

    #[test]
    fn test_zero_and_large_concurrency() {
        let config = FileDebateConfig {
            seat_concurrency: 0,
            debate_concurrency: 500,
            call_timeout_secs: None,
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues[0].is_error());
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::ZeroConcurrency {
                field: "debate.seat_concurrency".to_string()
            }
        );
        assert!(!issues[1].is_error());
    }
}
