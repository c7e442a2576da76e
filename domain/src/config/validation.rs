//! Configuration issues.
//!
//! The infrastructure config loader reports problems as [`ConfigIssue`]s
//! instead of failing on the first one, so the CLI can show them all.
//! Errors stop startup; warnings are logged and the run continues.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssueCode {
    /// A model field is present but blank.
    EmptyModelName { field: String },
    /// A concurrency bound is zero, which would never schedule work.
    ZeroConcurrency { field: String },
    /// Sampling temperature outside the range providers accept.
    TemperatureOutOfRange { value: f32 },
    /// Neither an API key nor a non-empty key variable name is configured.
    MissingApiKeySource,
    /// A value that parsed but is unusually large or small.
    Suspicious { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let e = ConfigIssue::error(ConfigIssueCode::MissingApiKeySource, "no key");
        let w = ConfigIssue::warning(
            ConfigIssueCode::Suspicious {
                field: "debate.seat_concurrency".to_string(),
            },
            "large",
        );
        assert!(e.is_error());
        assert!(!w.is_error());
        assert_eq!(e.to_string(), "no key");
    }
}
