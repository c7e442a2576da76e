//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain and application
//! types on demand.

mod debate;
mod models;
mod paths;
mod provider;

pub use debate::FileDebateConfig;
pub use models::FileModelsConfig;
pub use paths::FilePathsConfig;
pub use provider::FileProviderConfig;

use dialectic_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Role-based model selection
    pub models: FileModelsConfig,
    /// Chat-completions provider settings
    pub provider: FileProviderConfig,
    /// Debate scheduling
    pub debate: FileDebateConfig,
    /// Input and output directories
    pub paths: FilePathsConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.models.to_persona_models().1);
        issues.extend(self.provider.validate());
        issues.extend(self.debate.validate());
        issues
    }
}
