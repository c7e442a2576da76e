//! Configuration file loading for dialectic-rag
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DIALECTIC_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./dialectic.toml` or `./.dialectic.toml`
//! 4. Global: `$XDG_CONFIG_HOME/dialectic-rag/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDebateConfig, FileModelsConfig, FilePathsConfig, FileProviderConfig,
};
pub use loader::ConfigLoader;
