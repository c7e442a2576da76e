//! Infrastructure layer for dialectic-rag
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the OpenRouter gateway, JSONL dataset and
//! result files, the conversation log, and configuration file loading.

pub mod config;
pub mod dataset;
pub mod logging;
pub mod openrouter;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileDebateConfig, FileModelsConfig, FilePathsConfig,
    FileProviderConfig,
};
pub use dataset::{DatasetError, ExperimentPaths, JsonlDatasetLoader, LoadedDataset};
pub use logging::{JsonlConversationLogger, JsonlResultWriter};
pub use openrouter::{OpenRouterConfig, OpenRouterError, OpenRouterGateway};
