//! Prompt domain
//!
//! Role constitutions (system prompts) and the per-phase user prompts.

mod constitution;
mod template;

pub use constitution::Constitution;
pub use template::DebatePromptTemplate;
