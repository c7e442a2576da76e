//! Configuration domain types shared by the config loader and the CLI.

pub mod validation;

pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
