//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: models a persona can be bound to (OpenRouter ids)
//! - [`question::Question`]: a validated question posed to the debate
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod question;
