//! Persona domain
//!
//! The three fixed debate roles. A role is a stateless contract: every
//! fact it needs is re-supplied in each prompt, and its constitution
//! ([`crate::prompt::Constitution`]) never changes at runtime.

mod models;
mod role;

pub use models::PersonaModels;
pub use role::Role;
