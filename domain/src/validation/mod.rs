//! Response validation
//!
//! Decodes persona output into the structured record each phase expects,
//! substituting a sentinel instead of failing where the protocol allows it.

pub mod parsing;

pub use parsing::{
    ChallengeParseError, ResponseShape, Validated, parse_challenges, strip_code_fence, validate,
};
