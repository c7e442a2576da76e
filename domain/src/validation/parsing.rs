//! Structured response parsing for debate personas.
//!
//! Pure domain logic with no I/O. Every decoder first applies the
//! same repair (trim, unwrap one enclosing Markdown code fence) and then
//! decodes strictly.
//!
//! | Function | Shape | On failure |
//! |----------|-------|------------|
//! | [`validate::<Statement>`](validate) | `{answer, chain_of_thought[]}` | `{answer: "JSON_PARSE_ERROR", chain_of_thought: [raw]}` |
//! | [`validate::<FinalAnswer>`](validate) | `{final_answer}` | `{final_answer: raw}` |
//! | [`parse_challenges`] | `{agent_i_challenge: text}` | [`ChallengeParseError`] |

use crate::debate::transcript::{ChallengeSet, FinalAnswer, Statement};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// A record shape that has a well-defined sentinel.
pub trait ResponseShape: DeserializeOwned {
    /// Placeholder carrying the raw text forward.
    fn sentinel(raw: &str) -> Self;
}

impl ResponseShape for Statement {
    fn sentinel(raw: &str) -> Self {
        Statement::parse_error(raw)
    }
}

impl ResponseShape for FinalAnswer {
    fn sentinel(raw: &str) -> Self {
        FinalAnswer::new(raw)
    }
}

/// Result of validating a response against a shape that never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum Validated<T> {
    /// Decoded verbatim.
    Parsed(T),
    /// Decoding failed; `record` is the sentinel.
    Sentinel { record: T, reason: String },
}

impl<T> Validated<T> {
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Validated::Sentinel { .. })
    }

    pub fn into_record(self) -> T {
        match self {
            Validated::Parsed(record) | Validated::Sentinel { record, .. } => record,
        }
    }
}

/// Decode `raw` as `T`, or fall back to `T::sentinel(raw)`.
///
/// The sentinel keeps the original, unrepaired text.
pub fn validate<T: ResponseShape>(raw: &str) -> Validated<T> {
    match serde_json::from_str::<T>(strip_code_fence(raw)) {
        Ok(record) => Validated::Parsed(record),
        Err(e) => Validated::Sentinel {
            record: T::sentinel(raw),
            reason: e.to_string(),
        },
    }
}

/// The Challenger output was not a mapping at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("challenge set is not a JSON object: {reason}")]
pub struct ChallengeParseError {
    pub reason: String,
}

/// Decode the Challenger output. There is no sentinel for this shape.
pub fn parse_challenges(raw: &str) -> Result<ChallengeSet, ChallengeParseError> {
    serde_json::from_str(strip_code_fence(raw)).map_err(|e| ChallengeParseError {
        reason: e.to_string(),
    })
}

/// Trim whitespace and unwrap a single enclosing Markdown code fence.
///
/// ```
/// use dialectic_domain::validation::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
/// assert_eq!(strip_code_fence("  {\"a\": 1} "), "{\"a\": 1}");
/// assert_eq!(strip_code_fence("```{}```"), "{}");
/// ```
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };

    // The opening line may carry an info string such as `json`.
    match body.split_once('\n') {
        Some((info, content)) if info.trim().chars().all(|c| c.is_ascii_alphanumeric()) => {
            content.trim()
        }
        _ => body.trim(),
    }
}
