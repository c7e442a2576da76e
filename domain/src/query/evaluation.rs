//! Answer evaluation against ground truth.
//!
//! Evaluation-only: the debate protocol never reads gold or wrong answers.
//! Matching is case-insensitive containment of each expected string in the
//! final answer text.

use crate::query::context::QueryContext;
use serde::Serialize;

/// Which gold and wrong answers a final answer mentions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnswerEvaluation {
    pub matched_gold: Vec<String>,
    pub matched_wrong: Vec<String>,
}

impl AnswerEvaluation {
    pub fn evaluate(context: &QueryContext, final_answer: &str) -> Self {
        let haystack = final_answer.to_lowercase();
        let mentions = |answers: &[String]| -> Vec<String> {
            answers
                .iter()
                .filter(|a| !a.trim().is_empty() && haystack.contains(&a.to_lowercase()))
                .cloned()
                .collect()
        };
        Self {
            matched_gold: mentions(context.gold_answers()),
            matched_wrong: mentions(context.wrong_answers()),
        }
    }

    /// At least one acceptable answer appears in the final answer.
    pub fn answer_matches_gold(&self) -> bool {
        !self.matched_gold.is_empty()
    }

    /// Every listed gold answer appears (multi-answer questions).
    pub fn covers_all_gold(&self, context: &QueryContext) -> bool {
        let expected = context
            .gold_answers()
            .iter()
            .filter(|a| !a.trim().is_empty())
            .count();
        expected > 0 && self.matched_gold.len() == expected
    }

    /// Any known-incorrect answer leaked into the final answer.
    pub fn mentions_wrong(&self) -> bool {
        !self.matched_wrong.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::question::Question;

    fn context() -> QueryContext {
        QueryContext::new("q", Question::new("When was X born?"), vec![])
            .unwrap()
            .with_gold_answers(vec!["1963".to_string(), "1956".to_string()])
            .with_wrong_answers(vec!["1999".to_string()])
    }

    #[test]
    fn test_matches_gold_case_insensitively() {
        let ctx = QueryContext::new("q", Question::new("Who?"), vec![])
            .unwrap()
            .with_gold_answers(vec!["Ada Lovelace".to_string()]);
        let eval = AnswerEvaluation::evaluate(&ctx, "It was ada lovelace.");
        assert!(eval.answer_matches_gold());
        assert!(eval.covers_all_gold(&ctx));
    }

    #[test]
    fn test_partial_coverage() {
        let ctx = context();
        let eval = AnswerEvaluation::evaluate(&ctx, "Born in 1963.");
        assert!(eval.answer_matches_gold());
        assert!(!eval.covers_all_gold(&ctx));
        assert!(!eval.mentions_wrong());
    }

    #[test]
    fn test_wrong_answer_detected() {
        let eval = AnswerEvaluation::evaluate(&context(), "Born in 1999.");
        assert!(!eval.answer_matches_gold());
        assert!(eval.mentions_wrong());
    }
}
