//! Query context and documents.
//!
//! One line of a prepared dataset file decodes into one [`QueryContext`].
//! Decoding is lenient about shape (absent or `null` lists become empty,
//! numeric ids become strings) and strict about the one invariant the debate
//! relies on: unique document ids. The question is taken verbatim.

use crate::core::error::DomainError;
use crate::core::question::Question;
use crate::query::seat::SeatId;
use serde::{Deserialize, Deserializer, Serialize};

/// A candidate source document (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(deserialize_with = "string_or_number")]
    pub doc_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl Document {
    pub fn new(doc_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            text: text.into(),
        }
    }
}

/// Everything one debate needs, plus evaluation-only ground truth.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQueryContext")]
pub struct QueryContext {
    query_id: String,
    question: Question,
    documents: Vec<Document>,
    gold_answers: Vec<String>,
    wrong_answers: Vec<String>,
}

impl QueryContext {
    /// Build a context, rejecting duplicate document ids.
    pub fn new(
        query_id: impl Into<String>,
        question: Question,
        documents: Vec<Document>,
    ) -> Result<Self, DomainError> {
        let query_id = query_id.into();
        for (i, doc) in documents.iter().enumerate() {
            if documents[..i].iter().any(|d| d.doc_id == doc.doc_id) {
                return Err(DomainError::DuplicateDocumentId {
                    query_id,
                    doc_id: doc.doc_id.clone(),
                });
            }
        }
        Ok(Self {
            query_id,
            question,
            documents,
            gold_answers: Vec::new(),
            wrong_answers: Vec::new(),
        })
    }

    pub fn with_gold_answers(mut self, answers: Vec<String>) -> Self {
        self.gold_answers = answers;
        self
    }

    pub fn with_wrong_answers(mut self, answers: Vec<String>) -> Self {
        self.wrong_answers = answers;
        self
    }

    pub fn query_id(&self) -> &str {
        &self.query_id
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn gold_answers(&self) -> &[String] {
        &self.gold_answers
    }

    pub fn wrong_answers(&self) -> &[String] {
        &self.wrong_answers
    }

    /// Documents paired with the seat that argues from them, in order.
    pub fn seats(&self) -> impl Iterator<Item = (SeatId, &Document)> {
        self.documents
            .iter()
            .enumerate()
            .map(|(i, doc)| (SeatId::from_index(i), doc))
    }

    /// The document assigned to a seat.
    pub fn document_for(&self, seat: SeatId) -> Option<&Document> {
        self.documents.get(seat.index())
    }
}

/// Wire shape of a dataset line before invariants are checked.
#[derive(Deserialize)]
struct RawQueryContext {
    #[serde(deserialize_with = "string_or_number")]
    query_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    documents: Vec<Document>,
    #[serde(default, deserialize_with = "null_as_default")]
    gold_answers: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    wrong_answers: Vec<String>,
}

impl TryFrom<RawQueryContext> for QueryContext {
    type Error = DomainError;

    fn try_from(raw: RawQueryContext) -> Result<Self, Self::Error> {
        let question = Question::verbatim(raw.question);
        Ok(QueryContext::new(raw.query_id, question, raw.documents)?
            .with_gold_answers(raw.gold_answers)
            .with_wrong_answers(raw.wrong_answers))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
        Id::Uint(n) => n.to_string(),
    })
}
