//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Duplicate document id '{doc_id}' in query {query_id}")]
    DuplicateDocumentId { query_id: String, doc_id: String },

    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl DomainError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DomainError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_error_display() {
        let error = DomainError::Cancelled;
        assert_eq!(error.to_string(), "Operation cancelled");
    }

    #[test]
    fn test_duplicate_document_display() {
        let error = DomainError::DuplicateDocumentId {
            query_id: "q1".to_string(),
            doc_id: "d1".to_string(),
        };
        assert_eq!(error.to_string(), "Duplicate document id 'd1' in query q1");
    }

    #[test]
    fn test_is_cancelled_check() {
        assert!(DomainError::Cancelled.is_cancelled());
        assert!(!DomainError::UnknownDataset("x".to_string()).is_cancelled());
    }
}
