//! Error types for the search library

use thiserror::Error;

/// Error type for building a [`Vocabulary`](crate::sequence_search::Vocabulary)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// A token was the empty string; it would match a zero-length prefix
    /// forever
    #[error("Empty token at position {index}")]
    EmptyToken { index: usize },
}
