//! Error types for wordrec-dict

use thiserror::Error;

use crate::session::LoadState;

/// Errors from dictionary loading and teardown
///
/// Queries never produce errors; a word the dictionary does not know is
/// reported through `PermuterKind::NotFound`, not through this type.
#[derive(Error, Debug)]
pub enum DictError {
    /// Load-protocol call made out of order
    #[error("dictionary load protocol violation: expected state {expected}, got {actual}")]
    OutOfOrder {
        expected: &'static str,
        actual: LoadState,
    },

    /// Dictionary model has no usable word data for the language
    #[error("no dictionary data for language {0:?}")]
    EmptyModel(String),
}

/// Result type for dictionary operations
pub type DictResult<T> = std::result::Result<T, DictError>;
