//! Error types for wordrec-recog

use thiserror::Error;

/// Errors that can occur during recognition
///
/// Dictionary absence is not represented here: a word the dictionary does
/// not know comes back as `PermuterKind::NotFound`, which is a value, not
/// a failure.
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core primitive error
    #[error("core error: {0}")]
    Core(#[from] wordrec_core::Error),

    /// Dictionary load or teardown error
    #[error("dictionary error: {0}")]
    Dict(#[from] wordrec_dict::DictError),

    /// Classifier model failed to load
    #[error("classifier init failed: {0}")]
    ClassifierInit(String),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Segmentation produced no blobs for the word region
    #[error("no viable segmentation for word region")]
    NoSegmentation,

    /// A character slot ended up with no classification candidates
    ///
    /// This marks a broken collaborator, not a recoverable condition; a
    /// result with an empty slot is never returned.
    #[error("empty candidate list for character slot {slot}")]
    EmptyChoices { slot: usize },

    /// Word result state machine driven out of order
    #[error("word result in state {actual}, expected {expected}")]
    WordState {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Result type for recognition operations
pub type RecogResult<T> = std::result::Result<T, RecogError>;
