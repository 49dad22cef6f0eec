//! Session options for word recognition

use crate::error::{RecogError, RecogResult};

/// Tunable parameters for a recognition session
///
/// `ok_split` is the acceptable-split-confidence baseline used by pass 2;
/// pass 1 always runs with the fixed lenient value
/// [`crate::passes::PASS1_OK_SPLIT`]. Confidences are on a 0-100 scale.
#[derive(Debug, Clone)]
pub struct RecogOptions {
    /// Pass-2 acceptable-split-confidence baseline (default: 100.0)
    pub ok_split: f32,

    /// Maximum candidates kept per character slot (default: 10)
    pub max_choices: usize,

    /// Candidates per slot considered when assembling word strings
    /// (default: 3)
    pub beam_width: usize,

    /// Minimum best-word score before the classifier is allowed to adapt
    /// on the word's blobs (default: 90.0)
    pub adapt_threshold: f32,

    /// Debug verbosity; 0 disables the word-choice dump (default: 0)
    pub debug_level: u32,

    /// If set, only words whose best text equals this string are dumped
    pub word_to_debug: Option<String>,

    /// Label for the image this session works on, used in debug output
    pub image_base: Option<String>,
}

impl Default for RecogOptions {
    fn default() -> Self {
        Self {
            ok_split: 100.0,
            max_choices: 10,
            beam_width: 3,
            adapt_threshold: 90.0,
            debug_level: 0,
            word_to_debug: None,
            image_base: None,
        }
    }
}

impl RecogOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pass-2 split-confidence baseline
    pub fn with_ok_split(mut self, ok_split: f32) -> Self {
        self.ok_split = ok_split;
        self
    }

    /// Set the per-slot candidate cap
    pub fn with_max_choices(mut self, max_choices: usize) -> Self {
        self.max_choices = max_choices;
        self
    }

    /// Set the word-assembly beam width
    pub fn with_beam_width(mut self, beam_width: usize) -> Self {
        self.beam_width = beam_width;
        self
    }

    /// Set the adaptive-learning score threshold
    pub fn with_adapt_threshold(mut self, threshold: f32) -> Self {
        self.adapt_threshold = threshold;
        self
    }

    /// Set the debug verbosity
    pub fn with_debug_level(mut self, level: u32) -> Self {
        self.debug_level = level;
        self
    }

    /// Restrict the word-choice dump to one word
    pub fn with_word_to_debug(mut self, word: impl Into<String>) -> Self {
        self.word_to_debug = Some(word.into());
        self
    }

    /// Set the image label used in debug output
    pub fn with_image_base(mut self, base: impl Into<String>) -> Self {
        self.image_base = Some(base.into());
        self
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        if !(0.0..=100.0).contains(&self.ok_split) {
            return Err(RecogError::InvalidParameter(
                "ok_split must be in 0.0..=100.0".to_string(),
            ));
        }
        if self.max_choices == 0 {
            return Err(RecogError::InvalidParameter(
                "max_choices must be at least 1".to_string(),
            ));
        }
        if self.beam_width == 0 {
            return Err(RecogError::InvalidParameter(
                "beam_width must be at least 1".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.adapt_threshold) {
            return Err(RecogError::InvalidParameter(
                "adapt_threshold must be in 0.0..=100.0".to_string(),
            ));
        }
        Ok(())
    }
}
