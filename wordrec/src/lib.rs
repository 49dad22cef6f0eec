//! Wordrec - word-level text recognition
//!
//! Recognizes a single segmented word image by combining geometric
//! segmentation, template-based character classification, and
//! dictionary-constrained word selection in a two-pass pipeline.
//!
//! # Overview
//!
//! - Blob primitives: bitmaps, bounding boxes, orientation
//! - Dictionary sessions with an explicit load protocol and permuter
//!   classification of word validity
//! - The [`WordRecognizer`] pass controller sequencing segmentation,
//!   classification, and dictionary scoring per word
//!
//! # Example
//!
//! ```
//! use wordrec::{Blob, ClassifierModel, RecogOptions, WordRecognizer, WordRegion};
//! use wordrec::dict::DictModel;
//!
//! let glyph = Blob::from_rows(&["xxx", "x.x", "xxx"]).unwrap();
//! let mut model = ClassifierModel::new();
//! model.train_labeled(&glyph, "o").unwrap();
//! model.finish_training().unwrap();
//!
//! let dict = DictModel::from_words(["o"]);
//! let mut recog =
//!     WordRecognizer::new(RecogOptions::default(), model, Some(("eng", &dict))).unwrap();
//! let result = recog.recognize_word(&WordRegion::new(glyph)).unwrap();
//! assert_eq!(result.best().unwrap().text, "o");
//! recog.end_session().unwrap();
//! ```

// Re-export core types (primary data structures used everywhere)
pub use wordrec_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use wordrec_dict as dict;
pub use wordrec_recog as recog;

// Most-used recognition types at the crate root
pub use wordrec_recog::{
    ClassifierModel, RecogError, RecogOptions, RecogResult, WordRecognizer, WordRegion,
    WordResult,
};
