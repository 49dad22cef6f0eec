//! Wordrec Recog - two-pass word recognition
//!
//! Given a word-sized image region, this crate produces the best-scoring
//! textual interpretation by combining three capabilities:
//!
//! - a [`Segmenter`] proposing character-boundary splits
//! - a [`Classifier`] scoring each blob against character models
//! - a dictionary session validating candidate word strings
//!
//! The [`WordRecognizer`] sequences them over two passes: pass 1 runs with
//! a lenient split threshold, pass 2 re-recognizes poorly scoring words
//! under the configured baseline.
//!
//! # Example
//!
//! ```
//! use wordrec_core::Blob;
//! use wordrec_dict::DictModel;
//! use wordrec_recog::{ClassifierModel, RecogOptions, WordRecognizer, WordRegion};
//!
//! let glyph = Blob::from_rows(&[".xxx.", "x...x", "x...x", ".xxx."]).unwrap();
//! let mut model = ClassifierModel::new();
//! model.train_labeled(&glyph, "o").unwrap();
//! model.finish_training().unwrap();
//!
//! let dict = DictModel::from_words(["o"]);
//! let mut recog =
//!     WordRecognizer::new(RecogOptions::default(), model, Some(("eng", &dict))).unwrap();
//!
//! let result = recog.recognize_word(&WordRegion::new(glyph)).unwrap();
//! assert_eq!(result.best().unwrap().text, "o");
//!
//! recog.end_session().unwrap();
//! ```

pub mod choices;
pub mod classify;
mod error;
pub mod normalize;
pub mod options;
pub mod passes;
pub mod result;
pub mod segment;
pub mod wordrec;

pub use choices::{BlobChoice, ChoiceList, WordChoice};
pub use classify::{Classifier, ClassifierModel, NullClassifier, TemplateClassifier};
pub use error::{RecogError, RecogResult};
pub use normalize::{NormalizedBlob, normalize_for_classify};
pub use options::RecogOptions;
pub use passes::{PASS1_OK_SPLIT, Pass, PassConfig};
pub use result::{WordResult, WordState};
pub use segment::{ProjectionSegmenter, Segmenter, WordRegion};
pub use wordrec::WordRecognizer;

// Re-export collaborator crates for convenience
pub use wordrec_core;
pub use wordrec_dict;
