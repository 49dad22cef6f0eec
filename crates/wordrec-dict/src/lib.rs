//! Wordrec Dict - dictionary sessions for word recognition
//!
//! This crate owns the lifetime of loaded word-list data and answers one
//! question for the recognition controller: *how* does the dictionary
//! recognize a given word string?
//!
//! - [`DictModel`]: word-list data for a language
//! - [`DawgCache`]: process-wide cache of loaded word sets
//! - [`DictSession`]: explicit load-protocol state machine and word queries
//! - [`PermuterKind`]: classification of how a word was validated
//!
//! # Example
//!
//! ```
//! use wordrec_dict::{DawgCache, DictModel, DictSession, PermuterKind};
//!
//! let mut session = DictSession::new();
//! session.setup_for_load(&DawgCache::new()).unwrap();
//! session.load("eng", &DictModel::from_words(["cat"])).unwrap();
//! session.finish_load().unwrap();
//!
//! assert_eq!(session.valid_word("cat"), PermuterKind::SystemDawg);
//! assert_eq!(session.valid_word("zzzzqx"), PermuterKind::NotFound);
//!
//! session.end().unwrap();
//! ```

pub mod cache;
pub mod error;
pub mod model;
pub mod permuter;
pub mod session;

pub use cache::{DawgCache, LoadedDawgs};
pub use error::{DictError, DictResult};
pub use model::DictModel;
pub use permuter::PermuterKind;
pub use session::{DictSession, LoadState};
