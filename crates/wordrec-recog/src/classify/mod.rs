//! Classifier capability
//!
//! The controller talks to blob classification through the [`Classifier`]
//! trait so the implementation can be chosen at configuration time:
//! [`TemplateClassifier`] is the full template-correlation matcher, while
//! [`NullClassifier`] is the minimal stand-in for builds that carry no
//! character models.

mod template;

pub use template::{ClassifierModel, TemplateClassifier};

use wordrec_core::{Blob, Orientation};

use crate::choices::ChoiceList;

/// Blob classification capability
///
/// Implementations score a blob against their character models and return
/// an ordered candidate list. `classify` must treat the blob as already
/// normalized to [`Classifier::training_orientation`]; orientation handling
/// belongs to the caller.
pub trait Classifier {
    /// Orientation the character models were trained in
    fn training_orientation(&self) -> Orientation {
        Orientation::Up
    }

    /// Score a normalized blob against the character models
    ///
    /// An empty list means the classifier has no candidates at all for the
    /// blob; the controller treats that as a broken collaborator when it
    /// happens for a required character slot.
    fn classify(&self, blob: &Blob) -> ChoiceList;

    /// Adapt the models from a confidently recognized blob
    fn learn(&mut self, blob: &Blob, label: &str);

    /// Release adaptive-learning state; called once at session end
    fn shutdown(&mut self);
}

/// Stand-in classifier for sessions without character models
///
/// Returns an empty candidate list for every blob, so any attempt to
/// recognize through it fails loudly at the all-slots-valid check instead
/// of fabricating results.
#[derive(Debug, Default)]
pub struct NullClassifier;

impl NullClassifier {
    /// Create a null classifier
    pub fn new() -> Self {
        Self
    }
}

impl Classifier for NullClassifier {
    fn classify(&self, _blob: &Blob) -> ChoiceList {
        ChoiceList::new()
    }

    fn learn(&mut self, _blob: &Blob, _label: &str) {}

    fn shutdown(&mut self) {}
}
