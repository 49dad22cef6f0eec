//! WordResult - one word recognition outcome
//!
//! A result moves through a fixed state machine while the controller fills
//! it in: `SegmentProposed -> Classified -> DictionaryScored -> Finalized`.
//! `Finalized` is the only valid terminal state and is reachable only when
//! every character slot carries at least one candidate. The mutating
//! methods are crate-internal; a result handed to the caller is immutable.

use wordrec_core::BlobBox;

use crate::choices::{ChoiceList, WordChoice};
use crate::error::{RecogError, RecogResult};

/// Assembly state of a word result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordState {
    /// Segmentation chosen, slots not yet classified
    SegmentProposed,
    /// Every slot classified
    Classified,
    /// Best word chosen against the dictionary
    DictionaryScored,
    /// Complete and consistent; the only valid terminal state
    Finalized,
}

impl WordState {
    fn name(self) -> &'static str {
        match self {
            WordState::SegmentProposed => "SegmentProposed",
            WordState::Classified => "Classified",
            WordState::DictionaryScored => "DictionaryScored",
            WordState::Finalized => "Finalized",
        }
    }
}

/// One word recognition outcome
#[derive(Debug, Clone)]
pub struct WordResult {
    state: WordState,
    segmentation: Vec<BlobBox>,
    choices: Vec<ChoiceList>,
    best: Option<WordChoice>,
}

impl WordResult {
    pub(crate) fn new(segmentation: Vec<BlobBox>) -> Self {
        Self {
            state: WordState::SegmentProposed,
            segmentation,
            choices: Vec::new(),
            best: None,
        }
    }

    fn expect_state(&self, expected: WordState) -> RecogResult<()> {
        if self.state != expected {
            return Err(RecogError::WordState {
                expected: expected.name(),
                actual: self.state.name(),
            });
        }
        Ok(())
    }

    /// Record per-slot classification candidates
    pub(crate) fn set_choices(&mut self, choices: Vec<ChoiceList>) -> RecogResult<()> {
        self.expect_state(WordState::SegmentProposed)?;
        if choices.len() != self.segmentation.len() {
            return Err(RecogError::InvalidParameter(format!(
                "{} choice lists for {} segments",
                choices.len(),
                self.segmentation.len()
            )));
        }
        self.choices = choices;
        self.state = WordState::Classified;
        Ok(())
    }

    /// Record the dictionary-scored best word
    pub(crate) fn set_best(&mut self, best: WordChoice) -> RecogResult<()> {
        self.expect_state(WordState::Classified)?;
        self.best = Some(best);
        self.state = WordState::DictionaryScored;
        Ok(())
    }

    /// Finalize the result
    ///
    /// Verifies the core invariant: every character slot has at least one
    /// candidate. An empty slot marks a broken collaborator and fails here
    /// rather than letting a corrupt result escape.
    pub(crate) fn finalize(&mut self) -> RecogResult<()> {
        self.expect_state(WordState::DictionaryScored)?;
        if let Some(slot) = self.first_empty_slot() {
            return Err(RecogError::EmptyChoices { slot });
        }
        self.state = WordState::Finalized;
        Ok(())
    }

    /// Index of the first slot with no candidates, if any
    pub(crate) fn first_empty_slot(&self) -> Option<usize> {
        self.choices.iter().position(ChoiceList::is_empty)
    }

    /// Current assembly state
    pub fn state(&self) -> WordState {
        self.state
    }

    /// True once the result reached its terminal state
    pub fn is_finalized(&self) -> bool {
        self.state == WordState::Finalized
    }

    /// True if every character slot has at least one candidate
    pub fn states_all_valid(&self) -> bool {
        !self.choices.is_empty() && self.first_empty_slot().is_none()
    }

    /// Number of character slots
    pub fn slots(&self) -> usize {
        self.segmentation.len()
    }

    /// Chosen segmentation, one box per character slot
    pub fn segmentation(&self) -> &[BlobBox] {
        &self.segmentation
    }

    /// Candidate lists, one per character slot
    pub fn choices(&self) -> &[ChoiceList] {
        &self.choices
    }

    /// The best word choice
    ///
    /// Present from `DictionaryScored` onward.
    pub fn best(&self) -> Option<&WordChoice> {
        self.best.as_ref()
    }
}
