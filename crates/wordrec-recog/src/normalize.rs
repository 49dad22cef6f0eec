//! Blob orientation normalization for classification
//!
//! The classifier is trained on glyphs in one orientation. A blob cut from
//! rotated text must be brought to that orientation before matching, but a
//! blob that already matches should be used as-is with no copy. The
//! borrowed/owned distinction is carried in the return type, so the caller
//! can never leak or double-release the transient rotated copy.

use wordrec_core::{Blob, Orientation};

use crate::error::RecogResult;

/// A blob ready for classification: either the input itself or a rotated
/// transient copy
#[derive(Debug)]
pub enum NormalizedBlob<'a> {
    /// Input already matched the training orientation; no allocation
    Borrowed(&'a Blob),
    /// Rotated copy owned by this value, dropped with it
    Rotated(Blob),
}

impl NormalizedBlob<'_> {
    /// The blob to hand to the classifier
    pub fn as_blob(&self) -> &Blob {
        match self {
            NormalizedBlob::Borrowed(blob) => blob,
            NormalizedBlob::Rotated(blob) => blob,
        }
    }

    /// True if a rotated copy was produced
    pub fn is_rotated(&self) -> bool {
        matches!(self, NormalizedBlob::Rotated(_))
    }
}

/// Bring a blob to the classifier's training orientation if needed
///
/// Returns `Borrowed` when the blob's recorded orientation already matches
/// `training`, otherwise a `Rotated` copy turned by the required number of
/// clockwise quarter turns.
pub fn normalize_for_classify<'a>(
    blob: &'a Blob,
    training: Orientation,
) -> RecogResult<NormalizedBlob<'a>> {
    let turns = blob.orientation().cw_quarter_turns_to(training);
    if turns == 0 {
        return Ok(NormalizedBlob::Borrowed(blob));
    }
    Ok(NormalizedBlob::Rotated(blob.rotate_orth(turns)?))
}
