//! Segmentation capability
//!
//! The controller asks a [`Segmenter`] to split a word region into
//! candidate character blobs. The acceptable-split-confidence threshold is
//! passed on every call so the same segmenter serves both passes: pass 1
//! runs lenient, pass 2 runs with the configured baseline.

use wordrec_core::Blob;

use crate::error::RecogResult;

/// A word-sized region handed to recognition
#[derive(Debug, Clone)]
pub struct WordRegion {
    /// The word's image content
    pub blob: Blob,
    /// True if the word sits at the end of its text line; affects
    /// hyphenation-continuation handling
    pub end_of_line: bool,
}

impl WordRegion {
    /// Create a region that is not at end of line
    pub fn new(blob: Blob) -> Self {
        Self {
            blob,
            end_of_line: false,
        }
    }

    /// Set the end-of-line flag
    pub fn with_end_of_line(mut self, end_of_line: bool) -> Self {
        self.end_of_line = end_of_line;
        self
    }
}

/// Word segmentation capability
pub trait Segmenter {
    /// Propose character-boundary splits for a word region
    ///
    /// `ok_split` is the acceptable-split-confidence threshold (0-100): a
    /// proposed boundary with at least this confidence is trusted without
    /// further refinement. An empty result means the region contains
    /// nothing segmentable.
    fn propose_splits(&self, region: &WordRegion, ok_split: f32) -> RecogResult<Vec<Blob>>;
}

/// Column-projection segmenter
///
/// Splits at vertical whitespace gaps (confidence 100), then chops
/// remaining pieces at shallow projection minima whose confidence clears
/// the `ok_split` threshold. The confidence of a candidate boundary at a
/// column carrying `n` foreground pixels is `(1 - n/max) * 100`, where
/// `max` is the region's tallest column.
#[derive(Debug, Clone)]
pub struct ProjectionSegmenter {
    /// Minimum width of each piece produced by a weak-minimum chop
    pub min_split_width: u32,
}

impl Default for ProjectionSegmenter {
    fn default() -> Self {
        Self { min_split_width: 3 }
    }
}

impl ProjectionSegmenter {
    /// Create a segmenter with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum chop piece width
    pub fn with_min_split_width(mut self, width: u32) -> Self {
        self.min_split_width = width.max(1);
        self
    }

    fn chop(
        &self,
        profile: &[u32],
        x0: usize,
        x1: usize,
        max: u32,
        ok_split: f32,
        out: &mut Vec<(usize, usize)>,
    ) {
        let min_w = self.min_split_width as usize;
        if x1 - x0 < 2 * min_w {
            out.push((x0, x1));
            return;
        }
        // Weakest interior column, margins respected
        let Some((split_at, count)) = (x0 + min_w..x1 - min_w + 1)
            .map(|x| (x, profile[x]))
            .min_by_key(|&(_, c)| c)
        else {
            out.push((x0, x1));
            return;
        };
        let confidence = (1.0 - count as f32 / max as f32) * 100.0;
        if confidence >= ok_split {
            self.chop(profile, x0, split_at, max, ok_split, out);
            self.chop(profile, split_at, x1, max, ok_split, out);
        } else {
            out.push((x0, x1));
        }
    }
}

impl Segmenter for ProjectionSegmenter {
    fn propose_splits(&self, region: &WordRegion, ok_split: f32) -> RecogResult<Vec<Blob>> {
        let profile = region.blob.col_profile();
        let max = profile.iter().copied().max().unwrap_or(0);
        if max == 0 {
            return Ok(Vec::new());
        }

        // Runs of non-empty columns are the gap-delimited base segments
        let mut segments: Vec<(usize, usize)> = Vec::new();
        let mut run_start: Option<usize> = None;
        for (x, &count) in profile.iter().enumerate() {
            match (count > 0, run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(start)) => {
                    segments.push((start, x));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            segments.push((start, profile.len()));
        }

        // Chop each base segment at weak minima that clear the threshold
        let mut pieces: Vec<(usize, usize)> = Vec::new();
        for (a, b) in segments {
            self.chop(&profile, a, b, max, ok_split, &mut pieces);
        }

        pieces
            .into_iter()
            .map(|(a, b)| Ok(region.blob.crop_cols(a as u32, b as u32)?))
            .collect()
    }
}
