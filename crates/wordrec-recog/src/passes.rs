//! Pass configuration
//!
//! Recognition runs in two passes under different thresholds. The active
//! configuration is an explicit value carried by the session and swapped
//! atomically by the pass-switch operations; there is no module-level
//! mutable state.

/// Which recognition pass is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// First, lenient pass over every word
    Pass1,
    /// Second pass re-recognizing words that scored poorly under pass 1
    Pass2,
}

/// Fixed lenient acceptable-split-confidence used by pass 1
pub const PASS1_OK_SPLIT: f32 = 70.0;

/// Thresholds gating scoring decisions for the active pass
///
/// Read by both the segmentation path and the dictionary scoring path, so
/// a switch applies to everything downstream at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassConfig {
    /// Active pass indicator
    pub pass: Pass,
    /// Acceptable-split-confidence threshold (0-100)
    pub ok_split: f32,
}

impl PassConfig {
    /// Pass-1 configuration with the fixed lenient split threshold
    pub fn pass1() -> Self {
        Self {
            pass: Pass::Pass1,
            ok_split: PASS1_OK_SPLIT,
        }
    }

    /// Pass-2 configuration restoring the given baseline threshold
    pub fn pass2(ok_split_baseline: f32) -> Self {
        Self {
            pass: Pass::Pass2,
            ok_split: ok_split_baseline,
        }
    }
}
