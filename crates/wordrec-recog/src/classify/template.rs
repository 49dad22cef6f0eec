//! Template-correlation classifier
//!
//! The legacy-equivalent implementation of the classifier capability:
//! labeled glyph templates are collected per character class, and an
//! unknown blob is scored against every class by centroid-aligned bitmap
//! correlation under a bounded vertical shift. Confidently recognized
//! blobs can be folded back in as adapted templates; those are discarded
//! at session shutdown.

use wordrec_core::{Blob, Orientation};

use crate::choices::{BlobChoice, ChoiceList};
use crate::classify::Classifier;
use crate::error::{RecogError, RecogResult};

/// Default maximum vertical shift tried during matching
const DEFAULT_MAX_Y_SHIFT: i32 = 1;

/// Default cap on candidates returned per blob
const DEFAULT_MAX_CHOICES: usize = 10;

/// One stored glyph with its precomputed match data
#[derive(Debug, Clone)]
struct TemplateEntry {
    blob: Blob,
    centroid: (f32, f32),
    area: u64,
}

impl TemplateEntry {
    fn from_blob(blob: &Blob) -> RecogResult<Self> {
        let centroid = blob.centroid()?;
        Ok(Self {
            blob: blob.clone(),
            centroid,
            area: blob.fg_count(),
        })
    }
}

/// Templates for one character class
#[derive(Debug, Clone)]
struct ClassTemplates {
    label: String,
    templates: Vec<TemplateEntry>,
}

/// Trained character models for a [`TemplateClassifier`]
///
/// Built by feeding labeled glyph images to `train_labeled` and committing
/// with `finish_training`. A model that has not finished training is
/// malformed as far as session init is concerned.
#[derive(Debug, Clone, Default)]
pub struct ClassifierModel {
    classes: Vec<ClassTemplates>,
    orientation: Orientation,
    train_done: bool,
    num_samples: usize,
}

impl ClassifierModel {
    /// Create an empty model ready for training
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the orientation the glyph templates are drawn in
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Add a labeled glyph sample
    ///
    /// # Errors
    ///
    /// Fails if training has been committed, the label is empty, or the
    /// glyph has no foreground pixels.
    pub fn train_labeled(&mut self, blob: &Blob, label: &str) -> RecogResult<()> {
        if self.train_done {
            return Err(RecogError::InvalidParameter(
                "training has already been completed".to_string(),
            ));
        }
        if label.is_empty() {
            return Err(RecogError::InvalidParameter(
                "label cannot be empty".to_string(),
            ));
        }
        let entry = TemplateEntry::from_blob(blob)?;
        match self.classes.iter_mut().find(|c| c.label == label) {
            Some(class) => class.templates.push(entry),
            None => self.classes.push(ClassTemplates {
                label: label.to_string(),
                templates: vec![entry],
            }),
        }
        self.num_samples += 1;
        Ok(())
    }

    /// Commit training
    ///
    /// # Errors
    ///
    /// Fails if no samples were added.
    pub fn finish_training(&mut self) -> RecogResult<()> {
        if self.classes.is_empty() {
            return Err(RecogError::InvalidParameter(
                "cannot finish training with no samples".to_string(),
            ));
        }
        self.train_done = true;
        Ok(())
    }

    /// Number of character classes
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Total number of training samples
    pub fn sample_count(&self) -> usize {
        self.num_samples
    }
}

/// Template-correlation implementation of the classifier capability
#[derive(Debug)]
pub struct TemplateClassifier {
    model: ClassifierModel,
    /// Adapted templates per class, discarded at shutdown
    adapted: Vec<Vec<TemplateEntry>>,
    max_y_shift: i32,
    max_choices: usize,
}

impl TemplateClassifier {
    /// Create a classifier from a trained model
    ///
    /// # Errors
    ///
    /// Fails with [`RecogError::ClassifierInit`] if the model is malformed:
    /// training unfinished or no character classes.
    pub fn new(model: ClassifierModel) -> RecogResult<Self> {
        if !model.train_done {
            return Err(RecogError::ClassifierInit(
                "model training is not finished".to_string(),
            ));
        }
        if model.classes.is_empty() {
            return Err(RecogError::ClassifierInit(
                "model has no character classes".to_string(),
            ));
        }
        let adapted = vec![Vec::new(); model.classes.len()];
        Ok(Self {
            model,
            adapted,
            max_y_shift: DEFAULT_MAX_Y_SHIFT,
            max_choices: DEFAULT_MAX_CHOICES,
        })
    }

    /// Set the maximum vertical shift tried during matching
    pub fn with_max_y_shift(mut self, max_y_shift: i32) -> Self {
        self.max_y_shift = max_y_shift.clamp(0, 2);
        self
    }

    /// Set the candidate cap per blob
    pub fn with_max_choices(mut self, max_choices: usize) -> Self {
        self.max_choices = max_choices.max(1);
        self
    }

    /// Number of adapted templates currently held
    pub fn adapted_count(&self) -> usize {
        self.adapted.iter().map(Vec::len).sum()
    }

    /// Best correlation of `blob` against one class
    fn class_score(&self, index: usize, blob: &Blob, centroid: (f32, f32), area: u64) -> f32 {
        let base = &self.model.classes[index].templates;
        let adapted = &self.adapted[index];
        base.iter()
            .chain(adapted.iter())
            .map(|t| correlation(blob, centroid, area, t, self.max_y_shift))
            .fold(0.0f32, f32::max)
    }
}

impl Classifier for TemplateClassifier {
    fn training_orientation(&self) -> Orientation {
        self.model.orientation
    }

    fn classify(&self, blob: &Blob) -> ChoiceList {
        let mut ratings = ChoiceList::with_capacity(self.max_choices);
        let Ok(centroid) = blob.centroid() else {
            // Blob with no foreground: nothing can match
            return ratings;
        };
        let area = blob.fg_count();
        for (index, class) in self.model.classes.iter().enumerate() {
            let score = self.class_score(index, blob, centroid, area);
            if score > 0.0 {
                ratings.push(BlobChoice::new(class.label.clone(), 100.0 * score));
            }
        }
        ratings
    }

    fn learn(&mut self, blob: &Blob, label: &str) {
        let Some(index) = self.model.classes.iter().position(|c| c.label == label) else {
            tracing::debug!(label, "learn skipped: unknown class label");
            return;
        };
        match TemplateEntry::from_blob(blob) {
            Ok(entry) => {
                self.adapted[index].push(entry);
                tracing::debug!(label, "adapted template added");
            }
            Err(err) => {
                tracing::debug!(label, %err, "learn skipped");
            }
        }
    }

    fn shutdown(&mut self) {
        let discarded = self.adapted_count();
        for class in &mut self.adapted {
            class.clear();
        }
        tracing::debug!(discarded, "adaptive classifier state released");
    }
}

/// Centroid-aligned Dice correlation between a blob and a template
///
/// The template is placed so the centroids coincide (rounded to whole
/// pixels), then shifted vertically by up to `max_y_shift` in each
/// direction; the best overlap wins. Score is `2*AND / (|blob| + |templ|)`,
/// 1.0 for identical bitmaps.
fn correlation(
    blob: &Blob,
    blob_centroid: (f32, f32),
    blob_area: u64,
    template: &TemplateEntry,
    max_y_shift: i32,
) -> f32 {
    if blob_area == 0 || template.area == 0 {
        return 0.0;
    }
    let dx = (blob_centroid.0 - template.centroid.0).round() as i32;
    let dy0 = (blob_centroid.1 - template.centroid.1).round() as i32;
    let denom = (blob_area + template.area) as f32;

    let mut best = 0.0f32;
    for shift in -max_y_shift..=max_y_shift {
        let dy = dy0 + shift;
        let mut and_count = 0u64;
        for ty in 0..template.blob.height() {
            let by = ty as i32 + dy;
            if by < 0 || by >= blob.height() as i32 {
                continue;
            }
            for tx in 0..template.blob.width() {
                let bx = tx as i32 + dx;
                if bx < 0 || bx >= blob.width() as i32 {
                    continue;
                }
                if template.blob.get_pixel(tx, ty).unwrap_or(false)
                    && blob.get_pixel(bx as u32, by as u32).unwrap_or(false)
                {
                    and_count += 1;
                }
            }
        }
        best = best.max(2.0 * and_count as f32 / denom);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph_o() -> Blob {
        Blob::from_rows(&[".xxx.", "x...x", "x...x", "x...x", ".xxx."]).unwrap()
    }

    fn glyph_l() -> Blob {
        Blob::from_rows(&["x....", "x....", "x....", "x....", "xxxxx"]).unwrap()
    }

    fn trained_model() -> ClassifierModel {
        let mut model = ClassifierModel::new();
        model.train_labeled(&glyph_o(), "o").unwrap();
        model.train_labeled(&glyph_l(), "l").unwrap();
        model.finish_training().unwrap();
        model
    }

    #[test]
    fn test_train_labeled_groups_by_label() {
        let mut model = ClassifierModel::new();
        model.train_labeled(&glyph_o(), "o").unwrap();
        model.train_labeled(&glyph_o(), "o").unwrap();
        model.train_labeled(&glyph_l(), "l").unwrap();
        assert_eq!(model.class_count(), 2);
        assert_eq!(model.sample_count(), 3);
    }

    #[test]
    fn test_train_rejects_bad_input() {
        let mut model = ClassifierModel::new();
        assert!(model.train_labeled(&glyph_o(), "").is_err());
        let empty = Blob::from_rows(&["...", "..."]).unwrap();
        assert!(model.train_labeled(&empty, "o").is_err());
        model.train_labeled(&glyph_o(), "o").unwrap();
        model.finish_training().unwrap();
        assert!(model.train_labeled(&glyph_l(), "l").is_err());
    }

    #[test]
    fn test_init_rejects_malformed_model() {
        // Training never finished
        let mut unfinished = ClassifierModel::new();
        unfinished.train_labeled(&glyph_o(), "o").unwrap();
        assert!(matches!(
            TemplateClassifier::new(unfinished),
            Err(RecogError::ClassifierInit(_))
        ));
        // No samples at all
        assert!(ClassifierModel::new().finish_training().is_err());
    }

    #[test]
    fn test_classify_exact_glyph() {
        let classifier = TemplateClassifier::new(trained_model()).unwrap();
        let ratings = classifier.classify(&glyph_o());
        let best = ratings.best().unwrap();
        assert_eq!(best.label, "o");
        assert_eq!(best.confidence, 100.0);
        // The wrong class scores strictly lower
        for choice in ratings.iter().skip(1) {
            assert!(choice.confidence < 100.0);
        }
    }

    #[test]
    fn test_classify_tolerates_vertical_shift() {
        let classifier = TemplateClassifier::new(trained_model()).unwrap();
        // Same glyph with a blank row added top and bottom asymmetrically;
        // centroid alignment plus max_y_shift must still find the match.
        let shifted =
            Blob::from_rows(&[".....", ".xxx.", "x...x", "x...x", "x...x", ".xxx."]).unwrap();
        let ratings = classifier.classify(&shifted);
        assert_eq!(ratings.best().unwrap().label, "o");
        assert!(ratings.best().unwrap().confidence > 90.0);
    }

    #[test]
    fn test_classify_empty_blob_has_no_candidates() {
        let classifier = TemplateClassifier::new(trained_model()).unwrap();
        let empty = Blob::from_rows(&["...", "..."]).unwrap();
        assert!(classifier.classify(&empty).is_empty());
    }

    #[test]
    fn test_learn_and_shutdown() {
        let mut classifier = TemplateClassifier::new(trained_model()).unwrap();
        assert_eq!(classifier.adapted_count(), 0);
        classifier.learn(&glyph_o(), "o");
        assert_eq!(classifier.adapted_count(), 1);
        // Unknown labels are ignored
        classifier.learn(&glyph_o(), "q");
        assert_eq!(classifier.adapted_count(), 1);
        classifier.shutdown();
        assert_eq!(classifier.adapted_count(), 0);
    }
}
