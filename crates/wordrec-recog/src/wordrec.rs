//! WordRecognizer - the two-pass recognition controller
//!
//! Owns the classifier and dictionary for one recognition session and
//! sequences the per-word pipeline: segmentation proposes blobs, each blob
//! is normalized and classified, candidate word strings are scored against
//! the dictionary, and the best consistent result is finalized.
//!
//! Session lifecycle: construct (loads classifier and dictionary), switch
//! pass configuration as needed, recognize words, then `end_session`
//! exactly once. Teardown consumes the recognizer, so a second teardown is
//! unrepresentable.

use wordrec_core::Blob;
use wordrec_dict::{DawgCache, DictModel, DictSession, PermuterKind};

use crate::choices::{ChoiceList, WordChoice};
use crate::classify::{Classifier, ClassifierModel, TemplateClassifier};
use crate::error::{RecogError, RecogResult};
use crate::normalize::normalize_for_classify;
use crate::options::RecogOptions;
use crate::passes::{Pass, PassConfig};
use crate::result::WordResult;
use crate::segment::{ProjectionSegmenter, Segmenter, WordRegion};

/// Cap on partial word strings kept while assembling candidates
const MAX_BEAM_PARTIALS: usize = 64;

/// Score bonus for a word the dictionary recognizes, by permuter strength
fn dict_bonus(permuter: PermuterKind) -> f32 {
    match permuter {
        PermuterKind::NotFound => 0.0,
        PermuterKind::Number | PermuterKind::Compound => 2.0,
        PermuterKind::UserDawg | PermuterKind::SystemDawg | PermuterKind::FreqDawg => 5.0,
    }
}

/// One recognition session: classifier, dictionary, and pass state
pub struct WordRecognizer {
    classifier: Box<dyn Classifier>,
    segmenter: Box<dyn Segmenter>,
    dict: Option<DictSession>,
    pass_config: PassConfig,
    /// Split-confidence baseline captured at init, restored by `set_pass2`
    pass2_ok_split: f32,
    options: RecogOptions,
}

impl WordRecognizer {
    /// Initialize a session with the template classifier and the built-in
    /// projection segmenter
    ///
    /// Loads the classifier model and, when `dict_model` is supplied, runs
    /// the full dictionary load protocol against the process-wide cache.
    ///
    /// # Errors
    ///
    /// Fails if the classifier model is malformed or the dictionary load
    /// protocol fails; no partial session escapes.
    pub fn new(
        options: RecogOptions,
        model: ClassifierModel,
        dict_model: Option<(&str, &DictModel)>,
    ) -> RecogResult<Self> {
        let classifier = TemplateClassifier::new(model)?.with_max_choices(options.max_choices);
        Self::with_parts(
            options,
            Box::new(classifier),
            Box::new(ProjectionSegmenter::new()),
            dict_model,
            None,
        )
    }

    /// Initialize a session from explicit capability implementations
    ///
    /// The classifier and segmenter are chosen by the caller, which is how
    /// a minimal stand-in classifier or a custom chopper is selected at
    /// configuration time. `cache` overrides the process-wide dawg cache;
    /// pass `None` for the default.
    pub fn with_parts(
        options: RecogOptions,
        classifier: Box<dyn Classifier>,
        segmenter: Box<dyn Segmenter>,
        dict_model: Option<(&str, &DictModel)>,
        cache: Option<&DawgCache>,
    ) -> RecogResult<Self> {
        options.validate()?;
        let dict = match dict_model {
            Some((lang, model)) => {
                let mut session = DictSession::new();
                session.setup_for_load(match cache {
                    Some(cache) => cache,
                    None => DawgCache::global(),
                })?;
                session.load(lang, model)?;
                session.finish_load()?;
                Some(session)
            }
            None => None,
        };
        tracing::debug!(
            image_base = options.image_base.as_deref().unwrap_or(""),
            dict = dict.is_some(),
            "recognition session initialized"
        );
        Ok(Self {
            classifier,
            segmenter,
            dict,
            pass_config: PassConfig::pass1(),
            pass2_ok_split: options.ok_split,
            options,
        })
    }

    /// End the session, releasing classifier and dictionary state
    ///
    /// Consumes the recognizer: teardown happens exactly once after a
    /// successful init, and a second call does not typecheck.
    pub fn end_session(mut self) -> RecogResult<()> {
        self.classifier.shutdown();
        if let Some(dict) = self.dict.as_mut() {
            dict.end()?;
        }
        tracing::debug!("recognition session ended");
        Ok(())
    }

    /// Switch to pass-1 configuration (fixed lenient split threshold)
    pub fn set_pass1(&mut self) {
        self.pass_config = PassConfig::pass1();
        tracing::debug!(ok_split = self.pass_config.ok_split, "pass 1 configured");
    }

    /// Switch to pass-2 configuration (baseline captured at init)
    pub fn set_pass2(&mut self) {
        self.pass_config = PassConfig::pass2(self.pass2_ok_split);
        tracing::debug!(ok_split = self.pass_config.ok_split, "pass 2 configured");
    }

    /// Active pass
    pub fn pass(&self) -> Pass {
        self.pass_config.pass
    }

    /// Active acceptable-split-confidence threshold
    pub fn ok_split(&self) -> f32 {
        self.pass_config.ok_split
    }

    /// The dictionary session, if one was loaded
    pub fn dict_session(&self) -> Option<&DictSession> {
        self.dict.as_ref()
    }

    /// Recognize one word region under the active pass configuration
    ///
    /// # Errors
    ///
    /// Fails with [`RecogError::NoSegmentation`] if the segmenter proposes
    /// no blobs, and with [`RecogError::EmptyChoices`] if any character
    /// slot ends up without candidates. The latter marks a broken
    /// collaborator; a result violating the all-slots-valid invariant is
    /// never returned.
    pub fn recognize_word(&mut self, region: &WordRegion) -> RecogResult<WordResult> {
        if let Some(dict) = self.dict.as_mut() {
            dict.reset_hyphen_vars(region.end_of_line);
        }

        let blobs = self
            .segmenter
            .propose_splits(region, self.pass_config.ok_split)?;
        if blobs.is_empty() {
            return Err(RecogError::NoSegmentation);
        }

        let mut result = WordResult::new(blobs.iter().map(Blob::bounds).collect());
        let mut slot_choices = Vec::with_capacity(blobs.len());
        for blob in &blobs {
            slot_choices.push(self.call_matcher(blob)?);
        }
        result.set_choices(slot_choices)?;

        if let Some(slot) = result.first_empty_slot() {
            tracing::error!(slot, "classifier returned no candidates for slot");
            return Err(RecogError::EmptyChoices { slot });
        }

        let best = self.choose_best_word(result.choices());
        if region.end_of_line {
            if let Some(dict) = self.dict.as_mut() {
                dict.set_hyphen_word(&best.text);
            }
        }

        // Fold confidently matched blobs back into the classifier
        if best.permuter.is_found() && best.score >= self.options.adapt_threshold {
            for (blob, list) in blobs.iter().zip(result.choices().to_vec()) {
                if let Some(top) = list.best() {
                    if top.confidence >= self.options.adapt_threshold {
                        self.classifier.learn(blob, &top.label);
                    }
                }
            }
        }

        result.set_best(best)?;
        self.debug_word_choices(&result);
        result.finalize()?;
        Ok(result)
    }

    /// Recognize a sequence of word regions with the two-pass schedule
    ///
    /// Pass 1 runs over every region; regions whose best score falls below
    /// `accept_score` are re-recognized under pass 2, keeping whichever
    /// result scores higher.
    pub fn recognize_two_pass(
        &mut self,
        regions: &[WordRegion],
        accept_score: f32,
    ) -> RecogResult<Vec<WordResult>> {
        self.set_pass1();
        let mut results = Vec::with_capacity(regions.len());
        for region in regions {
            results.push(self.recognize_word(region)?);
        }

        self.set_pass2();
        for (region, result) in regions.iter().zip(results.iter_mut()) {
            let score = result.best().map_or(0.0, |b| b.score);
            if score >= accept_score {
                continue;
            }
            let rerun = self.recognize_word(region)?;
            let rerun_score = rerun.best().map_or(0.0, |b| b.score);
            if rerun_score > score {
                *result = rerun;
            }
        }
        Ok(results)
    }

    /// Classify one blob, normalizing orientation first
    ///
    /// The returned ratings describe the original blob even when matching
    /// ran on a rotated transient copy; the copy is dropped before this
    /// returns.
    pub fn call_matcher(&self, blob: &Blob) -> RecogResult<ChoiceList> {
        let normalized = normalize_for_classify(blob, self.classifier.training_orientation())?;
        Ok(self.classifier.classify(normalized.as_blob()))
    }

    /// Test how the dictionary recognizes `word`
    ///
    /// Returns [`PermuterKind::NotFound`] when no dictionary is attached or
    /// the word is absent; absence is a valid outcome, never an error.
    pub fn dict_word(&self, word: &str) -> PermuterKind {
        match &self.dict {
            Some(dict) => dict.valid_word(word),
            None => PermuterKind::NotFound,
        }
    }

    /// Assemble candidate strings from per-slot choices and pick the best
    /// against the dictionary
    fn choose_best_word(&self, choices: &[ChoiceList]) -> WordChoice {
        let beam = self.options.beam_width;
        let mut partials: Vec<(String, f32)> = vec![(String::new(), 0.0)];
        for list in choices {
            let mut next = Vec::with_capacity(partials.len() * beam);
            for (text, sum) in &partials {
                for choice in list.top(beam) {
                    next.push((format!("{}{}", text, choice.label), sum + choice.confidence));
                }
            }
            next.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
            next.truncate(MAX_BEAM_PARTIALS);
            partials = next;
        }

        let slots = choices.len().max(1) as f32;
        let mut best: Option<WordChoice> = None;
        for (text, sum) in partials {
            // A pending hyphenated prefix takes part in validity testing
            // but not in the returned text.
            let lookup = match &self.dict {
                Some(dict) => dict.apply_hyphen(&text),
                None => text.clone(),
            };
            let permuter = self.dict_word(&lookup);
            let score = (sum / slots + dict_bonus(permuter)).min(100.0);
            let better = match &best {
                None => true,
                Some(current) => {
                    score > current.score
                        || (score == current.score && permuter > current.permuter)
                }
            };
            if better {
                best = Some(WordChoice::new(text, score, permuter));
            }
        }
        best.unwrap_or_else(|| WordChoice::new("", 0.0, PermuterKind::NotFound))
    }

    /// Dump the word's choices when debugging asks for it
    fn debug_word_choices(&self, result: &WordResult) {
        if self.options.debug_level == 0 {
            return;
        }
        let Some(best) = result.best() else {
            return;
        };
        if let Some(filter) = &self.options.word_to_debug {
            if &best.text != filter {
                return;
            }
        }
        tracing::debug!(
            image_base = self.options.image_base.as_deref().unwrap_or(""),
            best = %best,
            slots = result.slots(),
            "word choices"
        );
        for (slot, list) in result.choices().iter().enumerate() {
            let summary: Vec<String> = list
                .iter()
                .map(|c| format!("{}:{:.1}", c.label, c.confidence))
                .collect();
            tracing::debug!(slot, choices = summary.join(" "), "slot choices");
        }
    }
}
