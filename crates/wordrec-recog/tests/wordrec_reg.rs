//! Word recognition regression tests
//!
//! End-to-end scenarios driving the full pipeline: projection
//! segmentation, template classification, dictionary scoring, and the
//! two-pass schedule, all over synthetic glyph images.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use wordrec_core::{Blob, BlobBox, Orientation};
use wordrec_dict::{DawgCache, DictModel, PermuterKind};
use wordrec_recog::{
    Classifier, ClassifierModel, ChoiceList, ProjectionSegmenter, RecogOptions,
    TemplateClassifier, WordRecognizer, WordRegion, WordState,
};

fn glyph_c() -> Blob {
    Blob::from_rows(&[".xxxx", "x....", "x....", "x....", ".xxxx"]).unwrap()
}

fn glyph_a() -> Blob {
    Blob::from_rows(&["xxxx.", "...x.", ".xxxx", "x..x.", ".xxxx"]).unwrap()
}

fn glyph_t() -> Blob {
    Blob::from_rows(&["xxxxx", "..x..", "..x..", "..x..", "..xx."]).unwrap()
}

fn glyph_x() -> Blob {
    Blob::from_rows(&["x...x", ".x.x.", "..x..", ".x.x.", "x...x"]).unwrap()
}

fn glyph_q() -> Blob {
    Blob::from_rows(&[".xxx.", "x...x", "x...x", ".xxxx", "....x"]).unwrap()
}

fn glyph_z() -> Blob {
    Blob::from_rows(&["xxxxx", "...x.", "..x..", ".x...", "xxxxx"]).unwrap()
}

fn train(glyphs: &[(&Blob, &str)]) -> ClassifierModel {
    let mut model = ClassifierModel::new();
    for (glyph, label) in glyphs {
        model.train_labeled(glyph, label).unwrap();
    }
    model.finish_training().unwrap();
    model
}

/// Join glyphs into one word blob with a single blank column between them
fn word_region(glyphs: &[&Blob]) -> WordRegion {
    let height = glyphs.iter().map(|g| g.height()).max().unwrap();
    let width: u32 = glyphs.iter().map(|g| g.width()).sum::<u32>() + glyphs.len() as u32 - 1;
    let mut blob = Blob::new(BlobBox::new(0, 0, width, height), Orientation::Up).unwrap();
    let mut x0 = 0;
    for glyph in glyphs {
        for y in 0..glyph.height() {
            for x in 0..glyph.width() {
                if glyph.get_pixel(x, y).unwrap() {
                    blob.set_pixel(x0 + x, y, true).unwrap();
                }
            }
        }
        x0 += glyph.width() + 1;
    }
    WordRegion::new(blob)
}

fn recognizer(model: ClassifierModel, lang: &str, words: &[&str]) -> WordRecognizer {
    let cache = DawgCache::new();
    let dict = DictModel::from_words(words.iter().copied());
    WordRecognizer::with_parts(
        RecogOptions::default(),
        Box::new(TemplateClassifier::new(model).unwrap()),
        Box::new(ProjectionSegmenter::new()),
        Some((lang, &dict)),
        Some(&cache),
    )
    .unwrap()
}

#[test]
fn dictionary_word_reg() {
    // Clean three-blob word present in the dictionary
    let model = train(&[(&glyph_c(), "c"), (&glyph_a(), "a"), (&glyph_t(), "t")]);
    let mut recog = recognizer(model, "eng", &["cat", "dog"]);

    let region = word_region(&[&glyph_c(), &glyph_a(), &glyph_t()]);
    let result = recog.recognize_word(&region).unwrap();

    eprintln!("best: {}", result.best().unwrap());
    assert_eq!(result.state(), WordState::Finalized);
    assert!(result.states_all_valid());
    assert_eq!(result.slots(), 3);
    for list in result.choices() {
        assert!(!list.is_empty());
    }

    let best = result.best().unwrap();
    assert_eq!(best.text, "cat");
    assert_eq!(best.permuter, PermuterKind::SystemDawg);
    assert!(best.score > 95.0);

    // Segmentation boxes line up left to right
    let xs: Vec<i32> = result.segmentation().iter().map(|b| b.x).collect();
    assert_eq!(xs, vec![0, 6, 12]);

    recog.end_session().unwrap();
}

#[test]
fn out_of_vocabulary_reg() {
    // Confident classification of a word the dictionary rejects still
    // finalizes; absence shows up only in the permuter classification.
    let model = train(&[(&glyph_x(), "x"), (&glyph_q(), "q"), (&glyph_z(), "z")]);
    let mut recog = recognizer(model, "oov", &["cat"]);

    let region = word_region(&[&glyph_x(), &glyph_q(), &glyph_z()]);
    let result = recog.recognize_word(&region).unwrap();

    eprintln!("best: {}", result.best().unwrap());
    assert_eq!(result.state(), WordState::Finalized);
    assert!(result.states_all_valid());

    let best = result.best().unwrap();
    assert_eq!(best.text, "xqz");
    assert_eq!(best.permuter, PermuterKind::NotFound);
    assert_eq!(recog.dict_word("xqz"), PermuterKind::NotFound);

    recog.end_session().unwrap();
}

#[test]
fn two_pass_rescue_reg() {
    // An 'm' with shallow interior minima: pass 1's lenient threshold
    // oversplits it into junk, pass 2's baseline keeps it whole.
    let glyph_m = Blob::from_rows(&[
        "xxxxxxx",
        "x..x..x",
        "x..x..x",
        "x..x..x",
        "x..x..x",
    ])
    .unwrap();
    let model = train(&[(&glyph_m, "m"), (&glyph_t(), "t")]);
    let mut recog = recognizer(model, "two-pass", &["m"]);

    let region = word_region(&[&glyph_m]);

    // Pass 1 alone chops the glyph
    recog.set_pass1();
    let pass1 = recog.recognize_word(&region).unwrap();
    eprintln!("pass 1: {} slots, best {}", pass1.slots(), pass1.best().unwrap());
    assert!(pass1.slots() > 1);
    let pass1_score = pass1.best().unwrap().score;

    // The two-pass schedule re-recognizes it and keeps the better result
    let results = recog.recognize_two_pass(&[region], 90.0).unwrap();
    let rescued = results[0].best().unwrap();
    eprintln!("two-pass: {}", rescued);
    assert_eq!(results[0].slots(), 1);
    assert_eq!(rescued.text, "m");
    assert_eq!(rescued.permuter, PermuterKind::SystemDawg);
    assert!(rescued.score > pass1_score);

    recog.end_session().unwrap();
}

#[test]
fn noisy_glyph_reg() {
    // A few extra pixels inside the strokes must not change the reading.
    let model = train(&[(&glyph_c(), "c"), (&glyph_a(), "a"), (&glyph_t(), "t")]);
    let mut recog = recognizer(model, "noise", &["cat"]);

    let mut region = word_region(&[&glyph_c(), &glyph_a(), &glyph_t()]);
    let mut rng = StdRng::seed_from_u64(7);
    let profile = region.blob.col_profile();
    let mut added = 0;
    while added < 4 {
        let x = rng.random_range(0..region.blob.width());
        let y = rng.random_range(0..region.blob.height());
        // Keep the gap columns clean so segmentation is undisturbed
        if profile[x as usize] == 0 || region.blob.get_pixel(x, y).unwrap() {
            continue;
        }
        region.blob.set_pixel(x, y, true).unwrap();
        added += 1;
    }

    let result = recog.recognize_word(&region).unwrap();
    eprintln!("noisy best: {}", result.best().unwrap());
    assert_eq!(result.best().unwrap().text, "cat");
    assert_eq!(result.best().unwrap().permuter, PermuterKind::SystemDawg);

    recog.end_session().unwrap();
}

/// Delegating classifier that counts adaptive-learning calls and records
/// whether shutdown ran
struct SpyClassifier {
    inner: TemplateClassifier,
    learned: Arc<AtomicUsize>,
    shut_down: Arc<AtomicBool>,
}

impl Classifier for SpyClassifier {
    fn training_orientation(&self) -> Orientation {
        self.inner.training_orientation()
    }

    fn classify(&self, blob: &Blob) -> ChoiceList {
        self.inner.classify(blob)
    }

    fn learn(&mut self, blob: &Blob, label: &str) {
        self.learned.fetch_add(1, Ordering::SeqCst);
        self.inner.learn(blob, label);
    }

    fn shutdown(&mut self) {
        self.shut_down.store(true, Ordering::SeqCst);
        self.inner.shutdown();
    }
}

#[test]
fn session_lifecycle_reg() {
    // Confident dictionary words feed adaptation; teardown releases the
    // classifier's adaptive state exactly once.
    let learned = Arc::new(AtomicUsize::new(0));
    let shut_down = Arc::new(AtomicBool::new(false));
    let model = train(&[(&glyph_c(), "c"), (&glyph_a(), "a"), (&glyph_t(), "t")]);
    let spy = SpyClassifier {
        inner: TemplateClassifier::new(model).unwrap(),
        learned: learned.clone(),
        shut_down: shut_down.clone(),
    };

    let cache = DawgCache::new();
    let dict = DictModel::from_words(["cat"]);
    let mut recog = WordRecognizer::with_parts(
        RecogOptions::default(),
        Box::new(spy),
        Box::new(ProjectionSegmenter::new()),
        Some(("lifecycle", &dict)),
        Some(&cache),
    )
    .unwrap();

    let region = word_region(&[&glyph_c(), &glyph_a(), &glyph_t()]);
    let result = recog.recognize_word(&region).unwrap();
    assert_eq!(result.best().unwrap().text, "cat");
    // One confidently matched blob per slot was fed back
    assert_eq!(learned.load(Ordering::SeqCst), 3);
    assert!(!shut_down.load(Ordering::SeqCst));

    recog.end_session().unwrap();
    assert!(shut_down.load(Ordering::SeqCst));
}
