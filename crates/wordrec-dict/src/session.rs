//! DictSession - lifetime of one loaded dictionary
//!
//! Loading follows a strict three-step protocol: `setup_for_load` binds the
//! session to a cache, `load` populates the language word sets, and
//! `finish_load` commits them and makes the session queryable. The steps
//! are tracked by an explicit state machine and out-of-order calls are
//! rejected at the interface instead of producing undefined behavior.

use std::sync::Arc;

use crate::cache::{DawgCache, LoadedDawgs};
use crate::error::{DictError, DictResult};
use crate::model::DictModel;
use crate::permuter::PermuterKind;

/// Load-protocol state of a dictionary session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Fresh session, no cache bound
    Unloaded,
    /// Cache bound, ready to load word lists
    SetupDone,
    /// Word lists populated, not yet committed
    Loaded,
    /// Committed and queryable
    Finished,
    /// Resources released, no further operations allowed
    Ended,
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LoadState::Unloaded => "Unloaded",
            LoadState::SetupDone => "SetupDone",
            LoadState::Loaded => "Loaded",
            LoadState::Finished => "Finished",
            LoadState::Ended => "Ended",
        };
        write!(f, "{}", name)
    }
}

/// One loaded dictionary and its hyphen-continuation state
#[derive(Debug, Default)]
pub struct DictSession {
    state: Option<SessionState>,
    /// Pending prefix of a hyphenated word broken at end of line
    hyphen_prefix: Option<String>,
    /// End-of-line flag of the previously recognized word
    prev_end_of_line: bool,
}

#[derive(Debug)]
enum SessionState {
    SetupDone { cache: DawgCache },
    Loaded { lang: String, dawgs: Arc<LoadedDawgs> },
    Finished { lang: String, dawgs: Arc<LoadedDawgs> },
    Ended,
}

impl DictSession {
    /// Create an unloaded session
    pub fn new() -> Self {
        Self::default()
    }

    /// Current load-protocol state
    pub fn state(&self) -> LoadState {
        match &self.state {
            None => LoadState::Unloaded,
            Some(SessionState::SetupDone { .. }) => LoadState::SetupDone,
            Some(SessionState::Loaded { .. }) => LoadState::Loaded,
            Some(SessionState::Finished { .. }) => LoadState::Finished,
            Some(SessionState::Ended) => LoadState::Ended,
        }
    }

    /// Language id, once a load has happened
    pub fn lang(&self) -> Option<&str> {
        match &self.state {
            Some(SessionState::Loaded { lang, .. }) | Some(SessionState::Finished { lang, .. }) => {
                Some(lang)
            }
            _ => None,
        }
    }

    /// Bind the session to a word-set cache
    ///
    /// Must be the first protocol call on a fresh session.
    pub fn setup_for_load(&mut self, cache: &DawgCache) -> DictResult<()> {
        if self.state.is_some() {
            return Err(DictError::OutOfOrder {
                expected: "Unloaded",
                actual: self.state(),
            });
        }
        self.state = Some(SessionState::SetupDone { cache: cache.clone() });
        Ok(())
    }

    /// Populate the word sets for `lang` from `model`
    ///
    /// Consults the bound cache first; on a miss the sets are built from
    /// the model and cached for other sessions.
    pub fn load(&mut self, lang: &str, model: &DictModel) -> DictResult<()> {
        let cache = match &self.state {
            Some(SessionState::SetupDone { cache }) => cache.clone(),
            _ => {
                return Err(DictError::OutOfOrder {
                    expected: "SetupDone",
                    actual: self.state(),
                });
            }
        };
        if model.word_count() == 0 {
            return Err(DictError::EmptyModel(lang.to_string()));
        }
        let dawgs = cache.get_or_load(lang, model);
        self.state = Some(SessionState::Loaded {
            lang: lang.to_string(),
            dawgs,
        });
        Ok(())
    }

    /// Commit the load and make the session queryable
    pub fn finish_load(&mut self) -> DictResult<()> {
        match self.state.take() {
            Some(SessionState::Loaded { lang, dawgs }) => {
                tracing::debug!(lang = %lang, words = dawgs.word_count(), "dictionary loaded");
                self.state = Some(SessionState::Finished { lang, dawgs });
                Ok(())
            }
            other => {
                self.state = other;
                Err(DictError::OutOfOrder {
                    expected: "Loaded",
                    actual: self.state(),
                })
            }
        }
    }

    /// Release dictionary resources
    ///
    /// Must be the last dictionary operation in a session.
    pub fn end(&mut self) -> DictResult<()> {
        match self.state.take() {
            Some(SessionState::Finished { .. }) => {
                self.state = Some(SessionState::Ended);
                self.hyphen_prefix = None;
                self.prev_end_of_line = false;
                Ok(())
            }
            other => {
                self.state = other;
                Err(DictError::OutOfOrder {
                    expected: "Finished",
                    actual: self.state(),
                })
            }
        }
    }

    /// Classify how the dictionary recognizes `word`
    ///
    /// Pure query, callable any number of times after `finish_load`.
    /// Returns `PermuterKind::NotFound` for an unknown word; absence is a
    /// valid outcome, never an error. Querying a session that is not in the
    /// `Finished` state also reports `NotFound`, with a warning.
    pub fn valid_word(&self, word: &str) -> PermuterKind {
        let dawgs = match &self.state {
            Some(SessionState::Finished { dawgs, .. }) => dawgs,
            _ => {
                tracing::warn!(state = %self.state(), "valid_word on unqueryable session");
                return PermuterKind::NotFound;
            }
        };
        Self::classify(dawgs, word)
    }

    fn classify(dawgs: &LoadedDawgs, word: &str) -> PermuterKind {
        if word.is_empty() {
            return PermuterKind::NotFound;
        }
        if dawgs.freq.contains(word) {
            return PermuterKind::FreqDawg;
        }
        if dawgs.user.contains(word) {
            return PermuterKind::UserDawg;
        }
        if dawgs.system.contains(word) {
            return PermuterKind::SystemDawg;
        }
        if Self::is_compound(dawgs, word) {
            return PermuterKind::Compound;
        }
        if Self::is_number(word) {
            return PermuterKind::Number;
        }
        PermuterKind::NotFound
    }

    /// Compound words are joined with '-' or '/'; every part must itself
    /// be a plain dictionary word.
    fn is_compound(dawgs: &LoadedDawgs, word: &str) -> bool {
        if !word.contains(['-', '/']) {
            return false;
        }
        let mut parts = 0;
        for part in word.split(['-', '/']) {
            if part.is_empty() {
                return false;
            }
            if !(dawgs.freq.contains(part)
                || dawgs.user.contains(part)
                || dawgs.system.contains(part))
            {
                return false;
            }
            parts += 1;
        }
        parts >= 2
    }

    /// Digits with optional interior punctuation, at least one digit
    fn is_number(word: &str) -> bool {
        let mut saw_digit = false;
        for c in word.chars() {
            if c.is_ascii_digit() {
                saw_digit = true;
            } else if !matches!(c, '.' | ',' | '-' | '+') {
                return false;
            }
        }
        saw_digit
    }

    // --- Hyphen-continuation state ---

    /// Reset hyphenation state for the next word
    ///
    /// A prefix recorded from a line-final word survives exactly one
    /// transition: into the continuation word at the start of the next
    /// line (previous word line-final, current word not). Any other word
    /// clears it.
    pub fn reset_hyphen_vars(&mut self, last_word_on_line: bool) {
        if !(self.prev_end_of_line && !last_word_on_line) {
            self.hyphen_prefix = None;
        }
        self.prev_end_of_line = last_word_on_line;
    }

    /// Record a line-final word as a hyphenated prefix if it ends with '-'
    pub fn set_hyphen_word(&mut self, word: &str) {
        self.hyphen_prefix = word
            .strip_suffix('-')
            .filter(|p| !p.is_empty())
            .map(str::to_string);
    }

    /// True if a hyphenated prefix is pending
    pub fn has_hyphen(&self) -> bool {
        self.hyphen_prefix.is_some()
    }

    /// Join a pending prefix onto `word` for validity testing
    pub fn apply_hyphen(&self, word: &str) -> String {
        match &self.hyphen_prefix {
            Some(prefix) => format!("{}{}", prefix, word),
            None => word.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished_session(words: &[&str]) -> DictSession {
        let cache = DawgCache::new();
        let model = DictModel::from_words(words.iter().copied());
        let mut session = DictSession::new();
        session.setup_for_load(&cache).unwrap();
        session.load("eng", &model).unwrap();
        session.finish_load().unwrap();
        session
    }

    #[test]
    fn test_load_protocol_happy_path() {
        let mut session = DictSession::new();
        assert_eq!(session.state(), LoadState::Unloaded);
        session.setup_for_load(&DawgCache::new()).unwrap();
        assert_eq!(session.state(), LoadState::SetupDone);
        session.load("eng", &DictModel::from_words(["cat"])).unwrap();
        assert_eq!(session.state(), LoadState::Loaded);
        assert_eq!(session.lang(), Some("eng"));
        session.finish_load().unwrap();
        assert_eq!(session.state(), LoadState::Finished);
        session.end().unwrap();
        assert_eq!(session.state(), LoadState::Ended);
    }

    #[test]
    fn test_load_protocol_rejects_out_of_order() {
        let mut session = DictSession::new();
        // load before setup
        assert!(matches!(
            session.load("eng", &DictModel::from_words(["cat"])),
            Err(DictError::OutOfOrder { expected: "SetupDone", .. })
        ));
        // finish before load
        assert!(session.finish_load().is_err());
        // end before anything
        assert!(session.end().is_err());

        session.setup_for_load(&DawgCache::new()).unwrap();
        // double setup
        assert!(session.setup_for_load(&DawgCache::new()).is_err());
        // finish straight from SetupDone
        assert!(session.finish_load().is_err());
        assert_eq!(session.state(), LoadState::SetupDone);
    }

    #[test]
    fn test_end_twice_rejected() {
        let mut session = finished_session(&["cat"]);
        session.end().unwrap();
        assert!(matches!(
            session.end(),
            Err(DictError::OutOfOrder { expected: "Finished", .. })
        ));
    }

    #[test]
    fn test_load_empty_model_fails() {
        let mut session = DictSession::new();
        session.setup_for_load(&DawgCache::new()).unwrap();
        assert!(matches!(
            session.load("xx", &DictModel::default()),
            Err(DictError::EmptyModel(_))
        ));
        // Session stays in SetupDone, not half-loaded
        assert_eq!(session.state(), LoadState::SetupDone);
    }

    #[test]
    fn test_valid_word_classification() {
        let cache = DawgCache::new();
        let model = DictModel::from_words(["cat", "dog"])
            .with_user_words(["xyzzy"])
            .with_freq_words(["the"]);
        let mut session = DictSession::new();
        session.setup_for_load(&cache).unwrap();
        session.load("eng", &model).unwrap();
        session.finish_load().unwrap();

        assert_eq!(session.valid_word("the"), PermuterKind::FreqDawg);
        assert_eq!(session.valid_word("xyzzy"), PermuterKind::UserDawg);
        assert_eq!(session.valid_word("cat"), PermuterKind::SystemDawg);
        assert_eq!(session.valid_word("cat-dog"), PermuterKind::Compound);
        assert_eq!(session.valid_word("cat/the"), PermuterKind::Compound);
        assert_eq!(session.valid_word("3.14"), PermuterKind::Number);
        assert_eq!(session.valid_word("-12,000"), PermuterKind::Number);
        assert_eq!(session.valid_word("zzzzqx"), PermuterKind::NotFound);
        assert_eq!(session.valid_word(""), PermuterKind::NotFound);
        // Punctuation-only is not a number
        assert_eq!(session.valid_word("--"), PermuterKind::NotFound);
        // Compound with an unknown part fails
        assert_eq!(session.valid_word("cat-zzz"), PermuterKind::NotFound);
    }

    #[test]
    fn test_valid_word_before_finish_is_not_found() {
        let mut session = DictSession::new();
        session.setup_for_load(&DawgCache::new()).unwrap();
        session.load("eng", &DictModel::from_words(["cat"])).unwrap();
        // Not yet finished: rejected as NotFound, never a panic
        assert_eq!(session.valid_word("cat"), PermuterKind::NotFound);
        session.finish_load().unwrap();
        assert_eq!(session.valid_word("cat"), PermuterKind::SystemDawg);
    }

    #[test]
    fn test_hyphen_state() {
        let mut session = finished_session(&["cat"]);
        assert!(!session.has_hyphen());

        // Line-final word leaves a pending prefix
        session.reset_hyphen_vars(true);
        session.set_hyphen_word("recog-");
        assert!(session.has_hyphen());

        // The continuation word at the start of the next line keeps it
        session.reset_hyphen_vars(false);
        assert!(session.has_hyphen());
        assert_eq!(session.apply_hyphen("nition"), "recognition");

        // ...and the word after the continuation clears it
        session.reset_hyphen_vars(false);
        assert!(!session.has_hyphen());
        assert_eq!(session.apply_hyphen("nition"), "nition");

        // Two consecutive line-final words: the old prefix does not survive
        session.reset_hyphen_vars(true);
        session.set_hyphen_word("re-");
        session.reset_hyphen_vars(true);
        assert!(!session.has_hyphen());
        session.reset_hyphen_vars(false);

        // A word without a trailing hyphen sets no prefix
        session.set_hyphen_word("cat");
        assert!(!session.has_hyphen());
        session.set_hyphen_word("-");
        assert!(!session.has_hyphen());
    }
}
