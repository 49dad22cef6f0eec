//! DawgCache - shared cache of loaded word sets
//!
//! Loading a language builds hash sets from the model's word lists. Since
//! several sessions commonly recognize the same language, the built sets
//! are kept in a process-wide cache keyed by language id and shared between
//! sessions through `Arc`.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, OnceLock};

use crate::model::DictModel;

/// Word sets built from a `DictModel`, read-only after load
#[derive(Debug, Default)]
pub struct LoadedDawgs {
    pub(crate) system: HashSet<String>,
    pub(crate) user: HashSet<String>,
    pub(crate) freq: HashSet<String>,
}

impl LoadedDawgs {
    pub(crate) fn from_model(model: &DictModel) -> Self {
        Self {
            system: model.system_words.iter().cloned().collect(),
            user: model.user_words.iter().cloned().collect(),
            freq: model.freq_words.iter().cloned().collect(),
        }
    }

    /// Total number of distinct words across all sets
    pub fn word_count(&self) -> usize {
        self.system.len() + self.user.len() + self.freq.len()
    }
}

/// Process-wide cache of loaded word sets, keyed by language id
///
/// Cloning the cache clones a handle to the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct DawgCache {
    inner: Arc<Mutex<HashMap<String, Arc<LoadedDawgs>>>>,
}

static GLOBAL_CACHE: OnceLock<DawgCache> = OnceLock::new();

impl DawgCache {
    /// Create a fresh, empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide shared cache
    pub fn global() -> &'static DawgCache {
        GLOBAL_CACHE.get_or_init(DawgCache::new)
    }

    /// Fetch the word sets for `lang`, building them from `model` on a miss
    ///
    /// On a hit the cached sets are reused and `model` is ignored.
    pub fn get_or_load(&self, lang: &str, model: &DictModel) -> Arc<LoadedDawgs> {
        // The sets are read-only once built, so a poisoned lock is harmless
        let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        map.entry(lang.to_string())
            .or_insert_with(|| Arc::new(LoadedDawgs::from_model(model)))
            .clone()
    }

    /// Number of languages currently cached
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// True if no languages are cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
