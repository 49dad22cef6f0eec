//! DictModel - language word-list data handed to a session for loading
//!
//! The model is opaque to the recognition controller; it only flows from
//! whoever loaded the language data into `DictSession::load`. The
//! serialized form is a plain line-per-word text blob.

/// Word-list data for one language
#[derive(Debug, Clone, Default)]
pub struct DictModel {
    /// Main language word list
    pub system_words: Vec<String>,
    /// User-supplied additions
    pub user_words: Vec<String>,
    /// High-frequency words, scored above plain system matches
    pub freq_words: Vec<String>,
}

impl DictModel {
    /// Build a model from a system word list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            system_words: words.into_iter().map(Into::into).collect(),
            user_words: Vec::new(),
            freq_words: Vec::new(),
        }
    }

    /// Parse a model from line-per-word text
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        )
    }

    /// Attach a user word list
    pub fn with_user_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Attach a frequent-word list
    pub fn with_freq_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.freq_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Total number of words across all lists
    pub fn word_count(&self) -> usize {
        self.system_words.len() + self.user_words.len() + self.freq_words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_skips_blanks_and_comments() {
        let model = DictModel::from_text("cat\n\n# comment\ndog\n  bird  \n");
        assert_eq!(model.system_words, vec!["cat", "dog", "bird"]);
        assert_eq!(model.word_count(), 3);
    }

    #[test]
    fn test_builders() {
        let model = DictModel::from_words(["cat"])
            .with_user_words(["xyzzy"])
            .with_freq_words(["the"]);
        assert_eq!(model.word_count(), 3);
        assert_eq!(model.user_words, vec!["xyzzy"]);
        assert_eq!(model.freq_words, vec!["the"]);
    }
}
