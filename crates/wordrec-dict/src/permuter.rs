//! PermuterKind - how the dictionary recognized a word

/// Classification of how a word was validated by the dictionary
///
/// `NotFound` is a normal outcome, not an error: it is the sentinel for a
/// word the dictionary rejects. Variants are ordered by increasing strength
/// of dictionary evidence, so `Ord` can be used to pick the best-supported
/// interpretation of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum PermuterKind {
    /// Word not present in any dictionary
    #[default]
    NotFound,
    /// Word matches a numeric pattern (digits with optional punctuation)
    Number,
    /// Hyphen- or slash-joined compound whose parts are all valid words
    Compound,
    /// Word found in the user-supplied word list
    UserDawg,
    /// Word found in the language's system word list
    SystemDawg,
    /// Word found in the frequent-word list
    FreqDawg,
}

impl PermuterKind {
    /// True for any outcome other than `NotFound`
    pub fn is_found(self) -> bool {
        self != PermuterKind::NotFound
    }
}

impl std::fmt::Display for PermuterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PermuterKind::NotFound => "not-found",
            PermuterKind::Number => "number",
            PermuterKind::Compound => "compound",
            PermuterKind::UserDawg => "user-dawg",
            PermuterKind::SystemDawg => "system-dawg",
            PermuterKind::FreqDawg => "freq-dawg",
        };
        write!(f, "{}", name)
    }
}
