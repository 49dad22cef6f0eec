//! Classification candidates and word choices

use wordrec_dict::PermuterKind;

/// One classifier candidate for a blob
#[derive(Debug, Clone, PartialEq)]
pub struct BlobChoice {
    /// Character string for the matched class
    pub label: String,
    /// Match confidence on a 0-100 scale
    pub confidence: f32,
}

impl BlobChoice {
    /// Create a choice
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Ordered candidate list for one blob
///
/// Kept sorted by descending confidence; insertion beyond the capacity
/// drops the weakest candidate. Conventionally small (a handful to a few
/// dozen entries).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceList {
    choices: Vec<BlobChoice>,
    capacity: usize,
}

impl ChoiceList {
    /// Create an empty list with unlimited capacity
    pub fn new() -> Self {
        Self {
            choices: Vec::new(),
            capacity: usize::MAX,
        }
    }

    /// Create an empty list that keeps at most `capacity` candidates
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            choices: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Insert a candidate, keeping the list sorted by descending confidence
    pub fn push(&mut self, choice: BlobChoice) {
        let pos = self
            .choices
            .partition_point(|c| c.confidence >= choice.confidence);
        self.choices.insert(pos, choice);
        if self.choices.len() > self.capacity {
            self.choices.truncate(self.capacity);
        }
    }

    /// Best candidate, if any
    pub fn best(&self) -> Option<&BlobChoice> {
        self.choices.first()
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// True if there are no candidates
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Iterate candidates in descending confidence order
    pub fn iter(&self) -> std::slice::Iter<'_, BlobChoice> {
        self.choices.iter()
    }

    /// The `n` strongest candidates
    pub fn top(&self, n: usize) -> &[BlobChoice] {
        &self.choices[..n.min(self.choices.len())]
    }
}

impl<'a> IntoIterator for &'a ChoiceList {
    type Item = &'a BlobChoice;
    type IntoIter = std::slice::Iter<'a, BlobChoice>;

    fn into_iter(self) -> Self::IntoIter {
        self.choices.iter()
    }
}

/// The scored textual interpretation of a word
#[derive(Debug, Clone, PartialEq)]
pub struct WordChoice {
    /// Word text assembled from per-slot candidates
    pub text: String,
    /// Word score on a 0-100 scale
    pub score: f32,
    /// How the dictionary recognized the word
    pub permuter: PermuterKind,
}

impl WordChoice {
    /// Create a word choice
    pub fn new(text: impl Into<String>, score: f32, permuter: PermuterKind) -> Self {
        Self {
            text: text.into(),
            score,
            permuter,
        }
    }
}

impl std::fmt::Display for WordChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} [{:.1}, {}]",
            self.text, self.score, self.permuter
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_descending_order() {
        let mut list = ChoiceList::new();
        list.push(BlobChoice::new("a", 50.0));
        list.push(BlobChoice::new("b", 80.0));
        list.push(BlobChoice::new("c", 65.0));
        let labels: Vec<&str> = list.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "c", "a"]);
        assert_eq!(list.best().unwrap().label, "b");
    }

    #[test]
    fn test_capacity_drops_weakest() {
        let mut list = ChoiceList::with_capacity(2);
        list.push(BlobChoice::new("a", 50.0));
        list.push(BlobChoice::new("b", 80.0));
        list.push(BlobChoice::new("c", 65.0));
        assert_eq!(list.len(), 2);
        let labels: Vec<&str> = list.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "c"]);
    }

    #[test]
    fn test_top() {
        let mut list = ChoiceList::new();
        list.push(BlobChoice::new("a", 50.0));
        list.push(BlobChoice::new("b", 80.0));
        assert_eq!(list.top(1).len(), 1);
        assert_eq!(list.top(1)[0].label, "b");
        assert_eq!(list.top(10).len(), 2);
        assert!(ChoiceList::new().top(3).is_empty());
    }

    #[test]
    fn test_word_choice_display() {
        let wc = WordChoice::new("cat", 97.5, PermuterKind::SystemDawg);
        assert_eq!(wc.to_string(), "\"cat\" [97.5, system-dawg]");
    }
}
