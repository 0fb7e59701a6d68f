use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label assigned when no filter matches a token.
pub const NEGATIVE_LABEL: &str = "negative";

/// Parallel `(words, labels)` sequences, one entry per token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledDataset {
    words: Vec<String>,
    labels: Vec<String>,
}

impl LabeledDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, word: impl Into<String>, label: impl Into<String>) {
        self.words.push(word.into());
        self.labels.push(label.into());
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.words
            .iter()
            .zip(self.labels.iter())
            .map(|(w, l)| (w.as_str(), l.as_str()))
    }

    /// Number of entries per label, ordered by label name.
    pub fn label_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for label in &self.labels {
            *counts.entry(label.as_str()).or_insert(0) += 1;
        }
        counts
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.words, self.labels)
    }
}
