//! Trained classifier model.
//!
//! A [`Model`] is the compact statistical summary produced by the
//! trainer and consumed read-only by the scorer: the global vocabulary
//! size, per-class word frequencies with their totals, and per-class
//! document counts with the grand total. Aggregate figures are dedicated
//! struct fields rather than reserved keys inside the same maps as class
//! labels, so any string is a usable label.

use std::collections::BTreeMap;

use ahash::AHashMap;

/// Per-class statistics gathered during training.
#[derive(Clone, Debug, Default)]
pub struct ClassData {
    /// Occurrence count per case-folded token within this class.
    pub(crate) word_counts: AHashMap<String, u64>,
    /// Count of all tokens in this class's documents, repeats included.
    pub(crate) word_total: u64,
    /// Number of training documents observed for this class.
    pub(crate) document_count: u64,
}

impl ClassData {
    /// Occurrence count for a token in this class, zero when unseen.
    ///
    /// Absence is the common case, not an error: smoothing in the scorer
    /// turns a zero count into a small non-zero likelihood.
    pub fn word_count(&self, token: &str) -> u64 {
        self.word_counts.get(token).copied().unwrap_or(0)
    }

    /// Count of all tokens in this class, repeats included.
    pub fn word_total(&self) -> u64 {
        self.word_total
    }

    /// Number of training documents in this class.
    pub fn document_count(&self) -> u64 {
        self.document_count
    }

    /// Number of distinct tokens seen in this class.
    pub fn distinct_words(&self) -> usize {
        self.word_counts.len()
    }

    /// Iterate over `(token, count)` pairs for this class.
    pub fn word_counts(&self) -> impl Iterator<Item = (&str, u64)> {
        self.word_counts
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
    }
}

/// An immutable trained model.
///
/// Produced once by [`train`](crate::classifier::train) and never
/// mutated afterwards; scoring borrows it shared.
#[derive(Clone, Debug, Default)]
pub struct Model {
    vocabulary_size: usize,
    classes: BTreeMap<String, ClassData>,
    total_documents: u64,
}

impl Model {
    pub(crate) fn new(
        vocabulary_size: usize,
        classes: BTreeMap<String, ClassData>,
        total_documents: u64,
    ) -> Self {
        Model {
            vocabulary_size,
            classes,
            total_documents,
        }
    }

    /// Count of distinct case-folded tokens across the whole corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    /// Grand total of training documents across all classes.
    pub fn total_documents(&self) -> u64 {
        self.total_documents
    }

    /// Iterate over `(label, data)` pairs in ascending label order.
    ///
    /// This order is the tie-break order for prediction: when two
    /// classes score identically, the earlier label wins.
    pub fn classes(&self) -> impl Iterator<Item = (&str, &ClassData)> {
        self.classes
            .iter()
            .map(|(label, data)| (label.as_str(), data))
    }

    /// Get the statistics for a class label.
    pub fn class(&self, label: &str) -> Option<&ClassData> {
        self.classes.get(label)
    }

    /// Number of classes in the model.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Check whether the model has no classes.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> Model {
        let mut word_counts = AHashMap::new();
        word_counts.insert("win".to_string(), 3);
        word_counts.insert("money".to_string(), 1);

        let mut classes = BTreeMap::new();
        classes.insert(
            "spam".to_string(),
            ClassData {
                word_counts,
                word_total: 4,
                document_count: 2,
            },
        );

        Model::new(2, classes, 2)
    }

    #[test]
    fn test_word_count_defaults_to_zero() {
        let model = sample_model();
        let spam = model.class("spam").unwrap();

        assert_eq!(spam.word_count("win"), 3);
        assert_eq!(spam.word_count("unseen"), 0);
    }

    #[test]
    fn test_class_lookup() {
        let model = sample_model();

        assert_eq!(model.class_count(), 1);
        assert!(model.class("spam").is_some());
        assert!(model.class("total").is_none());
        assert!(!model.is_empty());
    }

    #[test]
    fn test_class_data_accessors() {
        let model = sample_model();
        let spam = model.class("spam").unwrap();

        assert_eq!(spam.word_total(), 4);
        assert_eq!(spam.document_count(), 2);
        assert_eq!(spam.distinct_words(), 2);
    }
}
