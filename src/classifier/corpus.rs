//! Labeled training corpus.
//!
//! A [`Corpus`] maps class labels to the documents observed for that
//! class. It is the only input the trainer reads, and the trainer never
//! mutates it. The JSON shape accepted from files is the obvious one:
//!
//! ```json
//! {
//!   "spam": ["win money now"],
//!   "not spam": ["call me back"]
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A labeled collection of training documents, keyed by class label.
///
/// Classes are kept in ascending label order, which is also the order
/// the trained model iterates them in. Any string is a legal label,
/// including `"total"`: aggregate figures live in dedicated model
/// fields, never alongside labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    classes: BTreeMap<String, Vec<String>>,
}

impl Corpus {
    /// Create a new, empty corpus.
    pub fn new() -> Self {
        Corpus::default()
    }

    /// Add a document under the given class label.
    pub fn add_document<L, D>(&mut self, label: L, document: D)
    where
        L: Into<String>,
        D: Into<String>,
    {
        self.classes
            .entry(label.into())
            .or_default()
            .push(document.into());
    }

    /// Add a class with its documents, appending if the class exists.
    ///
    /// A class added with an empty document list still appears in the
    /// corpus (and in the trained model, with zeroed counts).
    pub fn add_class<L: Into<String>>(&mut self, label: L, documents: Vec<String>) {
        self.classes.entry(label.into()).or_default().extend(documents);
    }

    /// Iterate over `(label, documents)` pairs in ascending label order.
    pub fn classes(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.classes
            .iter()
            .map(|(label, docs)| (label.as_str(), docs.as_slice()))
    }

    /// Get the documents for a class label.
    pub fn documents(&self, label: &str) -> Option<&[String]> {
        self.classes.get(label).map(|docs| docs.as_slice())
    }

    /// Number of classes in the corpus.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Total number of documents across all classes.
    pub fn document_count(&self) -> usize {
        self.classes.values().map(|docs| docs.len()).sum()
    }

    /// Check whether the corpus has no classes at all.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for Corpus {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        let mut corpus = Corpus::new();
        for (label, documents) in iter {
            corpus.add_class(label, documents);
        }
        corpus
    }
}
