//! Model training.
//!
//! Training is a single fold over `(label, document)` pairs: an
//! accumulator gathers the vocabulary, per-class frequency tables, and
//! document totals, then is consumed into an immutable [`Model`]. No
//! mutable state outlives the call.

use std::collections::BTreeMap;

use ahash::AHashSet;

use crate::analysis::analyzer::Analyzer;
use crate::classifier::corpus::Corpus;
use crate::classifier::model::{ClassData, Model};
use crate::error::Result;

/// Accumulates corpus statistics during a training pass.
#[derive(Debug, Default)]
struct TrainingAccumulator {
    vocabulary: AHashSet<String>,
    classes: BTreeMap<String, ClassData>,
    total_documents: u64,
}

impl TrainingAccumulator {
    /// Make sure a class exists in the model even if it never receives
    /// a document.
    fn touch_class(&mut self, label: &str) {
        if !self.classes.contains_key(label) {
            self.classes.insert(label.to_string(), ClassData::default());
        }
    }

    /// Fold one analyzed document into the accumulator.
    fn observe_document(&mut self, label: &str, tokens: impl Iterator<Item = String>) {
        self.total_documents += 1;

        let class = self.classes.entry(label.to_string()).or_default();
        class.document_count += 1;

        for token in tokens {
            class.word_total += 1;
            *class.word_counts.entry(token.clone()).or_insert(0) += 1;
            self.vocabulary.insert(token);
        }
    }

    fn into_model(self) -> Model {
        Model::new(self.vocabulary.len(), self.classes, self.total_documents)
    }
}

/// Train a model from a labeled corpus.
///
/// Always succeeds for any corpus shape: an empty corpus yields a model
/// with no classes and a zero vocabulary, and a class with no documents
/// is kept with zeroed counts. Degenerate models are rejected at scoring
/// time, not here.
pub fn train(corpus: &Corpus, analyzer: &dyn Analyzer) -> Result<Model> {
    let mut accumulator = TrainingAccumulator::default();

    for (label, documents) in corpus.classes() {
        accumulator.touch_class(label);

        for document in documents {
            let tokens = analyzer.analyze(document)?.map(|token| token.text);
            accumulator.observe_document(label, tokens);
        }
    }

    Ok(accumulator.into_model())
}
