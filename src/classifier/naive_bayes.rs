//! The Naive Bayes classifier facade.
//!
//! [`NaiveBayesClassifier`] ties the pieces together: it trains a
//! [`Model`] from a [`Corpus`] at construction time and answers scoring
//! and prediction queries against it. Training and scoring share one
//! analyzer, so a token means the same thing on both sides.
//!
//! # Examples
//!
//! ```
//! use textcat::classifier::{Corpus, NaiveBayesClassifier};
//!
//! let mut corpus = Corpus::new();
//! corpus.add_document("spam", "win money now");
//! corpus.add_document("not spam", "call me back");
//!
//! let classifier = NaiveBayesClassifier::train(&corpus).unwrap();
//! let labels = classifier.predict(&["win money"]).unwrap();
//!
//! assert_eq!(labels, vec!["spam".to_string()]);
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::classifier::corpus::Corpus;
use crate::classifier::model::Model;
use crate::classifier::{scorer, trainer};
use crate::error::{Result, TextcatError};

/// A trained multinomial Naive Bayes classifier.
///
/// The model is immutable once training finishes; every query method
/// borrows it shared, so repeated calls with the same input return the
/// same output.
pub struct NaiveBayesClassifier {
    model: Model,
    analyzer: Arc<dyn Analyzer>,
}

impl NaiveBayesClassifier {
    /// Train a classifier with the standard analysis pipeline
    /// (single-space tokenization, lowercasing).
    pub fn train(corpus: &Corpus) -> Result<Self> {
        Self::train_with_analyzer(corpus, Arc::new(PipelineAnalyzer::default()))
    }

    /// Train a classifier that routes all text through the given
    /// analyzer.
    pub fn train_with_analyzer(corpus: &Corpus, analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        let model = trainer::train(corpus, analyzer.as_ref())?;
        Ok(NaiveBayesClassifier { model, analyzer })
    }

    /// The trained model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Compute per-class log-probability scores for each document.
    pub fn score<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<BTreeMap<String, f64>>> {
        scorer::score(&self.model, self.analyzer.as_ref(), documents)
    }

    /// Predict the most probable class label for each document.
    ///
    /// Selection is arg-max over the score map; a class wins only with a
    /// strictly greater score, so exact ties keep the earliest label in
    /// ascending order.
    pub fn predict<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<String>> {
        let scored = self.score(documents)?;

        scored
            .into_iter()
            .map(|scores| select_best(&scores))
            .collect()
    }
}

/// Pick the label with the strictly greatest score.
fn select_best(scores: &BTreeMap<String, f64>) -> Result<String> {
    let mut best: Option<(&str, f64)> = None;

    for (label, &log_prob) in scores {
        match best {
            Some((_, best_score)) if log_prob <= best_score => {}
            _ => best = Some((label.as_str(), log_prob)),
        }
    }

    best.map(|(label, _)| label.to_string())
        .ok_or_else(|| TextcatError::empty_model("no class produced a score"))
}

/// Train on a corpus and predict labels for the documents in one call.
///
/// The convenience entry point: equivalent to
/// [`NaiveBayesClassifier::train`] followed by
/// [`predict`](NaiveBayesClassifier::predict).
pub fn classify<S: AsRef<str>>(corpus: &Corpus, documents: &[S]) -> Result<Vec<String>> {
    NaiveBayesClassifier::train(corpus)?.predict(documents)
}
