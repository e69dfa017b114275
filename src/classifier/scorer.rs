//! Log-probability scoring.
//!
//! For each document and each class the scorer sums the log prior with
//! the log Laplace-smoothed conditional likelihood of every token, once
//! per token position. Working in log space turns the product of many
//! small probabilities into a sum that cannot underflow, and the add-one
//! smoothing keeps tokens unseen in training from collapsing a class's
//! likelihood to `log(0)`.
//!
//! The smoothing denominator is the per-class word total plus the global
//! vocabulary size, the standard multinomial Naive Bayes estimator.

use std::collections::BTreeMap;

use crate::analysis::analyzer::Analyzer;
use crate::classifier::model::Model;
use crate::error::{Result, TextcatError};

/// Score documents against every class in the model.
///
/// Returns, per input document, a map from class label to log
/// probability. Labels iterate in ascending order.
///
/// # Errors
///
/// - [`TextcatError::EmptyModel`] when the model has no classes.
/// - [`TextcatError::DegenerateModel`] when any class cannot produce a
///   finite score: the model saw no training documents at all, a class
///   has zero documents (its prior would be `log(0)`), or a smoothing
///   denominator is zero. These replace raw arithmetic faults with a
///   named condition; they are only reachable through classes trained
///   on zero documents.
pub fn score<S: AsRef<str>>(
    model: &Model,
    analyzer: &dyn Analyzer,
    documents: &[S],
) -> Result<Vec<BTreeMap<String, f64>>> {
    check_scorable(model)?;

    let total_documents = model.total_documents() as f64;
    let mut results = Vec::with_capacity(documents.len());

    for document in documents {
        let tokens: Vec<String> = analyzer
            .analyze(document.as_ref())?
            .map(|token| token.text)
            .collect();

        let mut scores = BTreeMap::new();
        for (label, class) in model.classes() {
            let prior = (class.document_count() as f64 / total_documents).ln();
            let denominator = (class.word_total() + model.vocabulary_size() as u64) as f64;

            let likelihood: f64 = tokens
                .iter()
                .map(|token| ((class.word_count(token) + 1) as f64 / denominator).ln())
                .sum();

            scores.insert(label.to_string(), prior + likelihood);
        }

        results.push(scores);
    }

    Ok(results)
}

/// Reject models that cannot yield finite scores for every class.
fn check_scorable(model: &Model) -> Result<()> {
    if model.is_empty() {
        return Err(TextcatError::empty_model(
            "cannot score against a model with no classes",
        ));
    }

    if model.total_documents() == 0 {
        return Err(TextcatError::degenerate_model(
            "model was trained on zero documents",
        ));
    }

    for (label, class) in model.classes() {
        if class.document_count() == 0 {
            return Err(TextcatError::degenerate_model(format!(
                "class '{label}' has no training documents"
            )));
        }
        if class.word_total() + model.vocabulary_size() as u64 == 0 {
            return Err(TextcatError::degenerate_model(format!(
                "class '{label}' has a zero smoothing denominator"
            )));
        }
    }

    Ok(())
}
