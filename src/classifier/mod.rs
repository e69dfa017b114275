//! Multinomial Naive Bayes text classification.
//!
//! This module contains the statistical core of textcat: a trainer that
//! folds a labeled [`Corpus`] into an immutable [`Model`], a scorer that
//! computes per-class log-probabilities for unlabeled documents, and the
//! [`NaiveBayesClassifier`] facade tying them together with a shared
//! analysis pipeline.
//!
//! Data flows one way: corpus → trainer → model → scorer → predictions.

pub mod corpus;
pub mod model;
pub mod naive_bayes;
pub mod scorer;
pub mod trainer;

// Re-export commonly used types
pub use corpus::Corpus;
pub use model::{ClassData, Model};
pub use naive_bayes::{NaiveBayesClassifier, classify};
pub use scorer::score;
pub use trainer::train;
