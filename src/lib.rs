//! # textcat
//!
//! A multinomial Naive Bayes text classification library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Pluggable text analysis pipeline
//! - Laplace-smoothed log-space scoring
//! - Deterministic arg-max prediction
//!
//! ## Quick start
//!
//! ```
//! use textcat::classifier::{Corpus, classify};
//!
//! let mut corpus = Corpus::new();
//! corpus.add_document("spam", "win money now");
//! corpus.add_document("not spam", "call me back");
//!
//! let labels = classify(&corpus, &["win money"]).unwrap();
//! assert_eq!(labels, vec!["spam".to_string()]);
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
