//! Analyzer implementations combining tokenizers and filters.
//!
//! Analyzers are the complete text processing pipeline:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! The classifier holds a single analyzer and routes both training
//! documents and documents being scored through it.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert raw text into a token stream.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual analyzer modules
pub mod pipeline;

// Re-export for convenient access
pub use pipeline::PipelineAnalyzer;
