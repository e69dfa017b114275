//! Pipeline analyzer that combines a tokenizer with token filters.
//!
//! # Examples
//!
//! ```
//! use textcat::analysis::analyzer::Analyzer;
//! use textcat::analysis::analyzer::pipeline::PipelineAnalyzer;
//!
//! let analyzer = PipelineAnalyzer::default();
//! let tokens: Vec<_> = analyzer.analyze("Win MONEY now").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "win");
//! assert_eq!(tokens[1].text, "money");
//! assert_eq!(tokens[2].text, "now");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{Filter, LowercaseFilter};
use crate::analysis::tokenizer::{SpaceTokenizer, Tokenizer};
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
///
/// Filters are applied sequentially in the order they were added.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Default for PipelineAnalyzer {
    /// The classifier's standard pipeline: single-space tokenization
    /// followed by lowercasing.
    fn default() -> Self {
        PipelineAnalyzer::new(Arc::new(SpaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_default_pipeline_lowercases() {
        let analyzer = PipelineAnalyzer::default();
        let tokens: Vec<Token> = analyzer.analyze("Nigerian Prince").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "nigerian");
        assert_eq!(tokens[1].text, "prince");
    }

    #[test]
    fn test_default_pipeline_keeps_empty_tokens() {
        let analyzer = PipelineAnalyzer::default();
        let tokens: Vec<Token> = analyzer.analyze("A  B").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "a");
        assert_eq!(tokens[1].text, "");
        assert_eq!(tokens[2].text, "b");
    }

    #[test]
    fn test_bare_tokenizer_pipeline() {
        let analyzer = PipelineAnalyzer::new(Arc::new(SpaceTokenizer::new()));
        let tokens: Vec<Token> = analyzer.analyze("Keep Case").unwrap().collect();

        assert_eq!(tokens[0].text, "Keep");
        assert_eq!(tokens[1].text, "Case");
    }
}
