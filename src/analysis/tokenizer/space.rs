//! Single-space tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on single space characters.
///
/// Unlike a whitespace tokenizer, this splits on `' '` only: tabs and
/// newlines stay inside tokens, and adjacent separators produce
/// empty-string tokens that are kept in the stream. The empty input
/// yields exactly one empty token. Word counts therefore treat runs of
/// spaces as delimiting real (empty) tokens rather than collapsing them.
#[derive(Clone, Debug, Default)]
pub struct SpaceTokenizer;

impl SpaceTokenizer {
    /// Create a new space tokenizer.
    pub fn new() -> Self {
        SpaceTokenizer
    }
}

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split(' ')
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "space"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_tokenizer() {
        let tokenizer = SpaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("win money now").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "win");
        assert_eq!(tokens[1].text, "money");
        assert_eq!(tokens[2].text, "now");
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_adjacent_separators_keep_empty_tokens() {
        let tokenizer = SpaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("a  b").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "a");
        assert_eq!(tokens[1].text, "");
        assert_eq!(tokens[2].text, "b");
    }

    #[test]
    fn test_empty_input_yields_one_empty_token() {
        let tokenizer = SpaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("").unwrap().collect();

        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_empty());
    }

    #[test]
    fn test_non_space_whitespace_not_split() {
        let tokenizer = SpaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("a\tb c").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "a\tb");
        assert_eq!(tokens[1].text, "c");
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(SpaceTokenizer::new().name(), "space");
    }
}
