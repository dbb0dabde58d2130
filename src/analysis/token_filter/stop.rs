//! Stop filter implementation.
//!
//! Marks tokens whose normalized form is in the stopword set. Marked tokens
//! stay in the stream: they keep their position, so distance-based scorers see
//! the real gaps between content words, but they contribute no term.
//!
//! # Examples
//!
//! ```
//! use distill::analysis::token_filter::Filter;
//! use distill::analysis::token_filter::stop::StopFilter;
//! use distill::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["the"]);
//! let tokens = vec![Token::new("the", 0), Token::new("quick", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert!(result[0].is_stopped());
//! assert!(!result[1].is_stopped());
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that marks stopwords in the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words, lower-cased
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter sharing an existing stopword set.
    pub fn with_stop_words(stop_words: Arc<HashSet<String>>) -> Self {
        StopFilter { stop_words }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(Arc::new(stop_words))
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .map(|token| {
                if !token.is_stopped() && self.is_stop_word(&token.normalized) {
                    token.stop()
                } else {
                    token
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_filter_marks_without_removing() {
        let filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("The", 1).with_normalized("the"),
            Token::new("world", 2),
            Token::new("and", 3),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 4);
        assert!(!result[0].is_stopped());
        assert!(result[1].is_stopped());
        assert!(!result[2].is_stopped());
        assert!(result[3].is_stopped());
        assert_eq!(result[3].position, 3);
    }

    #[test]
    fn test_lookup_uses_normalized_form() {
        let filter = StopFilter::from_words(vec!["the"]);
        let tokens = vec![Token::new("THE", 0)];

        // Without lowercasing first, the normalized form is still "THE".
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        assert!(!result[0].is_stopped());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::from_words(Vec::<String>::new()).name(), "stop");
    }
}
