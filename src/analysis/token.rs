//! Analyzed word tokens.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline. It keeps
//! the surface form exactly as it appeared in the source sentence next to the
//! lower-cased form and the stem, together with a stopword flag. Filters fill
//! in the derived fields; once a sentence has been analyzed its tokens are not
//! modified again.
//!
//! # Examples
//!
//! ```
//! use distill::analysis::token::Token;
//!
//! let token = Token::with_offsets("Cats", 1, 4, 8)
//!     .with_normalized("cats")
//!     .with_stem("cat");
//!
//! assert_eq!(token.text, "Cats");
//! assert_eq!(token.normalized, "cats");
//! assert_eq!(token.stem, "cat");
//! assert!(!token.is_stopped());
//! ```

use serde::{Deserialize, Serialize};

/// A token represents a single word of a sentence after tokenization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appears in the source text
    pub text: String,

    /// Lower-cased form used for stopword lookup and stemming
    pub normalized: String,

    /// Stemmed form used as the term identity
    pub stem: String,

    /// The position of the token within its sentence (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the sentence text
    pub start_offset: usize,

    /// The byte offset where this token ends in the sentence text
    pub end_offset: usize,

    /// Whether this token has been marked as a stopword by a filter
    pub stopped: bool,
}

impl Token {
    /// Create a new token with the given text and position.
    ///
    /// The normalized and stemmed forms start out equal to the surface text.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Token {
            normalized: text.clone(),
            stem: text.clone(),
            text,
            position,
            start_offset: 0,
            end_offset,
            stopped: false,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            start_offset,
            end_offset,
            ..Token::new(text, position)
        }
    }

    /// Get the length of the surface text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the normalized form. The stem follows until a stemmer overrides it.
    pub fn with_normalized<S: Into<String>>(mut self, normalized: S) -> Self {
        self.normalized = normalized.into();
        self.stem = self.normalized.clone();
        self
    }

    /// Set the stemmed form.
    pub fn with_stem<S: Into<String>>(mut self, stem: S) -> Self {
        self.stem = stem.into();
        self
    }

    /// Mark this token as a stopword.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is a stopword.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// The term this token contributes to the models, if any.
    ///
    /// Stopwords contribute nothing.
    pub fn term(&self) -> Option<&str> {
        if self.stopped || self.stem.is_empty() {
            None
        } else {
            Some(&self.stem)
        }
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.normalized, "hello");
        assert_eq!(token.stem, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 5);
        assert!(!token.stopped);
    }

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets("world", 1, 6, 11);
        assert_eq!(token.text, "world");
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 6);
        assert_eq!(token.end_offset, 11);
    }

    #[test]
    fn test_term_skips_stopwords() {
        let token = Token::new("The", 0).with_normalized("the").stop();
        assert!(token.is_stopped());
        assert_eq!(token.term(), None);

        let token = Token::new("Running", 1)
            .with_normalized("running")
            .with_stem("run");
        assert_eq!(token.term(), Some("run"));
    }

    #[test]
    fn test_serde_keeps_analysis() {
        let token = Token::with_offsets("Cats", 0, 0, 4)
            .with_normalized("cats")
            .with_stem("cat");

        let json = serde_json::to_string(&token).unwrap();
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
        assert_eq!(back.term(), Some("cat"));
    }
}
