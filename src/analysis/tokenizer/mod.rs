//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split one sentence into word tokens. Punctuation and whitespace
//! never become tokens.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Word-pattern tokenization (default for English)
//! - [`unicode_word::UnicodeWordTokenizer`] - Unicode word boundaries (UAX #29)

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can sit inside a shared
/// language profile.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
pub mod unicode_word;

pub use regex::RegexTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
