//! Token filter implementations for token transformation.
//!
//! Filters run after the tokenizer, in order:
//!
//! ```text
//! Tokenizer → Lowercase → Stop (mark) → Stem
//! ```
//!
//! Unlike a search analyzer, the stop filter here only marks tokens. Luhn
//! measures distances between significant words in raw token positions, so
//! stopwords have to stay in the stream.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod stem;
pub mod stop;

pub use lowercase::LowercaseFilter;
pub use stem::{IdentityStemmer, PorterStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;
