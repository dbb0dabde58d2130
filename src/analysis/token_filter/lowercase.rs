//! Lowercase filter implementation.
//!
//! Fills in [`Token::normalized`](crate::analysis::token::Token::normalized)
//! with the lower-cased surface text. The surface text itself is preserved.
//!
//! # Examples
//!
//! ```
//! use distill::analysis::token_filter::Filter;
//! use distill::analysis::token_filter::lowercase::LowercaseFilter;
//! use distill::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].normalized, "hello");
//! assert_eq!(filtered[1].text, "WORLD");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that lower-cases the normalized form of each token.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let lowered = if token.text.is_ascii() {
                    token.text.to_ascii_lowercase()
                } else {
                    token.text.to_lowercase()
                };
                token.with_normalized(lowered)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
