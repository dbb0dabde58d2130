//! Analyzers combine a tokenizer with a chain of token filters.
//!
//! ```text
//! Sentence text → Analyzer → Token Stream → Sentence
//!                   ↓
//!               Tokenizer
//!                   ↓
//!               Filter 1 … Filter N
//! ```

mod pipeline;

pub use pipeline::PipelineAnalyzer;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert one sentence into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}
