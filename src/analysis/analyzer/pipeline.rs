//! Pipeline analyzer that combines a tokenizer and filters.
//!
//! # Examples
//!
//! ```
//! use distill::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use distill::analysis::tokenizer::regex::RegexTokenizer;
//! use distill::analysis::token_filter::lowercase::LowercaseFilter;
//! use distill::analysis::token_filter::stop::StopFilter;
//! use std::sync::Arc;
//!
//! let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
//! let analyzer = PipelineAnalyzer::new(tokenizer)
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["the"])))
//!     .with_name("custom");
//!
//! let tokens: Vec<_> = analyzer.analyze("The quick fox").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert!(tokens[0].is_stopped());
//! assert_eq!(tokens[1].normalized, "quick");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
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

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::{LowercaseFilter, StemFilter, StopFilter};
    use crate::analysis::tokenizer::RegexTokenizer;

    fn english_like() -> PipelineAnalyzer {
        PipelineAnalyzer::new(Arc::new(RegexTokenizer::new().unwrap()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::from_words(vec!["the", "on"])))
            .add_filter(Arc::new(StemFilter::new()))
    }

    #[test]
    fn test_pipeline_order() {
        let analyzer = english_like();
        let tokens: Vec<Token> = analyzer.analyze("The Cats sat on mats.").unwrap().collect();

        assert_eq!(tokens.len(), 5);
        assert!(tokens[0].is_stopped());
        assert_eq!(tokens[1].text, "Cats");
        assert_eq!(tokens[1].stem, "cat");
        assert!(tokens[3].is_stopped());
        assert_eq!(tokens[4].stem, "mat");
    }

    #[test]
    fn test_pipeline_name() {
        let analyzer = english_like();
        assert_eq!(analyzer.name(), "pipeline_regex");
        assert_eq!(analyzer.with_name("english").name(), "english");
    }

    #[test]
    fn test_pipeline_debug_lists_filters() {
        let debug = format!("{:?}", english_like());
        assert!(debug.contains("lowercase"));
        assert!(debug.contains("stem"));
    }
}
