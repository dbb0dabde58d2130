//! Text analysis for Distill.
//!
//! Turns raw text into sentences of analyzed tokens: sentence segmentation,
//! word tokenization, lower-casing, stopword marking and stemming, driven by a
//! per-language [`LanguageProfile`](language::LanguageProfile).

pub mod analyzer;
pub mod language;
pub mod segmenter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use language::{LanguageProfile, LinguisticResources, ResourceRegistry};
pub use segmenter::SentenceSegmenter;
pub use token::{Token, TokenStream};
