//! # Distill
//!
//! Extractive text summarization for Rust.
//!
//! ## Features
//!
//! - Sentence segmentation with abbreviation handling
//! - Configurable word analysis pipeline (tokenize, lowercase, stopwords, stem)
//! - Luhn, SumBasic, KL-Sum, LSA, TextRank and LexRank scoring
//! - Deterministic, tie-broken sentence selection in document order
//! - Parallel comparison of every algorithm on one document
//!
//! ```
//! use distill::prelude::*;
//!
//! let summarizer = Summarizer::new();
//! let summary = summarizer
//!     .summarize("The cat sat. The cat sat on the mat. Dogs bark loudly.", "english", Algorithm::Luhn, 1)
//!     .unwrap();
//! assert_eq!(summary.texts(), vec!["The cat sat."]);
//! ```

pub mod analysis;
pub mod document;
pub mod error;
pub mod model;
pub mod summarizer;

pub mod prelude {
    pub use crate::analysis::language::{LanguageProfile, LinguisticResources, ResourceRegistry};
    pub use crate::document::{Document, DocumentParser, Sentence};
    pub use crate::error::{DistillError, Result, SummaryWarning};
    pub use crate::model::similarity::SimilarityMetric;
    pub use crate::summarizer::{
        Algorithm, LsaPolicy, Summarizer, SummarizerConfig, Summary, SummarySentence,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
