//! Analyzed documents.
//!
//! - [`document::Document`] / [`document::Sentence`] - the immutable input to every strategy
//! - [`parser::DocumentParser`] - raw text and a language code to a `Document`
//! - [`term_index::TermIndex`] - dense ids for the document's content terms

#[allow(clippy::module_inception)]
pub mod document;
pub mod parser;
pub mod term_index;

// Re-export commonly used types
pub use document::{Document, Sentence};
pub use parser::DocumentParser;
pub use term_index::TermIndex;
