//! Document parser: raw text to analyzed [`Document`].
//!
//! # Architecture
//!
//! ```text
//! Text → SentenceSegmenter → sentence slices
//!                              ↓
//!                      PipelineAnalyzer (tokenizer + filters)
//!                              ↓
//!                          Document
//! ```
//!
//! # Examples
//!
//! ```
//! use distill::document::parser::DocumentParser;
//!
//! let parser = DocumentParser::builtin();
//! let doc = parser.parse("The cat sat. The cat sat on the mat.", "english").unwrap();
//!
//! assert_eq!(doc.len(), 2);
//! assert_eq!(doc.sentences[1].text, "The cat sat on the mat.");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::language::{LinguisticResources, ResourceRegistry};
use crate::analysis::token::Token;
use crate::document::document::{Document, Sentence};
use crate::error::{DistillError, Result};

/// Parses raw text into a [`Document`] using per-language resources.
#[derive(Clone)]
pub struct DocumentParser {
    resources: Arc<dyn LinguisticResources>,
}

impl std::fmt::Debug for DocumentParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentParser")
            .field("resources", &"<linguistic resources>")
            .finish()
    }
}

impl DocumentParser {
    /// Create a parser backed by the given resources.
    pub fn new(resources: Arc<dyn LinguisticResources>) -> Self {
        DocumentParser { resources }
    }

    /// Create a parser backed by the built-in language packs.
    pub fn builtin() -> Self {
        Self::new(ResourceRegistry::builtin())
    }

    /// The resources this parser resolves languages with.
    pub fn resources(&self) -> &Arc<dyn LinguisticResources> {
        &self.resources
    }

    /// Segment and analyze `text`.
    ///
    /// Sentences without any word token ("...", "?!") are dropped before
    /// positions are assigned. An input without sentences yields an empty
    /// document; deciding whether that is an error is up to the caller.
    pub fn parse(&self, text: &str, language: &str) -> Result<Document> {
        if text.contains('\0') {
            return Err(DistillError::invalid_request(
                "text contains a NUL character",
            ));
        }

        let profile = self.resources.profile(language)?;
        let segmenter = profile.segmenter();
        let analyzer = profile.analyzer();

        let mut sentences = Vec::new();
        for sentence_text in segmenter.segment(text) {
            let tokens: Vec<Token> = analyzer.analyze(sentence_text)?.collect();
            if tokens.is_empty() {
                continue;
            }
            sentences.push(Sentence::new(sentence_text, sentences.len(), tokens));
        }

        tracing::debug!(
            language = profile.code(),
            sentences = sentences.len(),
            "parsed document"
        );

        Ok(Document::new(profile.code(), sentences))
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::builtin()
    }
}
