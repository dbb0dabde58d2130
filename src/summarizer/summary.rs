//! Summarization results.

use serde::{Deserialize, Serialize};

use crate::error::SummaryWarning;
use crate::summarizer::algorithm::Algorithm;

/// One extracted sentence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummarySentence {
    /// Verbatim sentence text
    pub text: String,
    /// Position in the source document
    pub position: usize,
    /// Score assigned by the strategy
    pub score: f64,
}

/// Sentences selected by one algorithm, in document order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub algorithm: Algorithm,
    pub sentences: Vec<SummarySentence>,
    /// Early stops of iterative routines; the result is still usable
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<SummaryWarning>,
}

impl Summary {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Positions of the selected sentences.
    pub fn positions(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.position).collect()
    }

    /// Texts of the selected sentences.
    pub fn texts(&self) -> Vec<&str> {
        self.sentences.iter().map(|s| s.text.as_str()).collect()
    }

    /// The selected sentences joined by a space.
    pub fn text(&self) -> String {
        self.texts().join(" ")
    }
}
