//! The summarization facade.
//!
//! # Examples
//!
//! ```
//! use distill::summarizer::{Algorithm, Summarizer};
//!
//! let summarizer = Summarizer::new();
//! let text = "The cat sat. The cat sat on the mat. Dogs bark loudly.";
//!
//! let summary = summarizer.summarize(text, "english", Algorithm::Luhn, 1).unwrap();
//! assert_eq!(summary.len(), 1);
//!
//! let all = summarizer.summarize_all(text, "english", 2).unwrap();
//! assert_eq!(all.len(), Algorithm::ALL.len());
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::language::LinguisticResources;
use crate::document::document::Document;
use crate::document::parser::DocumentParser;
use crate::error::{DistillError, Result};
use crate::model::budget::Deadline;
use crate::summarizer::StrategyOutput;
use crate::summarizer::algorithm::Algorithm;
use crate::summarizer::config::SummarizerConfig;
use crate::summarizer::graph_rank::GraphRank;
use crate::summarizer::kl::Kl;
use crate::summarizer::lsa::Lsa;
use crate::summarizer::luhn::Luhn;
use crate::summarizer::selector::SentenceSelector;
use crate::summarizer::sum_basic::SumBasic;
use crate::summarizer::summary::{Summary, SummarySentence};

/// Dispatches a document to one of the scoring strategies and selects the
/// summary sentences.
///
/// A `Summarizer` holds only read-only state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    parser: DocumentParser,
    selector: SentenceSelector,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with the default configuration and the built-in
    /// language packs.
    pub fn new() -> Self {
        Summarizer {
            config: SummarizerConfig::default(),
            parser: DocumentParser::builtin(),
            selector: SentenceSelector::new(),
        }
    }

    /// Create a summarizer with a validated configuration.
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Summarizer {
            config,
            ..Self::new()
        })
    }

    /// Use other linguistic resources.
    pub fn with_resources(mut self, resources: Arc<dyn LinguisticResources>) -> Self {
        self.parser = DocumentParser::new(resources);
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Segment and analyze `text`, failing on a document without sentences.
    pub fn parse(&self, text: &str, language: &str) -> Result<Document> {
        let document = self.parser.parse(text, language)?;
        if document.is_empty() {
            return Err(DistillError::empty_document("the text contains no sentences"));
        }
        Ok(document)
    }

    /// Summarize `text` into at most `k` sentences, in document order.
    ///
    /// [`Algorithm::Kl`] stops as soon as another sentence would raise the
    /// divergence, so with the default configuration it usually returns one
    /// sentence; set `kl_stop_on_increase` to `false` to get `k`.
    pub fn summarize(
        &self,
        text: &str,
        language: &str,
        algorithm: Algorithm,
        k: usize,
    ) -> Result<Summary> {
        Self::check_k(k)?;
        let document = self.parse(text, language)?;
        self.summarize_document(&document, algorithm, k)
    }

    /// Summarize `text` into `ceil(fraction · n)` of its `n` sentences.
    ///
    /// `fraction` must lie in `(0, 1]`.
    pub fn summarize_ratio(
        &self,
        text: &str,
        language: &str,
        algorithm: Algorithm,
        fraction: f64,
    ) -> Result<Summary> {
        Self::ratio_to_k(fraction, 1)?;
        let document = self.parse(text, language)?;
        let k = Self::ratio_to_k(fraction, document.len())?;
        self.summarize_document(&document, algorithm, k)
    }

    /// Number of sentences a `fraction` of `sentences` amounts to, rounded up
    /// and at least 1.
    pub fn ratio_to_k(fraction: f64, sentences: usize) -> Result<usize> {
        if fraction.is_nan() || fraction <= 0.0 || fraction > 1.0 {
            return Err(DistillError::invalid_request(format!(
                "fraction must be in (0, 1], got {fraction}"
            )));
        }
        // Absorbs products like 0.3 * 10 = 3.0000000000000004.
        let k = (fraction * sentences as f64 - 1e-9).ceil() as usize;
        Ok(k.clamp(1, sentences.max(1)))
    }

    /// Like [`summarize`](Self::summarize), with the algorithm given by identifier.
    pub fn summarize_named(
        &self,
        text: &str,
        language: &str,
        algorithm: &str,
        k: usize,
    ) -> Result<Summary> {
        let algorithm = Algorithm::from_identifier(algorithm, self.config.graph_metric)?;
        self.summarize(text, language, algorithm, k)
    }

    /// Summarize an already analyzed document.
    ///
    /// When `k` is at least the sentence count every sentence is returned.
    pub fn summarize_document(
        &self,
        document: &Document,
        algorithm: Algorithm,
        k: usize,
    ) -> Result<Summary> {
        Self::check_k(k)?;
        if document.is_empty() {
            return Err(DistillError::empty_document("the document has no sentences"));
        }

        let deadline = self.config.deadline();
        let output = self.run_strategy(document, algorithm, k, &deadline);

        let n = document.len();
        let selected = if k >= n {
            self.selector.select_all(&output.ranking, n)
        } else {
            self.selector.select(&output.ranking, k)
        };

        for warning in &output.warnings {
            tracing::warn!(%algorithm, ?warning, "iterative routine stopped early");
        }
        tracing::debug!(%algorithm, k, sentences = n, selected = selected.len(), "summarized document");

        let sentences = selected
            .into_iter()
            .filter_map(|(position, score)| {
                document.sentence(position).map(|sentence| SummarySentence {
                    text: sentence.text.clone(),
                    position,
                    score,
                })
            })
            .collect();

        Ok(Summary {
            algorithm,
            sentences,
            warnings: output.warnings,
        })
    }

    /// Summarize `text` with every algorithm in [`Algorithm::ALL`], in parallel.
    pub fn summarize_all(
        &self,
        text: &str,
        language: &str,
        k: usize,
    ) -> Result<BTreeMap<Algorithm, Summary>> {
        Self::check_k(k)?;
        let document = self.parse(text, language)?;
        self.summarize_document_all(&document, k)
    }

    /// Run every algorithm on one shared document, in parallel.
    pub fn summarize_document_all(
        &self,
        document: &Document,
        k: usize,
    ) -> Result<BTreeMap<Algorithm, Summary>> {
        Algorithm::ALL
            .par_iter()
            .map(|&algorithm| {
                self.summarize_document(document, algorithm, k)
                    .map(|summary| (algorithm, summary))
            })
            .collect()
    }

    fn check_k(k: usize) -> Result<()> {
        if k == 0 {
            return Err(DistillError::invalid_request("k must be at least 1"));
        }
        Ok(())
    }

    fn run_strategy(
        &self,
        document: &Document,
        algorithm: Algorithm,
        k: usize,
        deadline: &Deadline,
    ) -> StrategyOutput {
        let k = k.min(document.len());
        match algorithm {
            Algorithm::Luhn => Luhn::new(&self.config).rank(document),
            Algorithm::SumBasic => SumBasic::new().rank(document, k, deadline),
            Algorithm::Kl => Kl::new()
                .with_stop_on_increase(self.config.kl_stop_on_increase)
                .rank(document, k, deadline),
            Algorithm::Lsa => Lsa::new(&self.config).rank(document, k, deadline),
            Algorithm::GraphRank(metric) => {
                GraphRank::new(metric, &self.config).rank(document, deadline)
            }
        }
    }
}
