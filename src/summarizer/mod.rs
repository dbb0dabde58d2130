//! Extractive summarization strategies and the [`Summarizer`] facade.
//!
//! Five strategies share one pipeline: the document is analyzed once, each
//! strategy builds the models it needs, scores or picks sentences, and the
//! [`SentenceSelector`](selector::SentenceSelector) turns that into a top-k
//! selection in document order.
//!
//! | Algorithm | Model | Output |
//! |---|---|---|
//! | [`luhn::Luhn`] | frequency | score per sentence |
//! | [`sum_basic::SumBasic`] | frequency | picks |
//! | [`kl::Kl`] | frequency | picks |
//! | [`lsa::Lsa`] | term matrix + SVD | picks or scores |
//! | [`graph_rank::GraphRank`] | similarity graph | score per sentence |

pub mod algorithm;
pub mod config;
pub mod engine;
pub mod graph_rank;
pub mod kl;
pub mod lsa;
pub mod luhn;
pub mod selector;
pub mod sum_basic;
pub mod summary;

pub use algorithm::Algorithm;
pub use config::{LsaPolicy, SummarizerConfig};
pub use engine::Summarizer;
pub use selector::{Ranking, ScoreVector, SentenceSelector};
pub use summary::{Summary, SummarySentence};

use crate::error::SummaryWarning;

/// What one strategy produced for one document.
#[derive(Clone, Debug, PartialEq)]
pub struct StrategyOutput {
    pub ranking: Ranking,
    pub warnings: Vec<SummaryWarning>,
}

impl StrategyOutput {
    pub fn new(ranking: Ranking) -> Self {
        StrategyOutput {
            ranking,
            warnings: Vec::new(),
        }
    }

    /// Attach warnings raised while producing the ranking.
    pub fn with_warnings<I>(mut self, warnings: I) -> Self
    where
        I: IntoIterator<Item = SummaryWarning>,
    {
        self.warnings.extend(warnings);
        self
    }
}
