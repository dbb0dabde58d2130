//! Algorithm identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DistillError;
use crate::model::similarity::SimilarityMetric;

/// The closed set of scoring strategies.
///
/// Serialized as its identifier string (`"luhn"`, `"lexrank"`, ...).
///
/// ```
/// use distill::model::similarity::SimilarityMetric;
/// use distill::summarizer::Algorithm;
///
/// let algorithm: Algorithm = "LexRank".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::GraphRank(SimilarityMetric::Cosine));
/// assert_eq!(algorithm.to_string(), "lexrank");
/// assert!("magic".parse::<Algorithm>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Algorithm {
    /// Luhn's significant-word clusters
    Luhn,
    /// SumBasic probability decay
    SumBasic,
    /// Greedy KL-divergence minimization
    ///
    /// With the default `kl_stop_on_increase = true` this usually returns a
    /// single sentence whatever `k` is; set it to `false` to always get `k`.
    Kl,
    /// Latent semantic analysis
    Lsa,
    /// Similarity graph ranking (TextRank with `Overlap`, LexRank with
    /// `Cosine`, gensim's TextRank with `Bm25`)
    GraphRank(SimilarityMetric),
}

impl Algorithm {
    /// Every concrete strategy, in comparison order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Luhn,
        Algorithm::Lsa,
        Algorithm::GraphRank(SimilarityMetric::Overlap),
        Algorithm::GraphRank(SimilarityMetric::Cosine),
        Algorithm::GraphRank(SimilarityMetric::Bm25),
        Algorithm::SumBasic,
        Algorithm::Kl,
    ];

    /// Canonical identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Luhn => "luhn",
            Algorithm::SumBasic => "sum_basic",
            Algorithm::Kl => "kl",
            Algorithm::Lsa => "lsa",
            Algorithm::GraphRank(SimilarityMetric::Overlap) => "textrank",
            Algorithm::GraphRank(SimilarityMetric::Cosine) => "lexrank",
            Algorithm::GraphRank(SimilarityMetric::Bm25) => "bm25",
        }
    }

    /// Parse an identifier; the bare `graphrank` resolves to `graph_metric`.
    ///
    /// Matching ignores case and `_`, `-` and space separators.
    pub fn from_identifier(identifier: &str, graph_metric: SimilarityMetric) -> Result<Self, DistillError> {
        let key: String = identifier
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "luhn" => Ok(Algorithm::Luhn),
            "sumbasic" => Ok(Algorithm::SumBasic),
            "kl" | "kldivergence" | "klsum" => Ok(Algorithm::Kl),
            "lsa" => Ok(Algorithm::Lsa),
            "textrank" => Ok(Algorithm::GraphRank(SimilarityMetric::Overlap)),
            "lexrank" => Ok(Algorithm::GraphRank(SimilarityMetric::Cosine)),
            "bm25" | "bm25rank" | "gensim" => Ok(Algorithm::GraphRank(SimilarityMetric::Bm25)),
            "graphrank" => Ok(Algorithm::GraphRank(graph_metric)),
            _ => Err(DistillError::unknown_algorithm(identifier)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = DistillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_identifier(s, SimilarityMetric::default())
    }
}

impl From<Algorithm> for String {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.name().to_string()
    }
}

impl TryFrom<String> for Algorithm {
    type Error = DistillError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
