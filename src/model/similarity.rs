//! Pairwise sentence similarity.
//!
//! All metrics are symmetric and bounded to `[0, 1]`. BM25 is directed by
//! nature (query sentence against document sentence), so each direction is
//! divided by the best score the query could reach and the two directions
//! are averaged.

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::model::frequency::FrequencyModel;

/// Similarity function used to weight the sentence graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMetric {
    /// Normalized common-term count `|A ∩ B| / sqrt(|A|·|B|)` over distinct
    /// content terms (TextRank).
    #[default]
    Overlap,
    /// Cosine of TF-IDF weighted term vectors (LexRank).
    Cosine,
    /// Okapi BM25 with every sentence as a query against every other
    /// (the TextRank variant of gensim).
    Bm25,
}

impl SimilarityMetric {
    /// Stable lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            SimilarityMetric::Overlap => "overlap",
            SimilarityMetric::Cosine => "cosine",
            SimilarityMetric::Bm25 => "bm25",
        }
    }
}

impl fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Square, symmetric matrix of sentence similarities in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    /// Row-major
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute all pairwise similarities of the model's sentences.
    pub fn build(model: &FrequencyModel, metric: SimilarityMetric) -> Self {
        let size = model.num_sentences();
        let vectors: Vec<Vec<(usize, f64)>> = (0..size)
            .map(|position| {
                model
                    .sentence_counts(position)
                    .iter()
                    .map(|&(id, count)| {
                        let weight = match metric {
                            SimilarityMetric::Overlap => 1.0,
                            SimilarityMetric::Cosine => count as f64 * model.idf(id),
                            SimilarityMetric::Bm25 => count as f64,
                        };
                        (id, weight)
                    })
                    .collect()
            })
            .collect();
        let bm25 = Bm25::new(model);

        let values: Vec<f64> = (0..size)
            .into_par_iter()
            .flat_map_iter(|i| {
                let vectors = &vectors;
                let bm25 = &bm25;
                (0..size).map(move |j| match metric {
                    SimilarityMetric::Overlap => overlap(&vectors[i], &vectors[j]),
                    SimilarityMetric::Cosine => cosine(&vectors[i], &vectors[j]),
                    SimilarityMetric::Bm25 => bm25.similarity(&vectors[i], i, &vectors[j], j),
                })
            })
            .collect();

        tracing::debug!(sentences = size, metric = %metric, "built similarity matrix");

        SimilarityMatrix { size, values }
    }

    /// Build a matrix from row-major values. `None` unless `values` is square.
    pub fn from_values(size: usize, values: Vec<f64>) -> Option<Self> {
        (values.len() == size * size).then_some(SimilarityMatrix { size, values })
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Similarity of sentences `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Row `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }
}

/// Both vectors are sorted by term id.
fn dot(a: &[(usize, f64)], b: &[(usize, f64)]) -> (f64, usize) {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    let mut common = 0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                common += 1;
                i += 1;
                j += 1;
            }
        }
    }
    (sum, common)
}

fn overlap(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let (_, common) = dot(a, b);
    (common as f64 / ((a.len() * b.len()) as f64).sqrt()).min(1.0)
}

fn cosine(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let norm_a = a.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let (sum, _) = dot(a, b);
    (sum / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// BM25 term saturation.
pub const BM25_K1: f64 = 1.2;
/// BM25 length normalization.
pub const BM25_B: f64 = 0.75;

/// Sentence-level BM25 statistics.
#[derive(Debug, Clone)]
struct Bm25 {
    idf: Vec<f64>,
    lengths: Vec<f64>,
    average_length: f64,
}

impl Bm25 {
    fn new(model: &FrequencyModel) -> Self {
        let n = model.num_sentences() as f64;
        // ln(1 + (N - df + 0.5) / (df + 0.5)) stays positive for common terms.
        let idf = (0..model.num_terms())
            .map(|id| {
                let df = model.df(id) as f64;
                (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
            })
            .collect();
        let lengths: Vec<f64> = (0..model.num_sentences())
            .map(|position| model.sentence_length(position) as f64)
            .collect();
        let average_length = if lengths.is_empty() {
            0.0
        } else {
            lengths.iter().sum::<f64>() / lengths.len() as f64
        };

        Bm25 {
            idf,
            lengths,
            average_length,
        }
    }

    /// Score of `query` against `document`, divided by the query's maximum
    /// `Σ idf · (k1 + 1)`.
    fn directed(&self, query: &[(usize, f64)], document: &[(usize, f64)], length: f64) -> f64 {
        let best: f64 = query.iter().map(|&(id, _)| self.idf[id] * (BM25_K1 + 1.0)).sum();
        if best <= 0.0 {
            return 0.0;
        }

        let norm = if self.average_length > 0.0 {
            1.0 - BM25_B + BM25_B * length / self.average_length
        } else {
            1.0
        };

        let (mut i, mut j) = (0, 0);
        let mut score = 0.0;
        while i < query.len() && j < document.len() {
            match query[i].0.cmp(&document[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    let tf = document[j].1;
                    score += self.idf[query[i].0] * tf * (BM25_K1 + 1.0) / (tf + BM25_K1 * norm);
                    i += 1;
                    j += 1;
                }
            }
        }
        score / best
    }

    fn similarity(&self, a: &[(usize, f64)], i: usize, b: &[(usize, f64)], j: usize) -> f64 {
        let forward = self.directed(a, b, self.lengths[j]);
        let backward = self.directed(b, a, self.lengths[i]);
        ((forward + backward) / 2.0).clamp(0.0, 1.0)
    }
}
