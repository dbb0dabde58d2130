//! Per-call models built from an analyzed [`Document`](crate::document::Document).
//!
//! Every model is a plain value constructed fresh for one summarization and
//! read-only afterwards, so strategies can run side by side on one document.
//!
//! - [`frequency::FrequencyModel`] - term and term-sentence counts (Luhn, SumBasic, KL)
//! - [`term_matrix::TermSentenceMatrix`] and [`svd::JacobiSvd`] - latent topics (LSA)
//! - [`similarity::SimilarityMatrix`] and [`graph::PowerIteration`] - graph ranking

pub mod budget;
pub mod frequency;
pub mod graph;
pub mod similarity;
pub mod svd;
pub mod term_matrix;

pub use budget::{Deadline, Termination};
pub use frequency::FrequencyModel;
pub use graph::{PowerIteration, RankResult};
pub use similarity::{SimilarityMatrix, SimilarityMetric};
pub use svd::{JacobiSvd, Svd};
pub use term_matrix::{TermSentenceMatrix, TermWeighting};
