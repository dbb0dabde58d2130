//! Latent semantic analysis.
//!
//! The term × sentence matrix `A` is factored as `A = U·Σ·Vᵗ`. Each right
//! singular vector is a latent topic and its entries say how strongly each
//! sentence expresses it; σ says how important the topic is.
//!
//! - [`LsaPolicy::TopicExhaustive`]: for each topic in order of descending σ,
//!   pick the not yet chosen sentence with the largest `|Vᵗ[i][j]|`. When the
//!   topics run out before `k` picks, the rest are filled by the ranked score.
//! - [`LsaPolicy::Ranked`]: score every sentence by `sqrt(Σ_i σ_i² · Vᵗ[i][j]²)`
//!   over the retained topics.

use crate::document::document::Document;
use crate::model::budget::Deadline;
use crate::model::frequency::FrequencyModel;
use crate::model::svd::{JacobiSvd, Svd};
use crate::model::term_matrix::{TermSentenceMatrix, TermWeighting};
use crate::summarizer::StrategyOutput;
use crate::summarizer::config::{LsaPolicy, SummarizerConfig};
use crate::summarizer::selector::{Ranking, ScoreVector};

/// LSA scorer.
#[derive(Debug, Clone)]
pub struct Lsa {
    policy: LsaPolicy,
    weighting: TermWeighting,
    topic_count: Option<usize>,
    svd: JacobiSvd,
}

impl Lsa {
    pub fn new(config: &SummarizerConfig) -> Self {
        Lsa {
            policy: config.lsa_policy,
            weighting: config.term_weighting,
            topic_count: config.lsa_topic_count,
            svd: config.jacobi_svd(),
        }
    }

    /// Decompose the document's term × sentence matrix.
    pub fn decompose(&self, document: &Document, deadline: &Deadline) -> Svd {
        let model = FrequencyModel::new(document);
        let matrix = TermSentenceMatrix::from_model(&model, self.weighting);
        self.svd.decompose(matrix, deadline)
    }

    /// Topics to keep for a summary of `k` sentences.
    fn topics(&self, svd: &Svd, k: usize) -> usize {
        self.topic_count
            .map_or(k, |topics| topics.max(k))
            .min(svd.rank())
    }

    /// `sqrt(Σ σ_i² · v_ij²)` over the first `topics` components.
    pub fn ranked_scores(svd: &Svd, topics: usize, sentences: usize) -> ScoreVector {
        let scores = (0..sentences)
            .map(|j| {
                svd.singular_values
                    .iter()
                    .zip(&svd.right_vectors)
                    .take(topics)
                    .map(|(sigma, v)| (sigma * v[j]).powi(2))
                    .sum::<f64>()
                    .sqrt()
            })
            .collect();
        ScoreVector::new(scores)
    }

    /// One sentence per topic, then fill from the ranked scores.
    pub fn topic_picks(svd: &Svd, topics: usize, sentences: usize, k: usize) -> Vec<(usize, f64)> {
        let mut chosen = vec![false; sentences];
        let mut picks = Vec::with_capacity(k.min(sentences));

        for (sigma, v) in svd.singular_values.iter().zip(&svd.right_vectors).take(topics) {
            if picks.len() >= k {
                break;
            }
            let mut best: Option<(usize, f64)> = None;
            for (j, weight) in v.iter().enumerate().take(sentences) {
                if chosen[j] {
                    continue;
                }
                let magnitude = weight.abs();
                if best.is_none_or(|(_, best_magnitude)| magnitude > best_magnitude) {
                    best = Some((j, magnitude));
                }
            }
            let Some((j, magnitude)) = best else {
                break;
            };
            chosen[j] = true;
            picks.push((j, sigma * magnitude));
        }

        if picks.len() < k {
            let ranked = Self::ranked_scores(svd, topics, sentences);
            for j in ranked.ranked() {
                if picks.len() >= k {
                    break;
                }
                if !chosen[j] {
                    chosen[j] = true;
                    picks.push((j, ranked.get(j)));
                }
            }
        }

        picks
    }

    /// Score or pick sentences of `document` for a summary of `k`.
    pub fn rank(&self, document: &Document, k: usize, deadline: &Deadline) -> StrategyOutput {
        let svd = self.decompose(document, deadline);
        let topics = self.topics(&svd, k);
        let sentences = document.len();

        tracing::debug!(
            rank = svd.rank(),
            topics,
            policy = ?self.policy,
            "scored sentences with lsa"
        );

        let ranking = match self.policy {
            LsaPolicy::TopicExhaustive => Ranking::Picked(Self::topic_picks(&svd, topics, sentences, k)),
            LsaPolicy::Ranked => Ranking::Scored(Self::ranked_scores(&svd, topics, sentences)),
        };

        StrategyOutput::new(ranking).with_warnings(svd.termination.warning(
            "svd",
            svd.sweeps,
            svd.off_diagonal,
        ))
    }
}

impl Default for Lsa {
    fn default() -> Self {
        Self::new(&SummarizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::DocumentParser;

    fn parse(text: &str) -> Document {
        DocumentParser::builtin().parse(text, "english").unwrap()
    }

    const TOPICS: &str = "Cats purr softly. Cats purr loudly. Rockets launch satellites. \
                          Rockets launch probes. Bread needs flour.";

    #[test]
    fn test_one_sentence_per_topic() {
        let doc = parse(TOPICS);
        let lsa = Lsa::default();
        let svd = lsa.decompose(&doc, &Deadline::none());
        let rank = svd.rank();

        let picks = Lsa::topic_picks(&svd, rank, doc.len(), rank);
        assert_eq!(picks.len(), rank);

        let mut positions: Vec<usize> = picks.iter().map(|&(p, _)| p).collect();
        positions.sort_unstable();
        positions.dedup();
        assert_eq!(positions.len(), rank);
    }

    #[test]
    fn test_topics_cover_distinct_subjects() {
        let doc = parse(TOPICS);
        let output = Lsa::default().rank(&doc, 3, &Deadline::none());

        let Ranking::Picked(picks) = output.ranking else {
            panic!("expected picks");
        };
        let positions: Vec<usize> = picks.iter().map(|&(p, _)| p).collect();
        assert_eq!(positions.len(), 3);
        // Never both cat sentences, never both rocket sentences.
        assert!(!(positions.contains(&0) && positions.contains(&1)));
        assert!(!(positions.contains(&2) && positions.contains(&3)));
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn test_fill_when_topics_run_out() {
        // Three identical sentences: rank 1.
        let doc = parse("Cats purr. Cats purr. Cats purr.");
        let lsa = Lsa::default();
        let svd = lsa.decompose(&doc, &Deadline::none());
        assert_eq!(svd.rank(), 1);

        let picks = Lsa::topic_picks(&svd, 1, doc.len(), 3);
        let mut positions: Vec<usize> = picks.iter().map(|&(p, _)| p).collect();
        positions.sort_unstable();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_topic_count_never_below_k() {
        let doc = parse(TOPICS);
        let lsa = Lsa::new(&SummarizerConfig::default().with_lsa_topic_count(Some(2)));
        let svd = lsa.decompose(&doc, &Deadline::none());

        assert_eq!(lsa.topics(&svd, 1), 2);
        assert_eq!(lsa.topics(&svd, 4), 4);
        assert_eq!(lsa.topics(&svd, 9), 5);
    }

    #[test]
    fn test_ranked_policy() {
        let doc = parse(TOPICS);
        let config = SummarizerConfig::default().with_lsa_policy(LsaPolicy::Ranked);
        let output = Lsa::new(&config).rank(&doc, 2, &Deadline::none());

        let Ranking::Scored(scores) = output.ranking else {
            panic!("expected scores");
        };
        assert_eq!(scores.len(), 5);
        assert!(scores.as_slice().iter().all(|&s| s >= 0.0));
    }

    #[test]
    fn test_ranked_scores_use_all_topics_reproduce_column_norms() {
        // With every topic retained, the score is the column norm of A.
        let doc = parse(TOPICS);
        let lsa = Lsa::default();
        let svd = lsa.decompose(&doc, &Deadline::none());
        let scores = Lsa::ranked_scores(&svd, svd.singular_values.len(), doc.len());

        let model = FrequencyModel::new(&doc);
        for j in 0..doc.len() {
            let norm: f64 = model
                .sentence_counts(j)
                .iter()
                .map(|&(_, c)| (c * c) as f64)
                .sum::<f64>()
                .sqrt();
            assert!((scores.get(j) - norm).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sweep_cap_warns() {
        let doc = parse(TOPICS);
        let config = SummarizerConfig::default().with_svd_max_sweeps(1);
        let output = Lsa::new(&config).rank(&doc, 2, &Deadline::none());

        assert_eq!(output.warnings.len(), 1);
        assert_eq!(output.warnings[0].routine(), "svd");
    }
}
