//! Summarizer configuration.
//!
//! ```
//! use distill::summarizer::config::{LsaPolicy, SummarizerConfig};
//!
//! let config = SummarizerConfig::default()
//!     .with_damping_factor(0.9)
//!     .with_lsa_policy(LsaPolicy::Ranked);
//! config.validate().unwrap();
//!
//! let json = config.to_json().unwrap();
//! assert_eq!(SummarizerConfig::from_json(&json).unwrap(), config);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{DistillError, Result};
use crate::model::budget::Deadline;
use crate::model::graph::PowerIteration;
use crate::model::similarity::SimilarityMetric;
use crate::model::svd::JacobiSvd;
use crate::model::term_matrix::TermWeighting;

/// How LSA turns the decomposition into a selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LsaPolicy {
    /// One sentence per topic, topics in order of descending singular value.
    #[default]
    TopicExhaustive,
    /// Rank all sentences by `sqrt(Σ σ_i² · v_i²)`.
    Ranked,
}

/// Options recognised by every strategy. Unknown JSON keys are rejected,
/// missing ones take their default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummarizerConfig {
    /// Damping factor of the graph ranking (GraphRank only)
    pub damping_factor: f64,

    /// L1 convergence threshold of the power iteration
    pub convergence_epsilon: f64,

    /// Iteration cap of the power iteration
    pub max_iterations: usize,

    /// Largest distance, in tokens, between two significant words of one Luhn cluster
    pub luhn_cluster_gap: usize,

    /// Number of most frequent terms Luhn treats as significant
    pub top_word_count: usize,

    /// Minimum number of occurrences of a significant Luhn term
    pub luhn_min_term_frequency: usize,

    /// LSA topic count; `None` uses the requested summary length
    pub lsa_topic_count: Option<usize>,

    /// LSA selection policy
    pub lsa_policy: LsaPolicy,

    /// Cell weighting of the LSA term-sentence matrix
    pub term_weighting: TermWeighting,

    /// Sweep cap of the Jacobi SVD
    pub svd_max_sweeps: usize,

    /// Stop KL growth once every candidate would increase the divergence
    pub kl_stop_on_increase: bool,

    /// Optional wall-clock budget per call, checked between iterations
    pub deadline_ms: Option<u64>,

    /// Similarity metric behind the bare `graphrank` identifier
    pub graph_metric: SimilarityMetric,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        SummarizerConfig {
            damping_factor: 0.85,
            convergence_epsilon: 1e-4,
            max_iterations: 100,
            luhn_cluster_gap: 4,
            top_word_count: 100,
            luhn_min_term_frequency: 2,
            lsa_topic_count: None,
            lsa_policy: LsaPolicy::default(),
            term_weighting: TermWeighting::default(),
            svd_max_sweeps: 60,
            kl_stop_on_increase: true,
            deadline_ms: None,
            graph_metric: SimilarityMetric::default(),
        }
    }
}

impl SummarizerConfig {
    pub fn with_damping_factor(mut self, damping_factor: f64) -> Self {
        self.damping_factor = damping_factor;
        self
    }

    pub fn with_convergence_epsilon(mut self, epsilon: f64) -> Self {
        self.convergence_epsilon = epsilon;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_luhn_cluster_gap(mut self, gap: usize) -> Self {
        self.luhn_cluster_gap = gap;
        self
    }

    pub fn with_top_word_count(mut self, count: usize) -> Self {
        self.top_word_count = count;
        self
    }

    pub fn with_luhn_min_term_frequency(mut self, frequency: usize) -> Self {
        self.luhn_min_term_frequency = frequency;
        self
    }

    pub fn with_lsa_topic_count(mut self, topics: Option<usize>) -> Self {
        self.lsa_topic_count = topics;
        self
    }

    pub fn with_lsa_policy(mut self, policy: LsaPolicy) -> Self {
        self.lsa_policy = policy;
        self
    }

    pub fn with_term_weighting(mut self, weighting: TermWeighting) -> Self {
        self.term_weighting = weighting;
        self
    }

    pub fn with_svd_max_sweeps(mut self, sweeps: usize) -> Self {
        self.svd_max_sweeps = sweeps;
        self
    }

    pub fn with_kl_stop_on_increase(mut self, stop_on_increase: bool) -> Self {
        self.kl_stop_on_increase = stop_on_increase;
        self
    }

    pub fn with_deadline_ms(mut self, deadline_ms: Option<u64>) -> Self {
        self.deadline_ms = deadline_ms;
        self
    }

    pub fn with_graph_metric(mut self, metric: SimilarityMetric) -> Self {
        self.graph_metric = metric;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let damping = self.damping_factor;
        if damping.is_nan() || damping <= 0.0 || damping >= 1.0 {
            return Err(DistillError::invalid_config(format!(
                "damping_factor must be in (0, 1), got {}",
                self.damping_factor
            )));
        }
        if self.convergence_epsilon.is_nan() || self.convergence_epsilon <= 0.0 {
            return Err(DistillError::invalid_config(format!(
                "convergence_epsilon must be positive, got {}",
                self.convergence_epsilon
            )));
        }
        if self.max_iterations == 0 {
            return Err(DistillError::invalid_config("max_iterations must be at least 1"));
        }
        if self.top_word_count == 0 {
            return Err(DistillError::invalid_config("top_word_count must be at least 1"));
        }
        if self.luhn_min_term_frequency == 0 {
            return Err(DistillError::invalid_config(
                "luhn_min_term_frequency must be at least 1",
            ));
        }
        if self.svd_max_sweeps == 0 {
            return Err(DistillError::invalid_config("svd_max_sweeps must be at least 1"));
        }
        if self.lsa_topic_count == Some(0) {
            return Err(DistillError::invalid_config("lsa_topic_count must be at least 1"));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SummarizerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Power iteration configured from these options.
    pub fn power_iteration(&self) -> PowerIteration {
        PowerIteration::new()
            .with_damping(self.damping_factor)
            .with_max_iterations(self.max_iterations)
            .with_threshold(self.convergence_epsilon)
    }

    /// Jacobi SVD configured from these options.
    pub fn jacobi_svd(&self) -> JacobiSvd {
        JacobiSvd::new().with_max_sweeps(self.svd_max_sweeps)
    }

    /// Deadline for a call starting now.
    pub fn deadline(&self) -> Deadline {
        Deadline::from_millis(self.deadline_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SummarizerConfig::default();

        assert_eq!(config.damping_factor, 0.85);
        assert_eq!(config.convergence_epsilon, 1e-4);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.luhn_cluster_gap, 4);
        assert_eq!(config.top_word_count, 100);
        assert_eq!(config.lsa_topic_count, None);
        assert!(config.validate().is_ok());
        assert!(!config.deadline().is_set());
    }

    #[test]
    fn test_validation() {
        let invalid = [
            SummarizerConfig::default().with_damping_factor(1.0),
            SummarizerConfig::default().with_damping_factor(0.0),
            SummarizerConfig::default().with_damping_factor(f64::NAN),
            SummarizerConfig::default().with_convergence_epsilon(0.0),
            SummarizerConfig::default().with_max_iterations(0),
            SummarizerConfig::default().with_top_word_count(0),
            SummarizerConfig::default().with_luhn_min_term_frequency(0),
            SummarizerConfig::default().with_svd_max_sweeps(0),
            SummarizerConfig::default().with_lsa_topic_count(Some(0)),
        ];
        for config in invalid {
            assert!(matches!(config.validate(), Err(DistillError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_json() {
        let config = SummarizerConfig::from_json(
            r#"{"damping_factor": 0.5, "graph_metric": "cosine", "term_weighting": "log"}"#,
        )
        .unwrap();

        assert_eq!(config.damping_factor, 0.5);
        assert_eq!(config.graph_metric, SimilarityMetric::Cosine);
        assert_eq!(config.term_weighting, TermWeighting::Log);
        assert_eq!(config.max_iterations, 100);

        assert!(matches!(
            SummarizerConfig::from_json(r#"{"damping_factor": 2.0}"#),
            Err(DistillError::InvalidConfig(_))
        ));
        assert!(matches!(
            SummarizerConfig::from_json(r#"{"no_such_option": 1}"#),
            Err(DistillError::Json(_))
        ));
    }
}
