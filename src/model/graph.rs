//! Stationary ranking of the sentence similarity graph.
//!
//! The graph is the complete graph over sentences weighted by a
//! [`SimilarityMatrix`]. Each row (self-similarity excluded) is normalized into
//! a transition distribution, and the ranking is the fixed point of
//!
//! ```text
//! p' = (1 - d) + d · Mᵀ p
//! ```
//!
//! found by power iteration from a uniform start. Sentences whose row has no
//! off-diagonal mass pass nothing on and keep only the `1 - d` base score.

use crate::model::budget::{Deadline, Termination};
use crate::model::similarity::SimilarityMatrix;

/// Result of a ranking computation.
#[derive(Debug, Clone)]
pub struct RankResult {
    /// Score per sentence position
    pub scores: Vec<f64>,
    /// Iterations performed
    pub iterations: usize,
    /// L1 distance between the last two iterates
    pub delta: f64,
    /// Why the iteration stopped
    pub termination: Termination,
}

impl RankResult {
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, termination: Termination) -> Self {
        Self {
            scores,
            iterations,
            delta,
            termination,
        }
    }

    /// Whether the convergence threshold was reached.
    pub fn converged(&self) -> bool {
        self.termination.is_converged()
    }

    /// Score of a sentence, 0.0 when out of range.
    pub fn score(&self, position: usize) -> f64 {
        self.scores.get(position).copied().unwrap_or(0.0)
    }
}

/// Damped power iteration over a similarity graph.
#[derive(Debug, Clone)]
pub struct PowerIteration {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 delta
    pub threshold: f64,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-4,
        }
    }
}

impl PowerIteration {
    /// Create a new PowerIteration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Rank the sentences of `matrix`.
    ///
    /// Returns the last iterate even if convergence wasn't achieved.
    pub fn run(&self, matrix: &SimilarityMatrix, deadline: &Deadline) -> RankResult {
        let n = matrix.len();
        if n == 0 {
            return RankResult::new(vec![], 0, 0.0, Termination::Converged);
        }

        // Off-diagonal row sums
        let out_weight: Vec<f64> = (0..n)
            .map(|i| {
                matrix
                    .row(i)
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, w)| w)
                    .sum()
            })
            .collect();

        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];
        let base = 1.0 - self.damping;
        let mut iterations = 0;
        let mut delta = f64::INFINITY;
        let mut termination = Termination::IterationCap;

        while iterations < self.max_iterations {
            if deadline.expired() {
                termination = Termination::Deadline;
                break;
            }
            iterations += 1;

            new_scores.fill(base);
            for (i, &score) in scores.iter().enumerate() {
                let total = out_weight[i];
                if total <= 0.0 {
                    continue;
                }
                for (j, &weight) in matrix.row(i).iter().enumerate() {
                    if j != i && weight > 0.0 {
                        new_scores[j] += self.damping * score * weight / total;
                    }
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
            tracing::trace!(iterations, delta, "power iteration");

            if delta < self.threshold {
                termination = Termination::Converged;
                break;
            }
        }

        tracing::debug!(
            sentences = n,
            iterations,
            delta,
            converged = termination.is_converged(),
            "ranked similarity graph"
        );

        RankResult::new(scores, iterations, delta, termination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(size: usize, values: Vec<f64>) -> SimilarityMatrix {
        SimilarityMatrix::from_values(size, values).unwrap()
    }

    #[test]
    fn test_identical_sentences_rank_uniformly() {
        let result = PowerIteration::new().run(&matrix(4, vec![1.0; 16]), &Deadline::none());

        assert!(result.converged());
        for score in &result.scores {
            assert!((score - result.scores[0]).abs() < 1e-12);
        }
        assert!((result.scores[0] - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_hub_ranks_highest() {
        // Sentence 0 is similar to everyone, the others only to 0.
        #[rustfmt::skip]
        let values = vec![
            1.0, 0.5, 0.5, 0.5,
            0.5, 1.0, 0.0, 0.0,
            0.5, 0.0, 1.0, 0.0,
            0.5, 0.0, 0.0, 1.0,
        ];
        let result = PowerIteration::new().run(&matrix(4, values), &Deadline::none());

        assert!(result.converged());
        assert!(result.score(0) > result.score(1));
        assert!((result.score(1) - result.score(3)).abs() < 1e-9);
    }

    #[test]
    fn test_isolated_sentence_keeps_base_score() {
        #[rustfmt::skip]
        let values = vec![
            1.0, 0.8, 0.0,
            0.8, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ];
        let result = PowerIteration::new().run(&matrix(3, values), &Deadline::none());

        assert!((result.score(2) - 0.15).abs() < 1e-12);
        assert!((result.score(0) - result.score(1)).abs() < 1e-12);
        assert_eq!(result.score(7), 0.0);
    }

    #[test]
    fn test_iteration_cap_returns_last_iterate() {
        let values = vec![1.0, 1.0, 1.0, 1.0];
        let result = PowerIteration::new()
            .with_max_iterations(1)
            .with_threshold(1e-12)
            .run(&matrix(2, values), &Deadline::none());

        assert!(!result.converged());
        assert_eq!(result.termination, Termination::IterationCap);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.scores.len(), 2);
    }

    #[test]
    fn test_deadline() {
        let result = PowerIteration::new().run(
            &matrix(2, vec![1.0; 4]),
            &Deadline::after(std::time::Duration::ZERO),
        );

        assert_eq!(result.termination, Termination::Deadline);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.scores, vec![0.5, 0.5]);
    }

    #[test]
    fn test_empty_graph() {
        let result = PowerIteration::new().run(&matrix(0, vec![]), &Deadline::none());
        assert!(result.converged());
        assert!(result.scores.is_empty());
    }
}
