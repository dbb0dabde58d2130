//! SumBasic: greedy selection with probability decay.
//!
//! 1. `p(w) = count(w) / total` over content terms.
//! 2. A sentence scores the average `p(w)` over its distinct content terms.
//! 3. The best sentence is picked (ties to the earlier one).
//! 4. Every term of the picked sentence decays: `p(w) ← p(w)²`.
//! 5. Repeat until `k` picks or no sentence is left.
//!
//! The probability table is local to one run.

use crate::document::document::Document;
use crate::error::SummaryWarning;
use crate::model::budget::{Deadline, Termination};
use crate::model::frequency::FrequencyModel;
use crate::summarizer::StrategyOutput;
use crate::summarizer::selector::Ranking;

/// Trace of one SumBasic run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SumBasicRun {
    /// `(position, score at pick time)` in pick order
    pub picks: Vec<(usize, f64)>,
    /// Initial word probabilities, indexed by term id
    pub initial_probabilities: Vec<f64>,
    /// Word probabilities after each pick
    pub probabilities: Vec<Vec<f64>>,
    /// Set when the deadline cut the run short
    pub termination: Option<Termination>,
}

/// SumBasic scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumBasic;

impl SumBasic {
    pub fn new() -> Self {
        SumBasic
    }

    /// Average probability over the distinct terms of a sentence.
    fn sentence_score(model: &FrequencyModel, position: usize, probabilities: &[f64]) -> f64 {
        let counts = model.sentence_counts(position);
        if counts.is_empty() {
            return 0.0;
        }
        let sum: f64 = counts.iter().map(|&(id, _)| probabilities[id]).sum();
        sum / counts.len() as f64
    }

    /// Run the selection on a prepared model.
    pub fn run(&self, model: &FrequencyModel, k: usize, deadline: &Deadline) -> SumBasicRun {
        let n = model.num_sentences();
        let initial = model.probabilities();
        let mut probabilities = initial.clone();
        let mut selected = vec![false; n];
        let mut run = SumBasicRun {
            initial_probabilities: initial,
            ..SumBasicRun::default()
        };

        while run.picks.len() < k.min(n) {
            if !run.picks.is_empty() && deadline.expired() {
                run.termination = Some(Termination::Deadline);
                break;
            }

            let mut best: Option<(usize, f64)> = None;
            for position in (0..n).filter(|&p| !selected[p]) {
                let score = Self::sentence_score(model, position, &probabilities);
                if best.is_none_or(|(_, best_score)| score > best_score) {
                    best = Some((position, score));
                }
            }
            let Some((position, score)) = best else {
                break;
            };

            selected[position] = true;
            for &(id, _) in model.sentence_counts(position) {
                probabilities[id] *= probabilities[id];
            }
            run.picks.push((position, score));
            run.probabilities.push(probabilities.clone());
            tracing::trace!(position, score, "sum_basic pick");
        }

        run
    }

    /// Pick up to `k` sentences of `document`.
    pub fn rank(&self, document: &Document, k: usize, deadline: &Deadline) -> StrategyOutput {
        let model = FrequencyModel::new(document);
        let run = self.run(&model, k, deadline);

        tracing::debug!(picks = run.picks.len(), "selected sentences with sum_basic");

        let warning = run.termination.map(|_| SummaryWarning::DeadlineExceeded {
            routine: "sum_basic".to_string(),
            iterations: run.picks.len(),
        });
        StrategyOutput::new(Ranking::Picked(run.picks)).with_warnings(warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::DocumentParser;

    fn model(text: &str) -> FrequencyModel {
        let doc = DocumentParser::builtin().parse(text, "english").unwrap();
        FrequencyModel::new(&doc)
    }

    const CATS: &str = "The cat sat. The cat sat on the mat. Dogs bark loudly.";

    #[test]
    fn test_cat_example_first_pick() {
        let run = SumBasic::new().run(&model(CATS), 1, &Deadline::none());

        // (0.25 + 0.25) / 2 beats (0.25 + 0.25 + 0.125) / 3.
        assert_eq!(run.picks.len(), 1);
        assert_eq!(run.picks[0].0, 0);
        assert!((run.picks[0].1 - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_decay_moves_on_to_new_topics() {
        let run = SumBasic::new().run(&model(CATS), 3, &Deadline::none());
        let order: Vec<usize> = run.picks.iter().map(|&(p, _)| p).collect();

        // After cat and sat decay to 1/16, the dog sentence beats sentence 1.
        assert_eq!(order, vec![0, 2, 1]);
    }

    #[test]
    fn test_probabilities_never_increase() {
        let model = model(
            "Rust is fast. Rust is safe. Safe code is good code. Fast code wins races. Races are fun.",
        );
        let run = SumBasic::new().run(&model, 5, &Deadline::none());

        let mut previous = run.initial_probabilities.clone();
        for table in &run.probabilities {
            for (before, after) in previous.iter().zip(table) {
                assert!(after <= before);
            }
            previous = table.clone();
        }
        assert_eq!(run.picks.len(), 5);
    }

    #[test]
    fn test_deterministic() {
        let model = model(
            "Apples bananas cherries. Bananas cherries dates. Cherries dates figs. Dates figs apples.",
        );
        let first = SumBasic::new().run(&model, 3, &Deadline::none());
        let second = SumBasic::new().run(&model, 3, &Deadline::none());

        assert_eq!(first, second);
    }

    #[test]
    fn test_deadline_keeps_first_pick() {
        let run = SumBasic::new().run(
            &model(CATS),
            3,
            &Deadline::after(std::time::Duration::ZERO),
        );

        assert_eq!(run.picks.len(), 1);
        assert_eq!(run.termination, Some(Termination::Deadline));
    }
}
