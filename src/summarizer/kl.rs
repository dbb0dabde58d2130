//! Greedy KL-divergence summarization.
//!
//! The summary `S` is grown one sentence at a time, each time adding the
//! sentence that minimizes
//!
//! ```text
//! KL(PD ‖ PS) = Σ_w PD(w) · ln(PD(w) / PS(w))
//! ```
//!
//! where `PD` is the document's unigram distribution and `PS` the
//! distribution of `S ∪ {candidate}`. Terms absent from the candidate summary
//! (`PS(w) = 0`) contribute nothing. Growth stops at `k` sentences, or as soon
//! as every candidate would increase the divergence. Exact subset
//! minimization is NP-hard; this is the usual greedy approximation.
//!
//! Because absent terms are skipped, a small summary of rare words can score
//! below zero and adding sentences tends to raise the value towards zero. With
//! `stop_on_increase` the run therefore often ends after few picks; turning it
//! off always fills `k` picks with the best available candidate.

use crate::document::document::Document;
use crate::error::SummaryWarning;
use crate::model::budget::{Deadline, Termination};
use crate::model::frequency::FrequencyModel;
use crate::summarizer::StrategyOutput;
use crate::summarizer::selector::Ranking;

/// Trace of one greedy KL run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KlRun {
    /// `(position, -divergence after the pick)` in pick order
    pub picks: Vec<(usize, f64)>,
    /// Divergence of the summary after each pick
    pub divergences: Vec<f64>,
    /// Set when the deadline cut the run short
    pub termination: Option<Termination>,
}

/// KL scorer.
#[derive(Debug, Clone, Copy)]
pub struct Kl {
    stop_on_increase: bool,
}

impl Default for Kl {
    fn default() -> Self {
        Kl {
            stop_on_increase: true,
        }
    }
}

impl Kl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to stop once every candidate would increase the divergence.
    pub fn with_stop_on_increase(mut self, stop_on_increase: bool) -> Self {
        self.stop_on_increase = stop_on_increase;
        self
    }

    /// `KL(PD ‖ PS)` for summary term counts `counts` totalling `total`.
    fn divergence(document_probabilities: &[f64], counts: &[usize], total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;
        document_probabilities
            .iter()
            .zip(counts)
            .filter(|&(&pd, &count)| pd > 0.0 && count > 0)
            .map(|(&pd, &count)| pd * (pd / (count as f64 / total)).ln())
            .sum()
    }

    /// Run the greedy search on a prepared model.
    ///
    /// Sentences without content terms cannot change `PS` and are never picked.
    pub fn run(&self, model: &FrequencyModel, k: usize, deadline: &Deadline) -> KlRun {
        let n = model.num_sentences();
        let pd = model.probabilities();
        let mut counts = vec![0usize; model.num_terms()];
        let mut total = 0;
        let mut selected = vec![false; n];
        let mut current = f64::INFINITY;
        let mut run = KlRun::default();

        while run.picks.len() < k.min(n) {
            if !run.picks.is_empty() && deadline.expired() {
                run.termination = Some(Termination::Deadline);
                break;
            }

            let mut best: Option<(usize, f64)> = None;
            for position in 0..n {
                if selected[position] || model.sentence_length(position) == 0 {
                    continue;
                }
                let sentence = model.sentence_counts(position);
                for &(id, count) in sentence {
                    counts[id] += count;
                }
                let divergence =
                    Self::divergence(&pd, &counts, total + model.sentence_length(position));
                for &(id, count) in sentence {
                    counts[id] -= count;
                }

                if best.is_none_or(|(_, best_divergence)| divergence < best_divergence) {
                    best = Some((position, divergence));
                }
            }

            let Some((position, divergence)) = best else {
                break;
            };
            if self.stop_on_increase && divergence > current {
                tracing::trace!(divergence, current, "kl divergence would increase, stopping");
                break;
            }

            selected[position] = true;
            for &(id, count) in model.sentence_counts(position) {
                counts[id] += count;
            }
            total += model.sentence_length(position);
            current = divergence;
            run.picks.push((position, -divergence));
            run.divergences.push(divergence);
            tracing::trace!(position, divergence, "kl pick");
        }

        run
    }

    /// Pick up to `k` sentences of `document`.
    pub fn rank(&self, document: &Document, k: usize, deadline: &Deadline) -> StrategyOutput {
        let model = FrequencyModel::new(document);
        let run = self.run(&model, k, deadline);

        tracing::debug!(
            picks = run.picks.len(),
            divergence = run.divergences.last().copied().unwrap_or(f64::NAN),
            "selected sentences with kl"
        );

        let warning = run.termination.map(|_| SummaryWarning::DeadlineExceeded {
            routine: "kl".to_string(),
            iterations: run.picks.len(),
        });
        StrategyOutput::new(Ranking::Picked(run.picks)).with_warnings(warning)
    }
}
