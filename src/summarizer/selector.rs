//! Top-k sentence selection.
//!
//! Selection is deterministic: higher score first, ties to the earlier
//! sentence. Whatever the strategy, the selected sentences are returned in
//! document order.

use serde::{Deserialize, Serialize};

/// One score per sentence position, produced fresh by a strategy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    scores: Vec<f64>,
}

impl ScoreVector {
    pub fn new(scores: Vec<f64>) -> Self {
        ScoreVector { scores }
    }

    /// All-zero scores for `len` sentences.
    pub fn zeros(len: usize) -> Self {
        ScoreVector::new(vec![0.0; len])
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Score of a sentence, 0.0 when out of range.
    pub fn get(&self, position: usize) -> f64 {
        self.scores.get(position).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, position: usize, score: f64) {
        if let Some(slot) = self.scores.get_mut(position) {
            *slot = score;
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }

    /// Positions ordered by descending score, ties by ascending position.
    pub fn ranked(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = (0..self.scores.len()).collect();
        positions.sort_by(|&a, &b| {
            self.scores[b]
                .total_cmp(&self.scores[a])
                .then(a.cmp(&b))
        });
        positions
    }
}

/// What a strategy hands to the selector.
#[derive(Clone, Debug, PartialEq)]
pub enum Ranking {
    /// A score for every sentence.
    Scored(ScoreVector),
    /// Sentences chosen one at a time by the strategy itself, in pick order,
    /// with the score each had when it was picked.
    Picked(Vec<(usize, f64)>),
}

impl Ranking {
    /// Number of positions this ranking can contribute.
    pub fn len(&self) -> usize {
        match self {
            Ranking::Scored(scores) => scores.len(),
            Ranking::Picked(picks) => picks.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Picks the summary sentences out of a [`Ranking`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SentenceSelector;

impl SentenceSelector {
    pub fn new() -> Self {
        SentenceSelector
    }

    /// Up to `k` `(position, score)` pairs, in document order.
    pub fn select(&self, ranking: &Ranking, k: usize) -> Vec<(usize, f64)> {
        let mut selected: Vec<(usize, f64)> = match ranking {
            Ranking::Scored(scores) => scores
                .ranked()
                .into_iter()
                .take(k)
                .map(|position| (position, scores.get(position)))
                .collect(),
            Ranking::Picked(picks) => picks.iter().take(k).copied().collect(),
        };
        selected.sort_by_key(|&(position, _)| position);
        selected
    }

    /// Every one of `len` sentences, in document order.
    ///
    /// Sentences an iterative strategy never picked score 0.0.
    pub fn select_all(&self, ranking: &Ranking, len: usize) -> Vec<(usize, f64)> {
        let mut scores = ScoreVector::zeros(len);
        match ranking {
            Ranking::Scored(ranked) => {
                for position in 0..len {
                    scores.set(position, ranked.get(position));
                }
            }
            Ranking::Picked(picks) => {
                for &(position, score) in picks {
                    scores.set(position, score);
                }
            }
        }
        scores.as_slice().iter().copied().enumerate().collect()
    }
}
