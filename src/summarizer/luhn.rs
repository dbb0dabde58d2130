//! Luhn's significant-word cluster scoring.
//!
//! The most frequent content terms of the document are "significant". Within
//! a sentence, occurrences of significant terms are grouped into clusters:
//! a cluster ends where two consecutive significant occurrences lie more than
//! `cluster_gap` tokens apart. A cluster with `c` significant occurrences
//! spanning `s` tokens scores `c² / s`; the sentence takes its best cluster.

use ahash::AHashSet;

use crate::document::document::{Document, Sentence};
use crate::model::frequency::FrequencyModel;
use crate::summarizer::StrategyOutput;
use crate::summarizer::config::SummarizerConfig;
use crate::summarizer::selector::{Ranking, ScoreVector};

/// Luhn scorer.
#[derive(Debug, Clone)]
pub struct Luhn {
    cluster_gap: usize,
    top_word_count: usize,
    min_term_frequency: usize,
}

impl Luhn {
    pub fn new(config: &SummarizerConfig) -> Self {
        Luhn {
            cluster_gap: config.luhn_cluster_gap,
            top_word_count: config.top_word_count,
            min_term_frequency: config.luhn_min_term_frequency,
        }
    }

    /// Significant term ids: the `top_word_count` most frequent terms that
    /// occur at least `min_term_frequency` times.
    pub fn significant_terms(&self, model: &FrequencyModel) -> AHashSet<usize> {
        model
            .top_words(self.top_word_count)
            .into_iter()
            .filter(|&id| model.tf(id) >= self.min_term_frequency)
            .collect()
    }

    /// Best cluster score of one sentence, 0.0 without significant terms.
    pub fn score_sentence(
        &self,
        sentence: &Sentence,
        model: &FrequencyModel,
        significant: &AHashSet<usize>,
    ) -> f64 {
        // Token positions count stopwords too.
        let positions: Vec<usize> = sentence
            .tokens
            .iter()
            .enumerate()
            .filter_map(|(position, token)| {
                let id = model.index().id(token.term()?)?;
                significant.contains(&id).then_some(position)
            })
            .collect();

        let Some(&first) = positions.first() else {
            return 0.0;
        };

        let mut best: f64 = 0.0;
        let mut start = first;
        let mut count = 1;
        for window in positions.windows(2) {
            let (previous, current) = (window[0], window[1]);
            if current - previous > self.cluster_gap {
                best = best.max(Self::cluster_score(count, start, previous));
                start = current;
                count = 0;
            }
            count += 1;
        }
        let last = positions[positions.len() - 1];
        best.max(Self::cluster_score(count, start, last))
    }

    fn cluster_score(count: usize, first: usize, last: usize) -> f64 {
        let span = (last - first + 1) as f64;
        (count * count) as f64 / span
    }

    /// Score every sentence of `document`.
    pub fn rank(&self, document: &Document) -> StrategyOutput {
        let model = FrequencyModel::new(document);
        let significant = self.significant_terms(&model);

        let scores = document
            .sentences
            .iter()
            .map(|sentence| self.score_sentence(sentence, &model, &significant))
            .collect();

        tracing::debug!(significant = significant.len(), "scored sentences with luhn");

        StrategyOutput::new(Ranking::Scored(ScoreVector::new(scores)))
    }
}

impl Default for Luhn {
    fn default() -> Self {
        Self::new(&SummarizerConfig::default())
    }
}
