//! Graph ranking over sentence similarity (TextRank / LexRank).

use crate::document::document::Document;
use crate::model::budget::Deadline;
use crate::model::frequency::FrequencyModel;
use crate::model::graph::{PowerIteration, RankResult};
use crate::model::similarity::{SimilarityMatrix, SimilarityMetric};
use crate::summarizer::StrategyOutput;
use crate::summarizer::config::SummarizerConfig;
use crate::summarizer::selector::{Ranking, ScoreVector};

/// Graph ranking scorer.
#[derive(Debug, Clone)]
pub struct GraphRank {
    metric: SimilarityMetric,
    iteration: PowerIteration,
}

impl GraphRank {
    pub fn new(metric: SimilarityMetric, config: &SummarizerConfig) -> Self {
        GraphRank {
            metric,
            iteration: config.power_iteration(),
        }
    }

    pub fn metric(&self) -> SimilarityMetric {
        self.metric
    }

    /// Build the similarity graph of `document` and rank it.
    pub fn run(&self, document: &Document, deadline: &Deadline) -> RankResult {
        let model = FrequencyModel::new(document);
        let matrix = SimilarityMatrix::build(&model, self.metric);
        self.iteration.run(&matrix, deadline)
    }

    /// Score every sentence of `document`.
    pub fn rank(&self, document: &Document, deadline: &Deadline) -> StrategyOutput {
        let result = self.run(document, deadline);
        let warning = result
            .termination
            .warning("power_iteration", result.iterations, result.delta);

        StrategyOutput::new(Ranking::Scored(ScoreVector::new(result.scores))).with_warnings(warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::DocumentParser;

    fn parse(text: &str) -> Document {
        DocumentParser::builtin().parse(text, "english").unwrap()
    }

    #[test]
    fn test_identical_sentences_rank_uniformly() {
        let doc = parse("Cats purr loudly. Cats purr loudly. Cats purr loudly.");
        for metric in [SimilarityMetric::Overlap, SimilarityMetric::Cosine] {
            let result = GraphRank::new(metric, &SummarizerConfig::default())
                .run(&doc, &Deadline::none());

            assert!(result.converged());
            assert!((result.score(0) - result.score(1)).abs() < 1e-12);
            assert!((result.score(1) - result.score(2)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cat_example() {
        let doc = parse("The cat sat. The cat sat on the mat. Dogs bark loudly.");
        let result =
            GraphRank::new(SimilarityMetric::Overlap, &SummarizerConfig::default()).run(&doc, &Deadline::none());

        // 0 and 1 only point at each other; 2 is isolated.
        assert!((result.score(0) - result.score(1)).abs() < 1e-12);
        assert!(result.score(0) > result.score(2));
        assert!((result.score(2) - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_central_sentence_wins() {
        let doc = parse(
            "Rust guarantees memory safety. Memory safety prevents bugs. \
             Rust compiles fast code. Bugs cost money.",
        );
        for metric in [SimilarityMetric::Overlap, SimilarityMetric::Cosine] {
            let output = GraphRank::new(metric, &SummarizerConfig::default())
                .rank(&doc, &Deadline::none());
            let Ranking::Scored(scores) = output.ranking else {
                panic!("expected scores");
            };
            assert_eq!(scores.ranked()[0], 1, "metric {metric}");
        }
    }

    #[test]
    fn test_iteration_cap_warns() {
        let doc = parse("The cat sat. The cat sat on the mat. Dogs bark loudly.");
        let config = SummarizerConfig::default().with_max_iterations(1);
        let output = GraphRank::new(SimilarityMetric::Overlap, &config).rank(&doc, &Deadline::none());

        assert_eq!(output.warnings.len(), 1);
        assert_eq!(output.warnings[0].routine(), "power_iteration");
        assert_eq!(output.ranking.len(), 3);
    }
}
