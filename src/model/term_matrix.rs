//! Term × sentence matrix for latent semantic analysis.

use serde::{Deserialize, Serialize};

use crate::model::frequency::FrequencyModel;

/// How raw term counts are turned into matrix cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermWeighting {
    /// The raw count.
    #[default]
    Raw,
    /// `1 + ln(count)` for non-zero counts.
    Log,
}

impl TermWeighting {
    /// Weight for a term occurring `count` times in a sentence.
    pub fn weight(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        match self {
            TermWeighting::Raw => count as f64,
            TermWeighting::Log => 1.0 + (count as f64).ln(),
        }
    }
}

/// Dense term × sentence matrix, stored column-major (one column per sentence).
#[derive(Clone, Debug, PartialEq)]
pub struct TermSentenceMatrix {
    rows: usize,
    columns: Vec<Vec<f64>>,
}

impl TermSentenceMatrix {
    /// Build the matrix from a frequency model.
    pub fn from_model(model: &FrequencyModel, weighting: TermWeighting) -> Self {
        let rows = model.num_terms();
        let columns = (0..model.num_sentences())
            .map(|position| {
                let mut column = vec![0.0; rows];
                for &(id, count) in model.sentence_counts(position) {
                    column[id] = weighting.weight(count);
                }
                column
            })
            .collect();

        TermSentenceMatrix { rows, columns }
    }

    /// Build a matrix from explicit columns; every column must have `rows` entries.
    pub fn from_columns(rows: usize, columns: Vec<Vec<f64>>) -> Option<Self> {
        columns
            .iter()
            .all(|c| c.len() == rows)
            .then_some(TermSentenceMatrix { rows, columns })
    }

    /// Number of terms.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of sentences.
    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    /// Cell for (term, sentence), 0.0 when out of range.
    pub fn get(&self, term: usize, sentence: usize) -> f64 {
        self.columns
            .get(sentence)
            .and_then(|c| c.get(term))
            .copied()
            .unwrap_or(0.0)
    }

    /// Column of a sentence.
    pub fn column(&self, sentence: usize) -> &[f64] {
        &self.columns[sentence]
    }

    pub(crate) fn into_columns(self) -> Vec<Vec<f64>> {
        self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::DocumentParser;

    #[test]
    fn test_weighting() {
        assert_eq!(TermWeighting::Raw.weight(3), 3.0);
        assert_eq!(TermWeighting::Log.weight(1), 1.0);
        assert!((TermWeighting::Log.weight(3) - (1.0 + 3f64.ln())).abs() < 1e-12);
        assert_eq!(TermWeighting::Log.weight(0), 0.0);
    }

    #[test]
    fn test_from_model() {
        let doc = DocumentParser::builtin()
            .parse("Cats chase cats. Dogs chase cats.", "english")
            .unwrap();
        let model = FrequencyModel::new(&doc);

        let matrix = TermSentenceMatrix::from_model(&model, TermWeighting::Raw);
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 2);
        assert_eq!(matrix.column(0), &[2.0, 1.0, 0.0]);
        assert_eq!(matrix.get(2, 1), 1.0);
        assert_eq!(matrix.get(7, 7), 0.0);

        let matrix = TermSentenceMatrix::from_model(&model, TermWeighting::Log);
        assert!((matrix.get(0, 0) - (1.0 + 2f64.ln())).abs() < 1e-12);
    }

    #[test]
    fn test_from_columns_checks_shape() {
        assert!(TermSentenceMatrix::from_columns(2, vec![vec![1.0, 0.0]]).is_some());
        assert!(TermSentenceMatrix::from_columns(2, vec![vec![1.0]]).is_none());
    }
}
