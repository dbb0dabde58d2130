//! Term frequency statistics shared by the frequency-based strategies.

use ahash::AHashMap;

use crate::document::document::Document;
use crate::document::term_index::TermIndex;

/// Term and term-sentence occurrence counts over one document's content terms.
///
/// # Examples
///
/// ```
/// use distill::document::parser::DocumentParser;
/// use distill::model::frequency::FrequencyModel;
///
/// let doc = DocumentParser::builtin()
///     .parse("The cat sat. The cat sat on the mat. Dogs bark loudly.", "english")
///     .unwrap();
/// let model = FrequencyModel::new(&doc);
///
/// let top: Vec<&str> = model.top_words(2).iter().map(|&id| model.term(id)).collect();
/// assert_eq!(top, vec!["cat", "sat"]);
/// assert_eq!(model.total(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct FrequencyModel {
    index: TermIndex,
    /// Occurrences per term id across the document
    term_frequency: Vec<usize>,
    /// Number of sentences containing each term id
    document_frequency: Vec<usize>,
    /// Per sentence: (term id, count), sorted by term id
    sentence_counts: Vec<Vec<(usize, usize)>>,
    /// Per sentence: number of content terms, repeats included
    sentence_lengths: Vec<usize>,
    total: usize,
}

impl FrequencyModel {
    /// Count the content terms of `document`.
    pub fn new(document: &Document) -> Self {
        Self::with_index(document, TermIndex::from_document(document))
    }

    /// Count the content terms of `document` against an existing index.
    pub fn with_index(document: &Document, index: TermIndex) -> Self {
        let mut term_frequency = vec![0; index.len()];
        let mut document_frequency = vec![0; index.len()];
        let mut sentence_counts = Vec::with_capacity(document.len());
        let mut sentence_lengths = Vec::with_capacity(document.len());

        for sentence in &document.sentences {
            let mut counts: AHashMap<usize, usize> = AHashMap::new();
            let mut length = 0;
            for id in index.sentence_ids(sentence) {
                *counts.entry(id).or_insert(0) += 1;
                term_frequency[id] += 1;
                length += 1;
            }

            let mut counts: Vec<(usize, usize)> = counts.into_iter().collect();
            counts.sort_unstable_by_key(|&(id, _)| id);
            for &(id, _) in &counts {
                document_frequency[id] += 1;
            }

            sentence_counts.push(counts);
            sentence_lengths.push(length);
        }

        let total = term_frequency.iter().sum();

        tracing::debug!(
            sentences = sentence_counts.len(),
            terms = index.len(),
            total,
            "built frequency model"
        );

        FrequencyModel {
            index,
            term_frequency,
            document_frequency,
            sentence_counts,
            sentence_lengths,
            total,
        }
    }

    /// The term index the counts are keyed by.
    pub fn index(&self) -> &TermIndex {
        &self.index
    }

    /// Term text for an id. Panics on an id not produced by this model.
    pub fn term(&self, id: usize) -> &str {
        &self.index.terms()[id]
    }

    /// Number of distinct terms.
    pub fn num_terms(&self) -> usize {
        self.term_frequency.len()
    }

    /// Number of sentences.
    pub fn num_sentences(&self) -> usize {
        self.sentence_counts.len()
    }

    /// Total number of content term occurrences.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Occurrences of the term with id `id`.
    pub fn tf(&self, id: usize) -> usize {
        self.term_frequency.get(id).copied().unwrap_or(0)
    }

    /// Occurrences of `term`, 0 if absent.
    pub fn term_frequency(&self, term: &str) -> usize {
        self.index.id(term).map_or(0, |id| self.tf(id))
    }

    /// Number of sentences containing the term with id `id`.
    pub fn df(&self, id: usize) -> usize {
        self.document_frequency.get(id).copied().unwrap_or(0)
    }

    /// Distinct terms of a sentence with their counts, ordered by id.
    pub fn sentence_counts(&self, position: usize) -> &[(usize, usize)] {
        self.sentence_counts
            .get(position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Content terms in a sentence, repeats included.
    pub fn sentence_length(&self, position: usize) -> usize {
        self.sentence_lengths.get(position).copied().unwrap_or(0)
    }

    /// The `n` most frequent term ids.
    ///
    /// Ties are broken by first occurrence in the document, which is id order.
    pub fn top_words(&self, n: usize) -> Vec<usize> {
        let mut ids: Vec<usize> = (0..self.num_terms()).collect();
        ids.sort_by(|&a, &b| {
            self.term_frequency[b]
                .cmp(&self.term_frequency[a])
                .then(a.cmp(&b))
        });
        ids.truncate(n);
        ids
    }

    /// Unigram distribution `p(w) = tf(w) / total`, indexed by term id.
    pub fn probabilities(&self) -> Vec<f64> {
        if self.total == 0 {
            return vec![0.0; self.num_terms()];
        }
        let total = self.total as f64;
        self.term_frequency
            .iter()
            .map(|&count| count as f64 / total)
            .collect()
    }

    /// Smoothed inverse document frequency `ln((N + 1) / (df + 1)) + 1`.
    pub fn idf(&self, id: usize) -> f64 {
        let n = self.num_sentences() as f64;
        ((n + 1.0) / (self.df(id) as f64 + 1.0)).ln() + 1.0
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

    #[test]
    fn test_counts() {
        let model = model("The cat sat. The cat sat on the mat. Dogs bark loudly.");

        assert_eq!(model.num_sentences(), 3);
        assert_eq!(model.num_terms(), 6);
        assert_eq!(model.term_frequency("cat"), 2);
        assert_eq!(model.term_frequency("mat"), 1);
        assert_eq!(model.term_frequency("the"), 0);
        assert_eq!(model.df(0), 2);
        assert_eq!(model.sentence_counts(1), &[(0, 1), (1, 1), (2, 1)]);
        assert_eq!(model.sentence_length(2), 3);
        assert!(model.sentence_counts(9).is_empty());
    }

    #[test]
    fn test_top_words_tie_break_by_first_occurrence() {
        let model = model("Zebra apple. Apple zebra mango. Mango kiwi.");

        // zebra, apple and mango all occur twice; zebra was seen first.
        let top: Vec<&str> = model.top_words(4).iter().map(|&id| model.term(id)).collect();
        assert_eq!(top, vec!["zebra", "appl", "mango", "kiwi"]);
        assert_eq!(model.top_words(100).len(), 4);
        assert!(model.top_words(0).is_empty());
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let model = model("The cat sat. The cat sat on the mat. Dogs bark loudly.");
        let p = model.probabilities();

        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!((p[0] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_idf() {
        let model = model("Cats purr. Cats sleep. Dogs bark.");
        let cat = model.index().id("cat").unwrap();
        let dog = model.index().id("dog").unwrap();

        assert!(model.idf(dog) > model.idf(cat));
        assert!((model.idf(cat) - ((4.0f64 / 3.0).ln() + 1.0)).abs() < 1e-12);
    }
}
