//! Dense term ids for the content terms of one document.

use ahash::AHashMap;

use crate::document::document::Document;

/// Bijective mapping between distinct content stems and dense ids.
///
/// Ids are assigned in order of first occurrence in the document, so
/// "smaller id" also means "seen earlier". Frequency ties are broken on that.
#[derive(Clone, Debug, Default)]
pub struct TermIndex {
    ids: AHashMap<String, usize>,
    terms: Vec<String>,
}

impl TermIndex {
    /// Build the index over the non-stopword stems of `document`.
    pub fn from_document(document: &Document) -> Self {
        let mut index = TermIndex::default();
        for sentence in &document.sentences {
            for term in sentence.terms() {
                index.insert(term);
            }
        }
        index
    }

    fn insert(&mut self, term: &str) -> usize {
        if let Some(&id) = self.ids.get(term) {
            return id;
        }
        let id = self.terms.len();
        self.ids.insert(term.to_string(), id);
        self.terms.push(term.to_string());
        id
    }

    /// Id of `term`, if it occurs in the document.
    pub fn id(&self, term: &str) -> Option<usize> {
        self.ids.get(term).copied()
    }

    /// Term with the given id.
    pub fn term(&self, id: usize) -> Option<&str> {
        self.terms.get(id).map(String::as_str)
    }

    /// All terms, ordered by id.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Term ids of a sentence's content terms, in order, repeats included.
    ///
    /// Terms unknown to the index are skipped, which only happens when the
    /// sentence comes from another document.
    pub fn sentence_ids<'a>(
        &'a self,
        sentence: &'a crate::document::document::Sentence,
    ) -> impl Iterator<Item = usize> + 'a {
        sentence.terms().filter_map(|term| self.id(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::DocumentParser;

    #[test]
    fn test_first_occurrence_order() {
        let doc = DocumentParser::builtin()
            .parse("The cat sat. The cat sat on the mat. Dogs bark loudly.", "english")
            .unwrap();
        let index = TermIndex::from_document(&doc);

        assert_eq!(index.len(), 6);
        assert_eq!(index.terms(), &["cat", "sat", "mat", "dog", "bark", "loudli"]);
        assert_eq!(index.id("mat"), Some(2));
        assert_eq!(index.term(3), Some("dog"));
        assert_eq!(index.id("the"), None);
        assert_eq!(index.term(42), None);
    }

    #[test]
    fn test_sentence_ids() {
        let doc = DocumentParser::builtin()
            .parse("Cats chase cats. Dogs chase cats.", "english")
            .unwrap();
        let index = TermIndex::from_document(&doc);

        let ids: Vec<usize> = index.sentence_ids(&doc.sentences[0]).collect();
        assert_eq!(ids, vec![0, 1, 0]);
        let ids: Vec<usize> = index.sentence_ids(&doc.sentences[1]).collect();
        assert_eq!(ids, vec![2, 1, 0]);
    }

    #[test]
    fn test_empty_document() {
        let index = TermIndex::from_document(&Document::default());
        assert!(index.is_empty());
    }
}
