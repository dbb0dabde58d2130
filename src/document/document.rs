//! Analyzed document types.
//!
//! A [`Document`] is the immutable input to every scoring strategy: an ordered
//! list of [`Sentence`]s whose position is both their identity and the
//! canonical output order.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;

/// One sentence of the source text with its analyzed tokens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Original surface text, trimmed
    pub text: String,

    /// Position in the document (0-based, stable)
    pub position: usize,

    /// Tokens in sentence order, stopwords included
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Create a new sentence.
    pub fn new<S: Into<String>>(text: S, position: usize, tokens: Vec<Token>) -> Self {
        Sentence {
            text: text.into(),
            position,
            tokens,
        }
    }

    /// Stems of the non-stopword tokens, in order, repeats included.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(Token::term)
    }

    /// Number of tokens, stopwords included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// An ordered sequence of analyzed sentences.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Language code the document was analyzed with
    pub language: String,

    /// Sentences in source order
    pub sentences: Vec<Sentence>,
}

impl Document {
    /// Create a document, renumbering sentence positions to match their order.
    pub fn new<S: Into<String>>(language: S, mut sentences: Vec<Sentence>) -> Self {
        for (position, sentence) in sentences.iter_mut().enumerate() {
            sentence.position = position;
        }
        Document {
            language: language.into(),
            sentences,
        }
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// True when the document has no sentences.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Sentence at `position`.
    pub fn sentence(&self, position: usize) -> Option<&Sentence> {
        self.sentences.get(position)
    }

    /// Total number of content terms (non-stopword tokens) in the document.
    pub fn term_count(&self) -> usize {
        self.sentences.iter().map(|s| s.terms().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(words: &[(&str, bool)]) -> Sentence {
        let tokens = words
            .iter()
            .enumerate()
            .map(|(i, (w, stopped))| {
                let token = Token::new(*w, i);
                if *stopped { token.stop() } else { token }
            })
            .collect();
        Sentence::new("text", 99, tokens)
    }

    #[test]
    fn test_positions_are_renumbered() {
        let doc = Document::new(
            "english",
            vec![sentence(&[("a", false)]), sentence(&[("b", false)])],
        );

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.sentences[0].position, 0);
        assert_eq!(doc.sentences[1].position, 1);
        assert!(doc.sentence(2).is_none());
    }

    #[test]
    fn test_terms_skip_stopwords() {
        let s = sentence(&[("the", true), ("cat", false), ("cat", false)]);

        assert_eq!(s.terms().collect::<Vec<_>>(), vec!["cat", "cat"]);
        assert_eq!(s.len(), 3);

        let doc = Document::new("english", vec![s]);
        assert_eq!(doc.term_count(), 2);
    }
}
