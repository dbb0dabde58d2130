//! Sentence segmentation.
//!
//! Boundaries come from the Unicode sentence boundary rules (UAX #29), which
//! already keep "e.g. the" together because a lower-case word follows the
//! period. What UAX #29 cannot know is that "Dr. Smith" is one sentence, so the
//! segmenter re-joins a fragment with the next one when the fragment ends in
//! a known abbreviation.
//!
//! Initials ("J. R. R. Tolkien") and abbreviations that often close a sentence
//! ("Acme Inc.") are ambiguous. They are re-joined only when the next fragment
//! starts with another initial or with a capitalised word that is not a
//! stopword, so "vitamin C. It helps." stays two sentences.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashSet;
//! use std::sync::Arc;
//! use distill::analysis::segmenter::SentenceSegmenter;
//!
//! let abbreviations: HashSet<String> = ["dr".to_string()].into_iter().collect();
//! let segmenter = SentenceSegmenter::new(Arc::new(abbreviations));
//!
//! let sentences = segmenter.segment("Dr. Smith arrived. He sat down.");
//! assert_eq!(sentences, vec!["Dr. Smith arrived.", "He sat down."]);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

/// How a fragment ending in a period relates to the next fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Ending {
    /// An ordinary sentence end.
    Boundary,
    /// An abbreviation that never ends a sentence ("Dr.").
    Abbreviation,
    /// An initial or a terminal abbreviation; depends on what follows.
    Ambiguous,
}

/// Splits raw text into trimmed sentence slices, in source order.
#[derive(Clone, Debug, Default)]
pub struct SentenceSegmenter {
    /// Lower-cased abbreviations without their final period ("dr", "e.g").
    abbreviations: Arc<HashSet<String>>,
    /// Abbreviations that may also end a sentence ("inc", "etc").
    terminal_abbreviations: Arc<HashSet<String>>,
    /// Lower-cased words that start a new sentence after an ambiguous period.
    stopwords: Arc<HashSet<String>>,
}

impl SentenceSegmenter {
    /// Create a segmenter with the given abbreviation set.
    pub fn new(abbreviations: Arc<HashSet<String>>) -> Self {
        SentenceSegmenter {
            abbreviations,
            ..Self::default()
        }
    }

    /// Set the abbreviations that may end a sentence.
    pub fn with_terminal_abbreviations(mut self, abbreviations: Arc<HashSet<String>>) -> Self {
        self.terminal_abbreviations = abbreviations;
        self
    }

    /// Set the stopwords used to recognise a sentence start.
    pub fn with_stopwords(mut self, stopwords: Arc<HashSet<String>>) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Split `text` into sentences. Whitespace-only fragments are dropped.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let fragments: Vec<(usize, &str)> = text
            .split_sentence_bound_indices()
            .filter(|(_, fragment)| !fragment.trim().is_empty())
            .collect();

        let mut sentences = Vec::new();
        let mut start: Option<usize> = None;

        for (i, &(offset, fragment)) in fragments.iter().enumerate() {
            let begin = *start.get_or_insert(offset);
            let end = offset + fragment.len();

            let join = match self.ending(fragment.trim_end()) {
                Ending::Boundary => false,
                Ending::Abbreviation => true,
                Ending::Ambiguous => fragments
                    .get(i + 1)
                    .is_some_and(|&(_, next)| self.continues_sentence(next)),
            };
            if join {
                continue;
            }

            Self::push_trimmed(&mut sentences, &text[begin..end]);
            start = None;
        }

        if let Some(begin) = start {
            Self::push_trimmed(&mut sentences, &text[begin..]);
        }

        sentences
    }

    fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, sentence: &'a str) {
        let trimmed = sentence.trim();
        if !trimmed.is_empty() {
            sentences.push(trimmed);
        }
    }

    /// Classify the period at the end of `fragment`, if any.
    fn ending(&self, fragment: &str) -> Ending {
        let Some(without_period) = fragment.strip_suffix('.') else {
            return Ending::Boundary;
        };

        let last_word = without_period
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());

        if last_word.is_empty() {
            return Ending::Boundary;
        }

        let key = last_word.to_lowercase();
        if self.abbreviations.contains(&key) {
            Ending::Abbreviation
        } else if is_initial(last_word) || self.terminal_abbreviations.contains(&key) {
            Ending::Ambiguous
        } else {
            Ending::Boundary
        }
    }

    /// True when `next` reads as the rest of the current sentence.
    fn continues_sentence(&self, next: &str) -> bool {
        let next = next.trim_start();
        let word: &str = next
            .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
            .next()
            .unwrap_or("");

        if is_initial(word) && next[word.len()..].starts_with('.') {
            return true;
        }
        match word.chars().next() {
            Some(first) if first.is_uppercase() => !self.stopwords.contains(&word.to_lowercase()),
            _ => true,
        }
    }
}

/// A single upper-case letter.
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> Arc<HashSet<String>> {
        Arc::new(words.iter().map(|s| s.to_string()).collect())
    }

    fn segmenter() -> SentenceSegmenter {
        SentenceSegmenter::new(set(&["dr", "mr", "e.g", "i.e", "st"]))
            .with_terminal_abbreviations(set(&["inc", "ltd", "co", "corp"]))
            .with_stopwords(set(&["it", "her", "the", "we", "they", "i"]))
    }

    #[test]
    fn test_basic_segmentation() {
        let sentences = segmenter().segment("The cat sat. The cat sat on the mat. Dogs bark loudly.");
        assert_eq!(
            sentences,
            vec!["The cat sat.", "The cat sat on the mat.", "Dogs bark loudly."]
        );
    }

    #[test]
    fn test_question_and_exclamation() {
        let sentences = segmenter().segment("Is this working? Yes it is! Great.");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[1], "Yes it is!");
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let sentences = segmenter().segment("Mr. Brown met Dr. Green on Main St. Tuesday. They talked.");
        assert_eq!(
            sentences,
            vec!["Mr. Brown met Dr. Green on Main St. Tuesday.", "They talked."]
        );
    }

    #[test]
    fn test_initials_do_not_split() {
        let sentences = segmenter().segment("J. R. R. Tolkien wrote books. Many read them.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "J. R. R. Tolkien wrote books.");
    }

    #[test]
    fn test_trailing_text_without_terminator() {
        let sentences = segmenter().segment("First sentence. and a tail without a period");
        // A lower-case continuation is not a boundary under UAX #29.
        assert_eq!(sentences.len(), 1);

        let sentences = segmenter().segment("First sentence. Second one has no period");
        assert_eq!(sentences, vec!["First sentence.", "Second one has no period"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(segmenter().segment("").is_empty());
        assert!(segmenter().segment("   \n\t ").is_empty());
    }

    #[test]
    fn test_single_letter_before_sentence_start_splits() {
        assert_eq!(
            segmenter().segment("I take vitamin C. It keeps me healthy."),
            vec!["I take vitamin C.", "It keeps me healthy."]
        );
        assert_eq!(
            segmenter().segment("We chose plan B. It worked well."),
            vec!["We chose plan B.", "It worked well."]
        );
    }

    #[test]
    fn test_terminal_abbreviations() {
        assert_eq!(
            segmenter().segment("She works at Acme Inc. Her team builds tools."),
            vec!["She works at Acme Inc.", "Her team builds tools."]
        );
        assert_eq!(
            segmenter().segment("Acme Inc. Tools ship today. They sell well."),
            vec!["Acme Inc. Tools ship today.", "They sell well."]
        );
    }

    #[test]
    fn test_initial_before_name_joins() {
        let sentences = segmenter().segment("Author J. Smith wrote it. The end.");
        assert_eq!(sentences, vec!["Author J. Smith wrote it.", "The end."]);
    }
}
