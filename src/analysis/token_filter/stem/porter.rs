//! Porter stemming algorithm implementation.
//!
//! The Porter stemmer applies a series of rewrite rules in five steps:
//! 1. Plurals and -ed/-ing suffixes
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and -ll
//!
//! The rules are defined over ASCII letters. Words containing anything else
//! (accented letters, digits mixed with letters are fine) are returned as-is.
//!
//! # Examples
//!
//! ```
//! use distill::analysis::token_filter::stem::Stemmer;
//! use distill::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

const STEP2_SUFFIXES: [(&str, &str); 20] = [
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3_SUFFIXES: [(&str, &str); 7] = [
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Longest first within a shared ending ("ement", "ment", "ent").
const STEP4_SUFFIXES: [&str; 19] = [
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm for English.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Check if the byte at `pos` acts as a vowel.
    fn is_vowel(word: &[u8], pos: usize) -> bool {
        match word.get(pos) {
            Some(b'a' | b'e' | b'i' | b'o' | b'u') => true,
            Some(b'y') if pos > 0 => !Self::is_vowel(word, pos - 1),
            _ => false,
        }
    }

    /// Calculate the measure of a word (number of VC patterns).
    fn measure(word: &str) -> usize {
        let bytes = word.as_bytes();
        let n = bytes.len();
        let mut m = 0;
        let mut i = 0;

        while i < n && !Self::is_vowel(bytes, i) {
            i += 1;
        }

        while i < n {
            while i < n && Self::is_vowel(bytes, i) {
                i += 1;
            }
            if i >= n {
                break;
            }
            m += 1;
            while i < n && !Self::is_vowel(bytes, i) {
                i += 1;
            }
        }

        m
    }

    fn contains_vowel(word: &str) -> bool {
        let bytes = word.as_bytes();
        (0..bytes.len()).any(|i| Self::is_vowel(bytes, i))
    }

    fn ends_with_double_consonant(word: &str) -> bool {
        let bytes = word.as_bytes();
        let len = bytes.len();
        len >= 2 && bytes[len - 1] == bytes[len - 2] && !Self::is_vowel(bytes, len - 1)
    }

    /// Consonant-vowel-consonant ending where the last consonant is not w, x or y.
    fn ends_cvc(word: &str) -> bool {
        let bytes = word.as_bytes();
        let len = bytes.len();
        len >= 3
            && !Self::is_vowel(bytes, len - 3)
            && Self::is_vowel(bytes, len - 2)
            && !Self::is_vowel(bytes, len - 1)
            && !matches!(bytes[len - 1], b'w' | b'x' | b'y')
    }

    fn strip<'a>(word: &'a str, suffix: &str) -> &'a str {
        &word[..word.len() - suffix.len()]
    }

    /// Replace `old_suffix` when the remaining stem has at least `min_measure`.
    fn replace_suffix(word: &str, old_suffix: &str, new_suffix: &str, min_measure: usize) -> String {
        if word.ends_with(old_suffix) {
            let stem = Self::strip(word, old_suffix);
            if Self::measure(stem) >= min_measure {
                return format!("{stem}{new_suffix}");
            }
        }
        word.to_string()
    }

    fn step1a(word: &str) -> String {
        if word.ends_with("sses") {
            format!("{}ss", Self::strip(word, "sses"))
        } else if word.ends_with("ies") {
            format!("{}i", Self::strip(word, "ies"))
        } else if word.ends_with("ss") {
            word.to_string()
        } else if word.ends_with('s') && word.len() > 1 {
            Self::strip(word, "s").to_string()
        } else {
            word.to_string()
        }
    }

    fn step1b(word: &str) -> String {
        let stripped = if word.ends_with("eed") {
            return Self::replace_suffix(word, "eed", "ee", 1);
        } else if word.ends_with("ed") {
            Self::strip(word, "ed")
        } else if word.ends_with("ing") {
            Self::strip(word, "ing")
        } else {
            return word.to_string();
        };

        if !Self::contains_vowel(stripped) {
            return word.to_string();
        }

        if stripped.ends_with("at") || stripped.ends_with("bl") || stripped.ends_with("iz") {
            format!("{stripped}e")
        } else if Self::ends_with_double_consonant(stripped)
            && !stripped.ends_with('l')
            && !stripped.ends_with('s')
            && !stripped.ends_with('z')
        {
            stripped[..stripped.len() - 1].to_string()
        } else if Self::measure(stripped) == 1 && Self::ends_cvc(stripped) {
            format!("{stripped}e")
        } else {
            stripped.to_string()
        }
    }

    fn step1c(word: &str) -> String {
        match word.strip_suffix('y') {
            Some(stem) if Self::contains_vowel(stem) => format!("{stem}i"),
            _ => word.to_string(),
        }
    }

    fn step2(word: &str) -> String {
        STEP2_SUFFIXES
            .iter()
            .find(|(old_suffix, _)| word.ends_with(old_suffix))
            .map(|(old_suffix, new_suffix)| Self::replace_suffix(word, old_suffix, new_suffix, 1))
            .unwrap_or_else(|| word.to_string())
    }

    fn step3(word: &str) -> String {
        STEP3_SUFFIXES
            .iter()
            .find(|(old_suffix, _)| word.ends_with(old_suffix))
            .map(|(old_suffix, new_suffix)| Self::replace_suffix(word, old_suffix, new_suffix, 1))
            .unwrap_or_else(|| word.to_string())
    }

    /// Only the longest matching suffix is considered; when its condition
    /// fails the word is left alone.
    fn step4(word: &str) -> String {
        let Some(suffix) = STEP4_SUFFIXES.iter().find(|suffix| word.ends_with(*suffix)) else {
            return word.to_string();
        };

        let stem = Self::strip(word, suffix);
        if Self::measure(stem) > 1 && (*suffix != "ion" || stem.ends_with('s') || stem.ends_with('t'))
        {
            stem.to_string()
        } else {
            word.to_string()
        }
    }

    fn step5(word: &str) -> String {
        let word = if word.ends_with('e') {
            let stem = Self::strip(word, "e");
            let m = Self::measure(stem);
            if m > 1 || (m == 1 && !Self::ends_cvc(stem)) {
                stem.to_string()
            } else {
                word.to_string()
            }
        } else {
            word.to_string()
        };

        if word.ends_with("ll") && Self::measure(&word) > 1 {
            word[..word.len() - 1].to_string()
        } else {
            word
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if word.len() <= 2 || !word.is_ascii() {
            return word;
        }

        let word = Self::step1a(&word);
        let word = Self::step1b(&word);
        let word = Self::step1c(&word);
        let word = Self::step2(&word);
        let word = Self::step3(&word);
        let word = Self::step4(&word);
        Self::step5(&word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
