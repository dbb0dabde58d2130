//! Language packs: stopwords, stemming and segmentation rules per language.
//!
//! A [`LanguageProfile`] bundles everything the parser needs for one language.
//! Profiles are looked up through the [`LinguisticResources`] trait so callers
//! can plug in their own packs; [`ResourceRegistry`] is the provided
//! implementation. The built-in registry (English) is created once, lazily,
//! and never mutated afterwards.
//!
//! # Examples
//!
//! ```
//! use distill::analysis::language::{LinguisticResources, ResourceRegistry};
//!
//! let resources = ResourceRegistry::builtin();
//! assert!(resources.stopwords("english").unwrap().contains("the"));
//! assert_eq!(resources.stem("en", "running").unwrap(), "run");
//! assert!(resources.profile("klingon").is_err());
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use ahash::AHashMap;

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::segmenter::SentenceSegmenter;
use crate::analysis::token_filter::{
    IdentityStemmer, LowercaseFilter, PorterStemmer, StemFilter, Stemmer, StopFilter,
};
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer, UnicodeWordTokenizer};
use crate::error::{DistillError, Result};

/// English stopwords.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does",
    "doesn't", "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had",
    "hadn't", "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her",
    "here", "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd",
    "i'll", "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself",
    "let's", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off",
    "on", "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some",
    "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves", "then",
    "there", "there's", "these", "they", "they'd", "they'll", "they're", "they've", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we",
    "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's",
    "where", "where's", "which", "while", "who", "who's", "whom", "why", "why's", "will", "with",
    "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

/// English abbreviations that end in a period but do not end a sentence.
const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "e.g", "i.e", "dept", "fig", "approx", "gen", "gov", "sen", "rep", "rev", "capt", "col", "lt",
    "sgt", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

/// English abbreviations that often close a sentence ("Acme Inc.").
const ENGLISH_TERMINAL_ABBREVIATIONS: &[&str] = &["inc", "ltd", "co", "corp", "etc"];

static BUILTIN_REGISTRY: LazyLock<Arc<ResourceRegistry>> = LazyLock::new(|| {
    let registry = ResourceRegistry::new()
        .with_builtin_languages()
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to build built-in language packs");
            ResourceRegistry::new()
        });
    Arc::new(registry)
});

/// Linguistic resources for a language code.
///
/// Every lookup fails with [`DistillError::UnsupportedLanguage`] when the code
/// is unknown.
pub trait LinguisticResources: Send + Sync {
    /// Full language profile (tokenizer, stopwords, stemmer, abbreviations).
    fn profile(&self, language: &str) -> Result<Arc<LanguageProfile>>;

    /// Stopword set for the language.
    fn stopwords(&self, language: &str) -> Result<Arc<HashSet<String>>> {
        Ok(Arc::clone(self.profile(language)?.stopwords()))
    }

    /// Stem a single lower-cased token.
    fn stem(&self, language: &str, token: &str) -> Result<String> {
        Ok(self.profile(language)?.stemmer().stem(token))
    }
}

/// Everything needed to analyze text in one language.
#[derive(Clone)]
pub struct LanguageProfile {
    code: String,
    aliases: Vec<String>,
    tokenizer: Arc<dyn Tokenizer>,
    stemmer: Arc<dyn Stemmer>,
    stopwords: Arc<HashSet<String>>,
    abbreviations: Arc<HashSet<String>>,
    terminal_abbreviations: Arc<HashSet<String>>,
}

impl LanguageProfile {
    /// Create a profile with Unicode word tokenization, no stemming,
    /// no stopwords and no abbreviations.
    pub fn new<S: Into<String>>(code: S) -> Self {
        LanguageProfile {
            code: code.into().to_lowercase(),
            aliases: Vec::new(),
            tokenizer: Arc::new(UnicodeWordTokenizer::new()),
            stemmer: Arc::new(IdentityStemmer::new()),
            stopwords: Arc::new(HashSet::new()),
            abbreviations: Arc::new(HashSet::new()),
            terminal_abbreviations: Arc::new(HashSet::new()),
        }
    }

    /// The built-in English profile: regex words, Porter stemming.
    pub fn english() -> Result<Self> {
        Ok(LanguageProfile::new("english")
            .with_alias("en")
            .with_tokenizer(Arc::new(RegexTokenizer::new()?))
            .with_stemmer(Arc::new(PorterStemmer::new()))
            .with_stopwords(ENGLISH_STOP_WORDS.iter().copied())
            .with_abbreviations(ENGLISH_ABBREVIATIONS.iter().copied())
            .with_terminal_abbreviations(ENGLISH_TERMINAL_ABBREVIATIONS.iter().copied()))
    }

    /// Add an alternative code ("en" for "english").
    pub fn with_alias<S: Into<String>>(mut self, alias: S) -> Self {
        self.aliases.push(alias.into().to_lowercase());
        self
    }

    /// Set the word tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set the stemmer.
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Set the stopword list. Words are lower-cased.
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords = Arc::new(words.into_iter().map(|w| w.as_ref().to_lowercase()).collect());
        self
    }

    /// Set the abbreviation list, written without the final period ("e.g").
    pub fn with_abbreviations<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.abbreviations = Arc::new(
            words
                .into_iter()
                .map(|w| w.as_ref().trim_end_matches('.').to_lowercase())
                .collect(),
        );
        self
    }

    /// Set the abbreviations that may also end a sentence ("inc", "etc").
    pub fn with_terminal_abbreviations<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.terminal_abbreviations = Arc::new(
            words
                .into_iter()
                .map(|w| w.as_ref().trim_end_matches('.').to_lowercase())
                .collect(),
        );
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }

    pub fn stopwords(&self) -> &Arc<HashSet<String>> {
        &self.stopwords
    }

    /// Sentence segmenter using this language's abbreviations and stopwords.
    pub fn segmenter(&self) -> SentenceSegmenter {
        SentenceSegmenter::new(Arc::clone(&self.abbreviations))
            .with_terminal_abbreviations(Arc::clone(&self.terminal_abbreviations))
            .with_stopwords(Arc::clone(&self.stopwords))
    }

    /// Word analyzer: tokenizer → lowercase → stopword marking → stemming.
    pub fn analyzer(&self) -> PipelineAnalyzer {
        PipelineAnalyzer::new(Arc::clone(&self.tokenizer))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::with_stop_words(Arc::clone(
                &self.stopwords,
            ))))
            .add_filter(Arc::new(StemFilter::with_stemmer(Arc::clone(&self.stemmer))))
            .with_name(self.code.clone())
    }
}

impl std::fmt::Debug for LanguageProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageProfile")
            .field("code", &self.code)
            .field("aliases", &self.aliases)
            .field("tokenizer", &self.tokenizer.name())
            .field("stemmer", &self.stemmer.name())
            .field("stopwords", &self.stopwords.len())
            .field("abbreviations", &self.abbreviations.len())
            .field("terminal_abbreviations", &self.terminal_abbreviations.len())
            .finish()
    }
}

/// A read-only table of language profiles keyed by code and alias.
#[derive(Clone, Debug, Default)]
pub struct ResourceRegistry {
    profiles: AHashMap<String, Arc<LanguageProfile>>,
}

impl ResourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        ResourceRegistry::default()
    }

    /// The shared built-in registry.
    pub fn builtin() -> Arc<ResourceRegistry> {
        Arc::clone(&*BUILTIN_REGISTRY)
    }

    /// Register the built-in language packs.
    pub fn with_builtin_languages(self) -> Result<Self> {
        Ok(self.with_profile(LanguageProfile::english()?))
    }

    /// Register a profile under its code and all its aliases, replacing any
    /// previous profile with the same keys.
    pub fn with_profile(mut self, profile: LanguageProfile) -> Self {
        let profile = Arc::new(profile);
        self.profiles
            .insert(profile.code().to_string(), Arc::clone(&profile));
        for alias in profile.aliases() {
            self.profiles.insert(alias.clone(), Arc::clone(&profile));
        }
        self
    }

    /// Registered codes and aliases, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl LinguisticResources for ResourceRegistry {
    fn profile(&self, language: &str) -> Result<Arc<LanguageProfile>> {
        self.profiles
            .get(&language.trim().to_lowercase())
            .cloned()
            .ok_or_else(|| DistillError::unsupported_language(language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::Analyzer;

    #[test]
    fn test_builtin_english() {
        let resources = ResourceRegistry::builtin();

        let profile = resources.profile("English").unwrap();
        assert_eq!(profile.code(), "english");
        assert!(resources.stopwords("en").unwrap().contains("the"));
        assert_eq!(resources.stem("english", "cats").unwrap(), "cat");
        assert_eq!(resources.languages(), vec!["en", "english"]);
    }

    #[test]
    fn test_unsupported_language() {
        let resources = ResourceRegistry::builtin();

        assert!(matches!(
            resources.profile("xx"),
            Err(DistillError::UnsupportedLanguage(code)) if code == "xx"
        ));
        assert!(resources.stopwords("xx").is_err());
        assert!(resources.stem("xx", "word").is_err());
    }

    #[test]
    fn test_custom_profile() {
        let german = LanguageProfile::new("German")
            .with_alias("de")
            .with_stopwords(["Der", "die", "das"])
            .with_abbreviations(["z.B."]);
        let registry = ResourceRegistry::new().with_profile(german);

        let stopwords = registry.stopwords("de").unwrap();
        assert!(stopwords.contains("der"));
        assert_eq!(registry.stem("german", "katzen").unwrap(), "katzen");

        let segmenter = registry.profile("de").unwrap().segmenter();
        assert_eq!(segmenter.segment("Das ist z.B. Gut. Ja.").len(), 2);
    }

    #[test]
    fn test_english_analyzer_marks_and_stems() {
        let profile = LanguageProfile::english().unwrap();
        let tokens: Vec<_> = profile
            .analyzer()
            .analyze("The dogs were barking")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 4);
        assert!(tokens[0].is_stopped());
        assert_eq!(tokens[1].stem, "dog");
        assert!(tokens[2].is_stopped());
        assert_eq!(tokens[3].stem, "bark");
    }
}
