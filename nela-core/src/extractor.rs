//! Arabic NELA Extractor
//!
//! Owns the read-only resources (tokenizers, stop words, lexicons) and
//! exposes every feature over raw text or pre-tokenized input.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analyzers::{
    filter_tokens, remove_diacritics, SentenceTokenizer, StopWords, Tokenizer, WordTokenizer,
};
use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::features::{
    self, AffectRatios, BiasRatios, FeatureMap, ReadabilityOptions, ReadabilityScores,
    StyleRatios,
};
use crate::lexicon::LexiconSet;

/// Raw text with its word and sentence tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub text: String,
    pub words: Vec<String>,
    pub sentences: Vec<String>,
}

/// Every feature group for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureReport {
    pub style: StyleRatios,
    pub ttr: f64,
    pub readability: ReadabilityScores,
    pub affect: AffectRatios,
    pub bias: BiasRatios,
}

impl FeatureReport {
    /// Flatten into a single name -> value map.
    pub fn to_map(&self) -> FeatureMap {
        let mut map = self.style.to_map();
        map.insert("ttr".to_string(), self.ttr);
        map.extend(self.readability.to_map());
        map.extend(self.affect.to_map());
        map.extend(self.bias.to_map());
        map
    }
}

pub struct ArabicNela {
    word_tokenizer: Box<dyn Tokenizer>,
    sentence_tokenizer: Box<dyn Tokenizer>,
    stop_words: StopWords,
    lexicons: LexiconSet,
    readability: ReadabilityOptions,
}

impl Default for ArabicNela {
    fn default() -> Self {
        Self::new()
    }
}

impl ArabicNela {
    /// Extractor with the built-in tokenizers, stop words and lexicons.
    pub fn new() -> Self {
        Self {
            word_tokenizer: Box::new(WordTokenizer::new()),
            sentence_tokenizer: Box::new(SentenceTokenizer::new()),
            stop_words: StopWords::arabic(),
            lexicons: LexiconSet::builtin(),
            readability: ReadabilityOptions::default(),
        }
    }

    /// Build from config, loading any configured resource files up front.
    pub fn from_config(config: &ExtractorConfig) -> Result<Self> {
        let stop_words = match &config.stopwords_path {
            Some(path) => StopWords::from_file(path)?,
            None => StopWords::arabic(),
        };
        let lexicons = match &config.lexicon_dir {
            Some(dir) => LexiconSet::from_dir(dir)?,
            None => LexiconSet::builtin(),
        };

        info!(
            stop_words = stop_words.len(),
            lexicon_entries = lexicons.total_entries(),
            custom_lexicons = config.lexicon_dir.is_some(),
            "arabic nela extractor ready"
        );

        Ok(Self {
            stop_words,
            lexicons,
            readability: config.readability_options(),
            ..Self::new()
        })
    }

    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn with_lexicons(mut self, lexicons: LexiconSet) -> Self {
        self.lexicons = lexicons;
        self
    }

    pub fn with_tokenizers(
        mut self,
        words: impl Tokenizer + 'static,
        sentences: impl Tokenizer + 'static,
    ) -> Self {
        self.word_tokenizer = Box::new(words);
        self.sentence_tokenizer = Box::new(sentences);
        self
    }

    pub fn with_readability_options(mut self, options: ReadabilityOptions) -> Self {
        self.readability = options;
        self
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn lexicons(&self) -> &LexiconSet {
        &self.lexicons
    }

    pub fn readability_options(&self) -> &ReadabilityOptions {
        &self.readability
    }

    pub fn remove_diacritics(&self, text: &str) -> String {
        remove_diacritics(text)
    }

    /// Word tokens without diacritics or punctuation.
    pub fn filter_words(&self, text: &str) -> Vec<String> {
        filter_tokens(&self.tokenize_words(text))
    }

    pub fn tokenize_words(&self, text: &str) -> Vec<String> {
        self.word_tokenizer.tokenize(text)
    }

    pub fn tokenize_sentences(&self, text: &str) -> Vec<String> {
        self.sentence_tokenizer.tokenize(text)
    }

    pub fn document(&self, text: &str) -> Document {
        Document {
            text: text.to_string(),
            words: self.tokenize_words(text),
            sentences: self.tokenize_sentences(text),
        }
    }

    pub fn punctuation_case_stopword_ratios(&self, text: &str) -> StyleRatios {
        features::punctuation_case_stopword_ratios(&self.tokenize_words(text), &self.stop_words)
    }

    pub fn type_token_ratio(&self, text: &str) -> f64 {
        features::type_token_ratio(&self.tokenize_words(text))
    }

    pub fn count_syllables(&self, word: &str) -> usize {
        features::count_syllables(word)
    }

    pub fn count_complex_words<S, T>(&self, tokens: &[S], sentences: &[T]) -> usize
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        features::count_complex_words(
            tokens,
            sentences,
            self.readability.complex_syllable_threshold,
            self.readability.complex_word_policy,
        )
    }

    // The readability methods take the raw text only to mirror the other
    // feature methods; the scores depend on `words` and `sentences` alone.

    pub fn flesch_kincaid_grade_level<S, T>(&self, _text: &str, words: &[S], sentences: &[T]) -> f64
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        features::flesch_kincaid_grade_level(words, sentences)
    }

    pub fn smog_index<S, T>(&self, _text: &str, words: &[S], sentences: &[T]) -> f64
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        features::smog_index(words, sentences, &self.readability)
    }

    pub fn coleman_liau_index<S, T>(&self, _text: &str, words: &[S], sentences: &[T]) -> f64
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        features::coleman_liau_index(words, sentences)
    }

    pub fn lix<S, T>(&self, _text: &str, words: &[S], sentences: &[T]) -> f64
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        features::lix(words, sentences, &self.readability)
    }

    pub fn readability<S, T>(&self, words: &[S], sentences: &[T]) -> ReadabilityScores
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        features::readability(words, sentences, &self.readability)
    }

    pub fn acl_affect<S: AsRef<str>>(&self, words: &[S]) -> AffectRatios {
        features::acl_affect(words, &self.lexicons)
    }

    pub fn bias_words<S: AsRef<str>>(&self, words: &[S]) -> BiasRatios {
        features::bias_words(words, &self.lexicons)
    }

    /// Tokenize `text` once and compute every feature group.
    pub fn extract(&self, text: &str) -> FeatureReport {
        let document = self.document(text);
        self.extract_document(&document)
    }

    pub fn extract_document(&self, document: &Document) -> FeatureReport {
        debug!(
            words = document.words.len(),
            sentences = document.sentences.len(),
            "extracting features"
        );

        let words = &document.words;
        let sentences = &document.sentences;
        FeatureReport {
            style: features::punctuation_case_stopword_ratios(words, &self.stop_words),
            ttr: features::type_token_ratio(words),
            readability: self.readability(words, sentences),
            affect: self.acl_affect(words),
            bias: self.bias_words(words),
        }
    }
}
