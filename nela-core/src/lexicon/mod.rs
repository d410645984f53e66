//! Lexicons
//!
//! Named word and phrase sets for the affect and bias features. Entries
//! are matched by exact string equality against tokens, or against
//! space-joined token n-grams for multi-word phrases.

mod builtin;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NelaError, Result};

pub use builtin::{
    ASSERTATIVES, BIAS_WORDS, FACTIVES, HEDGES, IMPLICATIVES, NEGATIVE_WORDS, NEUTRAL_WORDS,
    POSITIVE_WORDS, REPORT_VERBS,
};

/// Lexicon categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexiconCategory {
    Negative,
    Positive,
    Neutral,
    Bias,
    Assertatives,
    Factives,
    Hedges,
    Implicatives,
    ReportVerbs,
}

impl LexiconCategory {
    pub const ALL: [LexiconCategory; 9] = [
        LexiconCategory::Negative,
        LexiconCategory::Positive,
        LexiconCategory::Neutral,
        LexiconCategory::Bias,
        LexiconCategory::Assertatives,
        LexiconCategory::Factives,
        LexiconCategory::Hedges,
        LexiconCategory::Implicatives,
        LexiconCategory::ReportVerbs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LexiconCategory::Negative => "negative",
            LexiconCategory::Positive => "positive",
            LexiconCategory::Neutral => "neutral",
            LexiconCategory::Bias => "bias",
            LexiconCategory::Assertatives => "assertatives",
            LexiconCategory::Factives => "factives",
            LexiconCategory::Hedges => "hedges",
            LexiconCategory::Implicatives => "implicatives",
            LexiconCategory::ReportVerbs => "report_verbs",
        }
    }

    /// File name of this category inside a lexicon directory.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.name())
    }

    fn builtin_entries(&self) -> &'static [&'static str] {
        match self {
            LexiconCategory::Negative => NEGATIVE_WORDS,
            LexiconCategory::Positive => POSITIVE_WORDS,
            LexiconCategory::Neutral => NEUTRAL_WORDS,
            LexiconCategory::Bias => BIAS_WORDS,
            LexiconCategory::Assertatives => ASSERTATIVES,
            LexiconCategory::Factives => FACTIVES,
            LexiconCategory::Hedges => HEDGES,
            LexiconCategory::Implicatives => IMPLICATIVES,
            LexiconCategory::ReportVerbs => REPORT_VERBS,
        }
    }
}

/// An immutable set of words and phrases for one category.
#[derive(Debug, Clone)]
pub struct Lexicon {
    category: LexiconCategory,
    entries: HashSet<String>,
    /// Number of words in the longest entry.
    max_phrase_len: usize,
}

impl Lexicon {
    /// Build a lexicon; whitespace inside phrases is collapsed to single spaces.
    pub fn new<I, S>(category: LexiconCategory, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut max_phrase_len = 0;
        let entries: HashSet<String> = entries
            .into_iter()
            .filter_map(|entry| {
                let words: Vec<&str> = entry.as_ref().split_whitespace().collect();
                if words.is_empty() {
                    return None;
                }
                max_phrase_len = max_phrase_len.max(words.len());
                Some(words.join(" "))
            })
            .collect();

        Self {
            category,
            entries,
            max_phrase_len,
        }
    }

    /// Built-in list for `category`.
    pub fn builtin(category: LexiconCategory) -> Self {
        Self::new(category, category.builtin_entries())
    }

    /// Load a lexicon from a file (one entry per line, `#` starts a comment line).
    pub fn from_file(category: LexiconCategory, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| NelaError::resource(path, e))?;
        let lines = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));
        Ok(Self::new(category, lines))
    }

    pub fn category(&self) -> LexiconCategory {
        self.category
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_phrase_len(&self) -> usize {
        self.max_phrase_len
    }

    /// Number of tokens that are lexicon entries.
    pub fn count_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> usize {
        tokens
            .iter()
            .filter(|token| self.entries.contains(token.as_ref()))
            .count()
    }

    /// Number of 1..=`max_n` token n-grams, space-joined, that are lexicon
    /// entries. Every n-gram length is scanned independently.
    pub fn count_ngrams<S: AsRef<str>>(&self, tokens: &[S], max_n: usize) -> usize {
        let mut count = self.count_tokens(tokens);
        for n in 2..=max_n.min(self.max_phrase_len) {
            count += tokens
                .windows(n)
                .filter(|window| {
                    let phrase = window
                        .iter()
                        .map(|t| t.as_ref())
                        .collect::<Vec<_>>()
                        .join(" ");
                    self.entries.contains(&phrase)
                })
                .count();
        }
        count
    }
}

/// One lexicon per category.
#[derive(Debug, Clone)]
pub struct LexiconSet {
    lexicons: Vec<Lexicon>,
}

impl Default for LexiconSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LexiconSet {
    /// Built-in lexicons for every category.
    pub fn builtin() -> Self {
        Self {
            lexicons: LexiconCategory::ALL
                .iter()
                .map(|category| Lexicon::builtin(*category))
                .collect(),
        }
    }

    /// Load `<category>.txt` for every category from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(NelaError::resource(
                dir,
                std::io::Error::new(std::io::ErrorKind::NotFound, "lexicon directory not found"),
            ));
        }

        let mut lexicons = Vec::with_capacity(LexiconCategory::ALL.len());
        for category in LexiconCategory::ALL {
            let lexicon = Lexicon::from_file(category, dir.join(category.file_name()))?;
            debug!(category = category.name(), entries = lexicon.len(), "loaded lexicon");
            lexicons.push(lexicon);
        }
        Ok(Self { lexicons })
    }

    /// Replace the lexicon of the same category.
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        let index = Self::index(lexicon.category());
        self.lexicons[index] = lexicon;
        self
    }

    pub fn get(&self, category: LexiconCategory) -> &Lexicon {
        &self.lexicons[Self::index(category)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lexicon> {
        self.lexicons.iter()
    }

    /// Total number of entries across all categories.
    pub fn total_entries(&self) -> usize {
        self.lexicons.iter().map(Lexicon::len).sum()
    }

    fn index(category: LexiconCategory) -> usize {
        category as usize
    }
}
