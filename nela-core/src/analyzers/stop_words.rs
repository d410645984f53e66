//! Arabic Stop Words
//!
//! The stopword set behind the `stops` style ratio. A built-in list is
//! compiled in; a custom list can be loaded from a file at construction.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{NelaError, Result};

/// Default Arabic stop words.
pub static DEFAULT_ARABIC_STOP_WORDS: &[&str] = &[
    // Particles and prepositions
    "من", "في", "على", "إلى", "الى", "عن", "مع", "بين", "حتى", "منذ", "لدى", "لدي",
    // Conjunctions
    "و", "أو", "او", "ثم", "لكن", "لكنه", "بل", "أم", "إما", "لو", "لولا", "كما", "أي",
    // Pronouns
    "هو", "هي", "هم", "هن", "هما", "أنا", "نحن", "أنت", "أنتم", "أنتن", "أنتما",
    // Demonstratives
    "هذا", "هذه", "ذلك", "تلك", "هؤلاء", "أولئك", "هذان", "هاتان", "ذاك",
    // Relative pronouns
    "الذي", "التي", "الذين", "اللذان", "اللتان", "اللواتي", "اللاتي",
    // Question words
    "ما", "ماذا", "أين", "متى", "كيف", "لماذا", "كم", "هل",
    // Auxiliary verbs
    "كان", "يكون", "كانت", "كانوا", "ليس", "ليست", "ليسوا", "أصبح", "صار", "ظل",
    // Common particles
    "قد", "لقد", "سوف", "لن", "لم", "لا", "إن", "أن", "إذا", "إذ", "إنما", "كأن", "لعل", "ليت",
    // Clitic remnants
    "ب", "ل", "ك", "ف",
    // Common words
    "كل", "بعض", "غير", "عند", "ذات", "هناك", "هنا", "ثمة",
    "فقط", "أيضا", "جدا", "معظم", "كثير", "قليل", "سوى",
    "بعد", "قبل", "خلال", "أثناء", "ضد", "نحو", "حول", "عبر", "لدن",
    "فوق", "تحت", "أمام", "خلف", "بجانب", "حيث", "عندما", "بينما",
];

/// Stop word collection with exact, case-sensitive membership.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Create an empty stop words collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a slice of words.
    pub fn from_slice(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create with the default Arabic stop words.
    pub fn arabic() -> Self {
        Self::from_slice(DEFAULT_ARABIC_STOP_WORDS)
    }

    /// Load stop words from a file (one word per line, `#` starts a comment line).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| NelaError::resource(path, e))?;
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        Ok(Self { words })
    }

    /// Add a word.
    pub fn add(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    /// Check if a word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }
}
