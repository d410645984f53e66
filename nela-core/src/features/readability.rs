//! Readability Indices
//!
//! Surface-statistic readability formulas over tokenized words and
//! sentences. Counts use Unicode scalar values, not bytes.

use serde::{Deserialize, Serialize};

use super::syllables::{count_complex_words, count_syllables, ComplexWordPolicy};
use super::{ratio, round_to, FeatureMap};

/// Thresholds shared by the indices that classify words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadabilityOptions {
    /// Minimum syllables for a complex word (SMOG).
    pub complex_syllable_threshold: usize,
    /// Minimum characters for a long word (LIX).
    pub long_word_length: usize,
    pub complex_word_policy: ComplexWordPolicy,
}

impl Default for ReadabilityOptions {
    fn default() -> Self {
        Self {
            complex_syllable_threshold: 3,
            long_word_length: 7,
            complex_word_policy: ComplexWordPolicy::Legacy,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    pub flesch_kincaid: f64,
    pub smog: f64,
    pub coleman_liau: f64,
    pub lix: f64,
}

impl ReadabilityScores {
    pub fn to_map(&self) -> FeatureMap {
        FeatureMap::from([
            ("flesch_kincaid".to_string(), self.flesch_kincaid),
            ("smog".to_string(), self.smog),
            ("coleman_liau".to_string(), self.coleman_liau),
            ("lix".to_string(), self.lix),
        ])
    }
}

/// Flesch–Kincaid grade level, rounded to 4 decimals.
pub fn flesch_kincaid_grade_level<S, T>(words: &[S], sentences: &[T]) -> f64
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let word_count = words.len();
    if word_count == 0 {
        return 0.0;
    }

    let avg_words_per_sentence = ratio(word_count, sentences.len());
    let syllable_count: usize = words.iter().map(|w| count_syllables(w.as_ref())).sum();
    let score =
        0.39 * avg_words_per_sentence + 11.8 * ratio(syllable_count, word_count) - 15.59;
    round_to(score, 4)
}

/// SMOG index; 0.0 without sentences.
pub fn smog_index<S, T>(words: &[S], sentences: &[T], options: &ReadabilityOptions) -> f64
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let sentence_count = sentences.len();
    if sentence_count == 0 {
        return 0.0;
    }

    let complex_words = count_complex_words(
        words,
        sentences,
        options.complex_syllable_threshold,
        options.complex_word_policy,
    );
    (complex_words as f64 * (30.0 / sentence_count as f64)).sqrt() + 3.0
}

/// Coleman–Liau index, rounded to 4 decimals.
pub fn coleman_liau_index<S, T>(words: &[S], sentences: &[T]) -> f64
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let word_count = words.len();
    if word_count == 0 {
        return 0.0;
    }

    let characters: usize = words.iter().map(|w| w.as_ref().chars().count()).sum();
    let score = 5.89 * ratio(characters, word_count)
        - 30.0 * ratio(sentences.len(), word_count)
        - 15.8;
    round_to(score, 4)
}

/// LIX: words per sentence plus the percentage of long words.
pub fn lix<S, T>(words: &[S], sentences: &[T], options: &ReadabilityOptions) -> f64
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let word_count = words.len();
    if word_count == 0 {
        return 0.0;
    }

    let long_words = words
        .iter()
        .filter(|w| w.as_ref().chars().count() >= options.long_word_length)
        .count();
    ratio(word_count, sentences.len()) + 100.0 * ratio(long_words, word_count)
}

/// All four indices at once.
pub fn readability<S, T>(
    words: &[S],
    sentences: &[T],
    options: &ReadabilityOptions,
) -> ReadabilityScores
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    ReadabilityScores {
        flesch_kincaid: flesch_kincaid_grade_level(words, sentences),
        smog: smog_index(words, sentences, options),
        coleman_liau: coleman_liau_index(words, sentences),
        lix: lix(words, sentences, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 3] = ["الحياة", "جميلة", "جدا"];
    const SENTENCES: [&str; 1] = ["الحياة جميلة جدا"];
    const NONE: [&str; 0] = [];

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_flesch_kincaid() {
        // 3 words, 1 sentence, 2 + 1 + 1 syllables
        assert_close(flesch_kincaid_grade_level(&WORDS, &SENTENCES), 1.3133);
    }

    #[test]
    fn test_flesch_kincaid_without_sentences() {
        // words-per-sentence term drops out
        assert_close(flesch_kincaid_grade_level(&WORDS, &NONE), 0.1433);
    }

    #[test]
    fn test_coleman_liau() {
        // 14 characters over 3 words
        assert_close(coleman_liau_index(&WORDS, &SENTENCES), 1.6867);
    }

    #[test]
    fn test_smog() {
        let options = ReadabilityOptions::default();
        assert_close(smog_index(&WORDS, &SENTENCES, &options), 3.0);

        let words = ["المواطنون", "الاقتصادية", "كتاب"];
        let sentences = ["أ", "ب", "ج"];
        // sqrt(2 * 30 / 3) + 3
        assert_close(
            smog_index(&words, &sentences, &options),
            20f64.sqrt() + 3.0,
        );
    }

    #[test]
    fn test_lix() {
        let options = ReadabilityOptions::default();
        assert_close(lix(&WORDS, &SENTENCES, &options), 3.0);

        let words = ["الاقتصادية", "كتاب"];
        let sentences = ["الاقتصادية كتاب"];
        assert_close(lix(&words, &sentences, &options), 2.0 + 50.0);
    }

    #[test]
    fn test_lix_respects_threshold() {
        let options = ReadabilityOptions {
            long_word_length: 5,
            ..ReadabilityOptions::default()
        };
        // الحياة and جميلة reach 5 characters
        assert_close(lix(&WORDS, &SENTENCES, &options), 3.0 + 200.0 / 3.0);
    }

    #[test]
    fn test_zero_guards() {
        let options = ReadabilityOptions::default();
        assert_eq!(flesch_kincaid_grade_level(&NONE, &NONE), 0.0);
        assert_eq!(smog_index(&WORDS, &NONE, &options), 0.0);
        assert_eq!(coleman_liau_index(&NONE, &SENTENCES), 0.0);
        assert_eq!(lix(&NONE, &SENTENCES, &options), 0.0);
        assert_close(lix(&WORDS, &NONE, &options), 0.0);
    }

    #[test]
    fn test_deterministic() {
        let options = ReadabilityOptions::default();
        let first = readability(&WORDS, &SENTENCES, &options);
        let second = readability(&WORDS, &SENTENCES, &options);
        assert_eq!(first, second);
        assert_eq!(first.to_map().len(), 4);
    }
}
