//! Syllable Approximation
//!
//! Syllables are approximated by runs of Arabic long-vowel letters. A run
//! of adjacent vowel letters counts once, however long it is.

use serde::{Deserialize, Serialize};

use crate::analyzers::{normalize_word, remove_diacritics};

/// Alef, waw and yaa.
pub const LONG_VOWELS: [char; 3] = ['\u{0627}', '\u{0648}', '\u{064A}'];

/// How tokens starting with an uppercase letter are treated when counting
/// complex words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexWordPolicy {
    /// A capitalized complex token only counts when some sentence contains
    /// it. Arabic script has no case, so this never applies to Arabic words.
    #[default]
    Legacy,
    /// Every complex token counts.
    Arabic,
}

/// Count runs of long-vowel letters in `word`.
pub fn count_syllables(word: &str) -> usize {
    let word = normalize_word(word);
    if word.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut in_run = false;
    for ch in remove_diacritics(&word).chars() {
        let is_vowel = LONG_VOWELS.contains(&ch);
        if is_vowel && !in_run {
            count += 1;
        }
        in_run = is_vowel;
    }
    count
}

/// Count tokens with at least `min_syllables` syllables.
pub fn count_complex_words<S, T>(
    tokens: &[S],
    sentences: &[T],
    min_syllables: usize,
    policy: ComplexWordPolicy,
) -> usize
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    tokens
        .iter()
        .map(|t| t.as_ref())
        .filter(|word| count_syllables(word) >= min_syllables)
        .filter(|word| match policy {
            ComplexWordPolicy::Arabic => true,
            ComplexWordPolicy::Legacy => {
                let capitalized = word.chars().next().map_or(false, char::is_uppercase);
                !capitalized || sentences.iter().any(|s| s.as_ref().contains(*word))
            }
        })
        .count()
}
