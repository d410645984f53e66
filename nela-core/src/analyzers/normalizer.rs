//! Arabic Text Normalization
//!
//! Diacritic (tashkeel) stripping and punctuation filtering applied to
//! tokens before lexical statistics are computed.

use super::tokenizer::{Tokenizer, WordTokenizer};

/// Arabic punctuation symbols counted by the style features.
pub const ARABIC_PUNCTUATION: [&str; 6] = ["،", "؛", "؟", "!", "«", "»"];

/// ASCII punctuation stripped from filtered words.
pub const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Check if a character is an Arabic diacritical mark.
pub fn is_arabic_diacritic(ch: char) -> bool {
    matches!(ch,
        '\u{0617}'..='\u{061A}' | // Small high ligatures and small fatha/damma/kasra
        '\u{064B}'..='\u{0652}'   // Fathatan to Sukun
    )
}

/// Check if a token is one of the Arabic punctuation symbols.
pub fn is_arabic_punctuation(token: &str) -> bool {
    ARABIC_PUNCTUATION.contains(&token)
}

/// Remove every Arabic diacritic from `text`.
pub fn remove_diacritics(text: &str) -> String {
    text.chars().filter(|ch| !is_arabic_diacritic(*ch)).collect()
}

/// Trim and lowercase a single word.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Clean already tokenized words: strip diacritics, drop punctuation-only
/// tokens and remove ASCII punctuation from what remains.
pub fn filter_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .filter_map(|token| {
            let token = remove_diacritics(token.as_ref());
            if is_arabic_punctuation(&token) || token == " " {
                return None;
            }

            let word: String = token
                .chars()
                .filter(|ch| !ASCII_PUNCTUATION.contains(*ch))
                .collect();
            if word.is_empty() || word == " " {
                None
            } else {
                Some(word)
            }
        })
        .collect()
}

/// Tokenize `text` with the default word tokenizer and filter the result.
pub fn filter_words(text: &str) -> Vec<String> {
    filter_tokens(&WordTokenizer::new().tokenize(text))
}
