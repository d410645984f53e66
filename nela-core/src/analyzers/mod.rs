//! Text Analyzers Module
//!
//! Normalization, tokenization and stop words for Arabic text.

mod normalizer;
mod stop_words;
mod tokenizer;

pub use normalizer::{
    filter_tokens, filter_words, is_arabic_diacritic, is_arabic_punctuation, normalize_word,
    remove_diacritics, ARABIC_PUNCTUATION, ASCII_PUNCTUATION,
};
pub use stop_words::{StopWords, DEFAULT_ARABIC_STOP_WORDS};
pub use tokenizer::{is_punctuation_char, SentenceTokenizer, Tokenizer, WordTokenizer};
