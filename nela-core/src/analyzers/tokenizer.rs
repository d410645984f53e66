//! Tokenizers
//!
//! Word and sentence segmentation for Arabic text. Feature functions only
//! need punctuation and words split into separate tokens, so any tokenizer
//! with comparable boundaries can be plugged in through [`Tokenizer`].

use std::iter::Peekable;
use std::str::Chars;

/// Common trait for word and sentence tokenizers.
pub trait Tokenizer: Send + Sync {
    /// Split text into tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Check if a character is split off as a standalone punctuation token.
pub fn is_punctuation_char(ch: char) -> bool {
    ch.is_ascii_punctuation()
        || matches!(ch,
            '\u{060C}' | // Arabic comma
            '\u{061B}' | // Arabic semicolon
            '\u{061F}' | // Arabic question mark
            '\u{066A}' | // Arabic percent sign
            '\u{066B}' | // Arabic decimal separator
            '\u{066C}' | // Arabic thousands separator
            '\u{06D4}' | // Arabic full stop
            '\u{00AB}' | '\u{00BB}' | // Guillemets
            '\u{201C}' | '\u{201D}' | '\u{2018}' | '\u{2019}' |
            '\u{2026}'   // Ellipsis
        )
}

/// Separators that stay inside a number when surrounded by digits.
fn is_numeric_separator(ch: char) -> bool {
    matches!(ch, '.' | ',' | '\u{066B}' | '\u{066C}')
}

/// Word tokenizer splitting on whitespace and punctuation.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for chunk in text.split_whitespace() {
            let chars: Vec<char> = chunk.chars().collect();
            let mut current = String::new();

            for (i, &ch) in chars.iter().enumerate() {
                if !is_punctuation_char(ch) {
                    current.push(ch);
                    continue;
                }

                let inside_number = is_numeric_separator(ch)
                    && i > 0
                    && chars[i - 1].is_numeric()
                    && chars.get(i + 1).map_or(false, |next| next.is_numeric());
                if inside_number {
                    current.push(ch);
                    continue;
                }

                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(ch.to_string());
            }

            if !current.is_empty() {
                tokens.push(current);
            }
        }

        tokens
    }
}

/// Sentence tokenizer splitting after terminal punctuation and on blank lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceTokenizer;

impl SentenceTokenizer {
    pub fn new() -> Self {
        Self
    }

    fn is_terminator(ch: char) -> bool {
        matches!(ch, '.' | '!' | '?' | '\u{061F}' | '\u{06D4}' | '\u{2026}')
    }

    fn is_closing(ch: char) -> bool {
        matches!(ch, '"' | '\'' | ')' | ']' | '\u{00BB}' | '\u{201D}' | '\u{2019}')
    }

    fn flush(sentences: &mut Vec<String>, current: &mut String) {
        let sentence = current.trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        current.clear();
    }

    /// Consume the rest of a terminator run plus trailing closing quotes.
    fn absorb_tail(chars: &mut Peekable<Chars<'_>>, current: &mut String) {
        while let Some(&next) = chars.peek() {
            if Self::is_terminator(next) || Self::is_closing(next) {
                current.push(next);
                chars.next();
            } else {
                break;
            }
        }
    }
}

impl Tokenizer for SentenceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();
        let mut prev: Option<char> = None;
        // A line ending with nothing but whitespace since the previous
        // newline is a paragraph break.
        let mut after_newline = false;
        let mut line_has_text = false;

        while let Some(ch) = chars.next() {
            if ch == '\n' {
                if after_newline && !line_has_text {
                    Self::flush(&mut sentences, &mut current);
                } else {
                    current.push(ch);
                }
                after_newline = true;
                line_has_text = false;
                prev = Some(ch);
                continue;
            }
            if !ch.is_whitespace() {
                line_has_text = true;
            }

            current.push(ch);

            if Self::is_terminator(ch) {
                let decimal_point = ch == '.'
                    && prev.map_or(false, char::is_numeric)
                    && chars.peek().map_or(false, |next| next.is_numeric());
                if !decimal_point {
                    Self::absorb_tail(&mut chars, &mut current);
                    Self::flush(&mut sentences, &mut current);
                }
            }
            prev = Some(ch);
        }

        Self::flush(&mut sentences, &mut current);
        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_and_punctuation_are_split() {
        let tokens = WordTokenizer::new().tokenize("طرابلس، مساء أمس!");
        assert_eq!(tokens, vec!["طرابلس", "،", "مساء", "أمس", "!"]);
    }

    #[test]
    fn test_guillemets_and_quotes() {
        let tokens = WordTokenizer::new().tokenize("قال «نعم» و\"لا\"");
        assert_eq!(
            tokens,
            vec!["قال", "«", "نعم", "»", "و", "\"", "لا", "\""]
        );
    }

    #[test]
    fn test_numbers_keep_separators() {
        let tokens = WordTokenizer::new().tokenize("ارتفع 3.5 بالمئة.");
        assert_eq!(tokens, vec!["ارتفع", "3.5", "بالمئة", "."]);
    }

    #[test]
    fn test_empty_text() {
        assert!(WordTokenizer::new().tokenize("").is_empty());
        assert!(WordTokenizer::new().tokenize("   \n\t").is_empty());
        assert!(SentenceTokenizer::new().tokenize("  ").is_empty());
    }

    #[test]
    fn test_sentences() {
        let text = "شهدت المدينة احتجاجات. واندلعت مواجهات عنيفة! هل انتهت؟ لا";
        let sentences = SentenceTokenizer::new().tokenize(text);
        assert_eq!(
            sentences,
            vec![
                "شهدت المدينة احتجاجات.",
                "واندلعت مواجهات عنيفة!",
                "هل انتهت؟",
                "لا"
            ]
        );
    }

    #[test]
    fn test_sentence_terminator_runs_and_quotes() {
        let text = "قال «انتهى الأمر!» ثم غادر... وعاد";
        let sentences = SentenceTokenizer::new().tokenize(text);
        assert_eq!(sentences, vec!["قال «انتهى الأمر!»", "ثم غادر...", "وعاد"]);
    }

    #[test]
    fn test_blank_line_breaks_sentence() {
        let sentences = SentenceTokenizer::new().tokenize("عنوان\n\nنص المقال");
        assert_eq!(sentences, vec!["عنوان", "نص المقال"]);
    }

    #[test]
    fn test_blank_line_with_crlf_or_spaces_breaks_sentence() {
        let tokenizer = SentenceTokenizer::new();
        for text in [
            "عنوان\r\n\r\nنص المقال",
            "عنوان\n \nنص المقال",
            "عنوان\n\t \r\nنص المقال",
        ] {
            assert_eq!(tokenizer.tokenize(text), vec!["عنوان", "نص المقال"]);
        }
    }

    #[test]
    fn test_single_line_break_does_not_split() {
        let sentences = SentenceTokenizer::new().tokenize("عنوان\r\nنص المقال");
        assert_eq!(sentences, vec!["عنوان\r\nنص المقال"]);
    }

    #[test]
    fn test_arabic_separators_stay_inside_numbers() {
        let tokens = WordTokenizer::new().tokenize("بلغ ١٢٫٥ و١٬٠٠٠ ٫");
        assert_eq!(tokens, vec!["بلغ", "١٢٫٥", "و١٬٠٠٠", "٫"]);
    }

    #[test]
    fn test_decimal_point_does_not_split() {
        let sentences = SentenceTokenizer::new().tokenize("بلغ النمو 2.5 في المئة.");
        assert_eq!(sentences.len(), 1);
    }
}
