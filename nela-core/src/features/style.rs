use serde::{Deserialize, Serialize};

use super::{ratio, FeatureMap};
use crate::analyzers::{is_arabic_punctuation, StopWords};

/// Tokens counted as quotation marks.
pub const QUOTE_TOKENS: [&str; 7] = ["\"", "«", "»", "“", "”", "``", "''"];

/// Punctuation and stopword ratios over raw word tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleRatios {
    pub quotes: f64,
    pub exclaim: f64,
    pub allpunc: f64,
    pub stops: f64,
}

impl StyleRatios {
    pub fn to_map(&self) -> FeatureMap {
        FeatureMap::from([
            ("quotes".to_string(), self.quotes),
            ("exclaim".to_string(), self.exclaim),
            ("allpunc".to_string(), self.allpunc),
            ("stops".to_string(), self.stops),
        ])
    }
}

/// Share of quote, exclamation, Arabic punctuation and stopword tokens.
pub fn punctuation_case_stopword_ratios<S: AsRef<str>>(
    tokens: &[S],
    stop_words: &StopWords,
) -> StyleRatios {
    let mut quotes = 0;
    let mut exclaim = 0;
    let mut allpunc = 0;
    let mut stops = 0;

    for token in tokens.iter().map(|t| t.as_ref()) {
        if QUOTE_TOKENS.contains(&token) {
            quotes += 1;
        }
        if token == "!" {
            exclaim += 1;
        }
        if is_arabic_punctuation(token) {
            allpunc += 1;
        }
        if stop_words.contains(token) {
            stops += 1;
        }
    }

    let total = tokens.len();
    StyleRatios {
        quotes: ratio(quotes, total),
        exclaim: ratio(exclaim, total),
        allpunc: ratio(allpunc, total),
        stops: ratio(stops, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_punctuation() {
        let ratios = punctuation_case_stopword_ratios(
            &tokens(&["الحياة", "جميلة", "جدا"]),
            &StopWords::new(),
        );
        assert_eq!(ratios.allpunc, 0.0);
        assert_eq!(ratios.exclaim, 0.0);
        assert_eq!(ratios.quotes, 0.0);
        assert_eq!(ratios.stops, 0.0);
    }

    #[test]
    fn test_counts_each_category() {
        let words = tokens(&["قال", "«", "هذا", "رائع", "»", "!", "؟", "\""]);
        let ratios = punctuation_case_stopword_ratios(&words, &StopWords::arabic());
        assert_eq!(ratios.quotes, 3.0 / 8.0);
        assert_eq!(ratios.exclaim, 1.0 / 8.0);
        // « » ! ؟
        assert_eq!(ratios.allpunc, 4.0 / 8.0);
        assert_eq!(ratios.stops, 1.0 / 8.0);
    }

    #[test]
    fn test_typographic_and_tokenizer_quotes() {
        let words = tokens(&["“", "خبر", "”", "``", "عاجل", "''"]);
        let ratios = punctuation_case_stopword_ratios(&words, &StopWords::new());
        assert_eq!(ratios.quotes, 4.0 / 6.0);
        assert_eq!(ratios.allpunc, 0.0);
    }

    #[test]
    fn test_empty_tokens_are_zero() {
        let ratios = punctuation_case_stopword_ratios::<String>(&[], &StopWords::arabic());
        assert_eq!(ratios, StyleRatios::default());
    }

    #[test]
    fn test_to_map_keys() {
        let map = StyleRatios::default().to_map();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["allpunc", "exclaim", "quotes", "stops"]);
    }
}
