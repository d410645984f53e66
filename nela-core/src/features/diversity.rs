use std::collections::HashSet;

use super::ratio;

/// Distinct raw tokens divided by total tokens.
///
/// Tokens are compared as-is, so diacritized and bare spellings of the
/// same word are different types.
pub fn type_token_ratio<S: AsRef<str>>(tokens: &[S]) -> f64 {
    let types: HashSet<&str> = tokens.iter().map(|t| t.as_ref()).collect();
    ratio(types.len(), tokens.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_distinct() {
        assert_eq!(type_token_ratio(&["الحياة", "جميلة", "جدا"]), 1.0);
    }

    #[test]
    fn test_repeated_tokens() {
        assert_eq!(type_token_ratio(&["كتاب", "قلم", "كتاب", "كتاب"]), 0.5);
    }

    #[test]
    fn test_diacritic_variants_are_distinct() {
        assert_eq!(type_token_ratio(&["كتاب", "كِتَاب"]), 1.0);
    }

    #[test]
    fn test_order_independent() {
        let a = type_token_ratio(&["أ", "ب", "أ", "ج"]);
        let b = type_token_ratio(&["ج", "أ", "أ", "ب"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_bounds() {
        for tokens in [vec!["و"], vec!["و", "و", "و"], vec!["و", "في", "و"]] {
            let ttr = type_token_ratio(&tokens);
            assert!(ttr > 0.0 && ttr <= 1.0);
        }
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(type_token_ratio::<&str>(&[]), 0.0);
    }
}
