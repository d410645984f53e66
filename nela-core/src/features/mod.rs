//! Feature Functions
//!
//! Pure functions over already tokenized input. Every ratio returns 0.0
//! when its denominator is zero.

mod affect;
mod diversity;
mod readability;
mod style;
mod syllables;

use std::collections::BTreeMap;

pub use affect::{acl_affect, bias_words, AffectRatios, BiasRatios, HEDGE_MAX_NGRAM};
pub use diversity::type_token_ratio;
pub use readability::{
    coleman_liau_index, flesch_kincaid_grade_level, lix, readability, smog_index,
    ReadabilityOptions, ReadabilityScores,
};
pub use style::{punctuation_case_stopword_ratios, StyleRatios, QUOTE_TOKENS};
pub use syllables::{count_complex_words, count_syllables, ComplexWordPolicy, LONG_VOWELS};

/// Flat mapping from feature name to value.
pub type FeatureMap = BTreeMap<String, f64>;

/// `count / total`, or 0.0 for an empty denominator.
pub(crate) fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Round to `places` decimals, ties to even.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}
