//! Lexicon Matching
//!
//! Affect and bias ratios: lexicon hits divided by the token count.
//! Categories may share entries; each category counts its own hits.

use serde::{Deserialize, Serialize};

use super::{ratio, FeatureMap};
use crate::lexicon::{LexiconCategory, LexiconSet};

/// Longest hedge phrase, in tokens, matched by [`bias_words`].
pub const HEDGE_MAX_NGRAM: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AffectRatios {
    pub wneg_count: f64,
    pub wpos_count: f64,
    pub wneu_count: f64,
}

impl AffectRatios {
    pub fn to_map(&self) -> FeatureMap {
        FeatureMap::from([
            ("wneg_count".to_string(), self.wneg_count),
            ("wpos_count".to_string(), self.wpos_count),
            ("wneu_count".to_string(), self.wneu_count),
        ])
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BiasRatios {
    pub bias: f64,
    pub assertatives: f64,
    pub factives: f64,
    pub hedges: f64,
    pub implicatives: f64,
    pub report_verbs: f64,
    pub positive_op: f64,
    pub negative_op: f64,
}

impl BiasRatios {
    pub fn to_map(&self) -> FeatureMap {
        FeatureMap::from([
            ("bias".to_string(), self.bias),
            ("assertatives".to_string(), self.assertatives),
            ("factives".to_string(), self.factives),
            ("hedges".to_string(), self.hedges),
            ("implicatives".to_string(), self.implicatives),
            ("report_verbs".to_string(), self.report_verbs),
            ("positive_op".to_string(), self.positive_op),
            ("negative_op".to_string(), self.negative_op),
        ])
    }
}

fn token_ratio<S: AsRef<str>>(
    tokens: &[S],
    lexicons: &LexiconSet,
    category: LexiconCategory,
) -> f64 {
    ratio(lexicons.get(category).count_tokens(tokens), tokens.len())
}

/// Negative, positive and neutral sentiment hits per token.
pub fn acl_affect<S: AsRef<str>>(tokens: &[S], lexicons: &LexiconSet) -> AffectRatios {
    AffectRatios {
        wneg_count: token_ratio(tokens, lexicons, LexiconCategory::Negative),
        wpos_count: token_ratio(tokens, lexicons, LexiconCategory::Positive),
        wneu_count: token_ratio(tokens, lexicons, LexiconCategory::Neutral),
    }
}

/// Bias and rhetorical lexicon hits per token; hedges also match
/// bigrams and trigrams.
pub fn bias_words<S: AsRef<str>>(tokens: &[S], lexicons: &LexiconSet) -> BiasRatios {
    let hedge_hits = lexicons
        .get(LexiconCategory::Hedges)
        .count_ngrams(tokens, HEDGE_MAX_NGRAM);

    BiasRatios {
        bias: token_ratio(tokens, lexicons, LexiconCategory::Bias),
        assertatives: token_ratio(tokens, lexicons, LexiconCategory::Assertatives),
        factives: token_ratio(tokens, lexicons, LexiconCategory::Factives),
        hedges: ratio(hedge_hits, tokens.len()),
        implicatives: token_ratio(tokens, lexicons, LexiconCategory::Implicatives),
        report_verbs: token_ratio(tokens, lexicons, LexiconCategory::ReportVerbs),
        positive_op: token_ratio(tokens, lexicons, LexiconCategory::Positive),
        negative_op: token_ratio(tokens, lexicons, LexiconCategory::Negative),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn lexicons() -> LexiconSet {
        LexiconSet::builtin()
            .with_lexicon(Lexicon::new(LexiconCategory::Negative, ["فشل", "أزمة"]))
            .with_lexicon(Lexicon::new(LexiconCategory::Positive, ["نجاح", "جميلة"]))
            .with_lexicon(Lexicon::new(LexiconCategory::Neutral, ["عادي"]))
            .with_lexicon(Lexicon::new(LexiconCategory::Hedges, ["ربما", "على ما يبدو"]))
            .with_lexicon(Lexicon::new(LexiconCategory::ReportVerbs, ["قال", "أكد"]))
            .with_lexicon(Lexicon::new(LexiconCategory::Assertatives, ["أكد"]))
    }

    #[test]
    fn test_affect_ratios() {
        let words = tokens("نجاح ثم فشل ثم أزمة يوم عادي");
        let affect = acl_affect(&words, &lexicons());
        assert_eq!(affect.wneg_count, 2.0 / 7.0);
        assert_eq!(affect.wpos_count, 1.0 / 7.0);
        assert_eq!(affect.wneu_count, 1.0 / 7.0);
        assert!(affect.wneg_count + affect.wpos_count + affect.wneu_count <= 1.0);
    }

    #[test]
    fn test_affect_is_case_and_form_sensitive() {
        let words = tokens("الفشل فشلا فَشَل");
        let affect = acl_affect(&words, &lexicons());
        assert_eq!(affect.wneg_count, 0.0);
    }

    #[test]
    fn test_trigram_hedge_counted_once() {
        let words = tokens("على ما يبدو انتهت الأزمة");
        let bias = bias_words(&words, &lexicons());
        assert_eq!(bias.hedges, 1.0 / 5.0);
    }

    #[test]
    fn test_unigram_and_phrase_hedges_add_up() {
        let words = tokens("ربما على ما يبدو");
        let bias = bias_words(&words, &lexicons());
        assert_eq!(bias.hedges, 2.0 / 4.0);
    }

    #[test]
    fn test_overlapping_categories_counted_independently() {
        let words = tokens("أكد الوزير ذلك");
        let bias = bias_words(&words, &lexicons());
        assert_eq!(bias.report_verbs, 1.0 / 3.0);
        assert_eq!(bias.assertatives, 1.0 / 3.0);
    }

    #[test]
    fn test_opinion_ratios_reuse_sentiment_lexicons() {
        let words = tokens("الحياة جميلة رغم الفشل و فشل");
        let set = lexicons();
        let affect = acl_affect(&words, &set);
        let bias = bias_words(&words, &set);
        assert_eq!(bias.positive_op, affect.wpos_count);
        assert_eq!(bias.negative_op, affect.wneg_count);
    }

    #[test]
    fn test_empty_tokens_are_zero() {
        let set = lexicons();
        assert_eq!(acl_affect::<String>(&[], &set), AffectRatios::default());
        assert_eq!(bias_words::<String>(&[], &set), BiasRatios::default());
    }

    #[test]
    fn test_bias_map_keys() {
        let map = BiasRatios::default().to_map();
        assert_eq!(map.len(), 8);
        assert!(map.contains_key("report_verbs"));
        assert!(map.contains_key("negative_op"));
    }
}
