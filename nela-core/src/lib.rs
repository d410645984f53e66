//! Arabic NELA
//!
//! Style and bias features for Arabic news text: punctuation and stopword
//! ratios, lexical diversity, readability indices, and lexicon-based affect
//! and bias ratios. Intended as a feature extractor for downstream
//! classifiers.
//!
//! ```
//! use nela_core::ArabicNela;
//!
//! let nela = ArabicNela::new();
//! let report = nela.extract("الحياة جميلة جدا");
//! assert_eq!(report.ttr, 1.0);
//! ```

pub mod analyzers;
pub mod config;
pub mod error;
pub mod extractor;
pub mod features;
pub mod lexicon;

pub use analyzers::{SentenceTokenizer, StopWords, Tokenizer, WordTokenizer};
pub use config::ExtractorConfig;
pub use error::{NelaError, Result};
pub use extractor::{ArabicNela, Document, FeatureReport};
pub use features::{
    AffectRatios, BiasRatios, ComplexWordPolicy, FeatureMap, ReadabilityOptions,
    ReadabilityScores, StyleRatios,
};
pub use lexicon::{Lexicon, LexiconCategory, LexiconSet};
