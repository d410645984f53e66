use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::features::{ComplexWordPolicy, ReadabilityOptions};

/// Environment variable pointing at a JSON config file.
pub const CONFIG_ENV_VAR: &str = "NELA_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Stopword file; the built-in Arabic list is used when unset.
    #[serde(default)]
    pub stopwords_path: Option<PathBuf>,
    /// Directory holding one `<category>.txt` file per lexicon; built-in
    /// lexicons are used when unset.
    #[serde(default)]
    pub lexicon_dir: Option<PathBuf>,
    #[serde(default)]
    pub complex_word_policy: ComplexWordPolicy,
    #[serde(default = "default_complex_syllable_threshold")]
    pub complex_syllable_threshold: usize,
    #[serde(default = "default_long_word_length")]
    pub long_word_length: usize,
}

fn default_complex_syllable_threshold() -> usize {
    3
}

fn default_long_word_length() -> usize {
    7
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            stopwords_path: None,
            lexicon_dir: None,
            complex_word_policy: ComplexWordPolicy::default(),
            complex_syllable_threshold: default_complex_syllable_threshold(),
            long_word_length: default_long_word_length(),
        }
    }
}

impl ExtractorConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn from_env_or_default() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_path(path),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn readability_options(&self) -> ReadabilityOptions {
        ReadabilityOptions {
            complex_syllable_threshold: self.complex_syllable_threshold,
            long_word_length: self.long_word_length,
            complex_word_policy: self.complex_word_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NelaError;

    #[test]
    fn config_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nela.json");
        let cfg = ExtractorConfig {
            lexicon_dir: Some(dir.path().join("lexicons")),
            complex_word_policy: ComplexWordPolicy::Arabic,
            long_word_length: 8,
            ..ExtractorConfig::default()
        };
        cfg.to_path(&path).unwrap();
        let loaded = ExtractorConfig::from_path(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: ExtractorConfig =
            serde_json::from_str(r#"{ "complex_word_policy": "arabic" }"#).unwrap();
        assert_eq!(cfg.complex_word_policy, ComplexWordPolicy::Arabic);
        assert_eq!(cfg.complex_syllable_threshold, 3);
        assert_eq!(cfg.long_word_length, 7);
        assert!(cfg.stopwords_path.is_none());
    }

    #[test]
    fn malformed_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = ExtractorConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, NelaError::Config(_)));
    }

    #[test]
    fn env_var_selects_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env.json");
        let cfg = ExtractorConfig {
            long_word_length: 9,
            ..ExtractorConfig::default()
        };
        cfg.to_path(&path).unwrap();

        std::env::set_var(CONFIG_ENV_VAR, &path);
        let from_env = ExtractorConfig::from_env_or_default();
        std::env::remove_var(CONFIG_ENV_VAR);
        assert_eq!(from_env.unwrap(), cfg);

        assert_eq!(
            ExtractorConfig::from_env_or_default().unwrap(),
            ExtractorConfig::default()
        );
    }

    #[test]
    fn readability_options_follow_config() {
        let cfg = ExtractorConfig {
            complex_syllable_threshold: 4,
            ..ExtractorConfig::default()
        };
        let options = cfg.readability_options();
        assert_eq!(options.complex_syllable_threshold, 4);
        assert_eq!(options.long_word_length, 7);
    }
}
