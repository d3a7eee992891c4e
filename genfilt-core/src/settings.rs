//! Tunable filter settings

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Default bound on target/source word-count ratio
pub const DEFAULT_MAX_LENGTH_RATIO: f64 = 2.0;

/// Settings shared by the source and target filters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Sentences longer than this many characters are skipped; `None` means
    /// no limit
    pub max_sentence_chars: Option<usize>,

    /// Pairs whose target has more than `ratio` times the source's words
    /// are dropped as degenerate translations
    pub max_length_ratio: f64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            max_sentence_chars: None,
            max_length_ratio: DEFAULT_MAX_LENGTH_RATIO,
        }
    }
}

impl FilterSettings {
    pub fn validate(&self) -> Result<()> {
        if self.max_sentence_chars == Some(0) {
            return Err(CoreError::Configuration(
                "max_sentence_chars must be greater than 0".into(),
            ));
        }
        if !self.max_length_ratio.is_finite() || self.max_length_ratio <= 0.0 {
            return Err(CoreError::Configuration(
                "max_length_ratio must be a positive number".into(),
            ));
        }
        Ok(())
    }

    /// Whether the target side is too long relative to the source side
    pub fn exceeds_length_ratio(&self, source_words: usize, target_words: usize) -> bool {
        (source_words as f64) * self.max_length_ratio < target_words as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = FilterSettings::default();
        assert_eq!(settings.max_sentence_chars, None);
        assert_eq!(settings.max_length_ratio, 2.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let settings: FilterSettings = toml::from_str("max_length_ratio = 3.5").unwrap();
        assert_eq!(settings.max_length_ratio, 3.5);
        assert_eq!(settings.max_sentence_chars, None);

        let capped: FilterSettings = toml::from_str("max_sentence_chars = 800").unwrap();
        assert_eq!(capped.max_sentence_chars, Some(800));
    }

    #[test]
    fn test_invalid_values() {
        let zero_chars = FilterSettings {
            max_sentence_chars: Some(0),
            ..Default::default()
        };
        assert!(zero_chars.validate().is_err());

        let negative_ratio = FilterSettings {
            max_length_ratio: -1.0,
            ..Default::default()
        };
        assert!(negative_ratio.validate().is_err());

        let nan_ratio = FilterSettings {
            max_length_ratio: f64::NAN,
            ..Default::default()
        };
        assert!(nan_ratio.validate().is_err());
    }

    #[test]
    fn test_length_ratio() {
        let settings = FilterSettings::default();
        assert!(!settings.exceeds_length_ratio(3, 6));
        assert!(settings.exceeds_length_ratio(3, 7));
        assert!(settings.exceeds_length_ratio(0, 1));
        assert!(!settings.exceeds_length_ratio(0, 0));
    }
}
