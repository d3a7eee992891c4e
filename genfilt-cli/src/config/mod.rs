//! Configuration file support
//!
//! ```toml
//! [source]
//! max_sentence_chars = 1000
//!
//! [target]
//! max_length_ratio = 2.0
//! german_dictionary = "german-morph-dictionaries/DE_morph_dict.txt"
//! ```

use crate::error::CliError;
use anyhow::{Context, Result};
use genfilt_core::settings::DEFAULT_MAX_LENGTH_RATIO;
use genfilt_core::tagger::DEFAULT_MAX_SENTENCE_CHARS;
use genfilt_core::FilterSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the DEMorphy dump when nothing else is configured
pub const DEFAULT_GERMAN_DICTIONARY: &str = "german-morph-dictionaries/DE_morph_dict.txt";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Source filter configuration
    #[serde(default)]
    pub source: SourceConfig,

    /// Target filter configuration
    #[serde(default)]
    pub target: TargetConfig,
}

/// Settings for `genfilt source`
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Lines longer than this many characters are skipped
    pub max_sentence_chars: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            max_sentence_chars: DEFAULT_MAX_SENTENCE_CHARS,
        }
    }
}

impl SourceConfig {
    pub fn settings(&self) -> FilterSettings {
        FilterSettings {
            max_sentence_chars: Some(self.max_sentence_chars),
            ..Default::default()
        }
    }
}

/// Settings for `genfilt target`
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TargetConfig {
    /// Target lines longer than this many characters are skipped; unlimited
    /// when unset
    pub max_sentence_chars: Option<usize>,

    /// Drop pairs whose target has more than this many times the source's words
    pub max_length_ratio: f64,

    /// DEMorphy dictionary used for German
    pub german_dictionary: Option<PathBuf>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            max_sentence_chars: None,
            max_length_ratio: DEFAULT_MAX_LENGTH_RATIO,
            german_dictionary: None,
        }
    }
}

impl TargetConfig {
    pub fn settings(&self) -> FilterSettings {
        FilterSettings {
            max_sentence_chars: self.max_sentence_chars,
            max_length_ratio: self.max_length_ratio,
        }
    }

    /// Dictionary path: explicit value, then config file, then the default location
    pub fn dictionary_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.german_dictionary.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GERMAN_DICTIONARY))
    }
}

impl CliConfig {
    /// Load the configuration file, or defaults when none is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.source.settings().validate()?;
        config.target.settings().validate()?;
        Ok(config)
    }
}
