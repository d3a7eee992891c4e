use crate::error::{CoreError, Result};
use crate::gender::MorphGender;
use crate::tagger::Pos;
use crate::tokenizer::TokenizerMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageProfile {
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
    #[serde(default)]
    pub lexicon: Vec<LexiconGroup>,
    #[serde(default)]
    pub rules: RuleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default)]
    pub mode: TokenizerMode,
}

/// Words sharing a part of speech and gender
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconGroup {
    pub pos: Pos,
    pub gender: MorphGender,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Words never assigned a gender by ending
    #[serde(default)]
    pub stopwords: Vec<String>,
    #[serde(default)]
    pub suffixes: Vec<SuffixGroup>,
}

/// Word endings that mark a gender
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixGroup {
    pub gender: MorphGender,
    pub endings: Vec<String>,
    /// Minimum word length in characters, ending included
    #[serde(default = "default_min_len")]
    pub min_len: usize,
}

fn default_min_len() -> usize {
    1
}

impl LanguageProfile {
    /// Parse and validate a profile from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let profile: LanguageProfile = toml::from_str(content)
            .map_err(|e| CoreError::Configuration(format!("invalid language profile: {e}")))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load an external profile, e.g. to extend a built-in lexicon
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::Configuration(format!(
                "cannot read language profile {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(CoreError::Configuration(
                "profile metadata.code must not be empty".into(),
            ));
        }

        for group in &self.lexicon {
            if group.gender == MorphGender::Unknown {
                return Err(CoreError::Configuration(format!(
                    "{}: lexicon groups need a known gender",
                    self.metadata.code
                )));
            }
            if group.words.iter().any(|w| w.trim().is_empty()) {
                return Err(CoreError::Configuration(format!(
                    "{}: lexicon contains an empty word",
                    self.metadata.code
                )));
            }
        }

        for group in &self.rules.suffixes {
            if group.gender == MorphGender::Unknown {
                return Err(CoreError::Configuration(format!(
                    "{}: suffix groups need a known gender",
                    self.metadata.code
                )));
            }
            if group.endings.is_empty() || group.endings.iter().any(|e| e.is_empty()) {
                return Err(CoreError::Configuration(format!(
                    "{}: suffix groups need non-empty endings",
                    self.metadata.code
                )));
            }
        }

        Ok(())
    }
}
