//! Supported languages and their profiles
//!
//! Every language ships an embedded TOML profile describing how to
//! tokenize it and which closed-class words or endings carry gender.
//! Target languages additionally select a gender resolution strategy.

pub mod config;
pub mod loader;

pub use config::{LanguageProfile, LexiconGroup, MetadataConfig, RuleConfig, SuffixGroup};
pub use loader::{get_profile, list_languages};

use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// Profile code of the source-side language
pub const SOURCE_LANGUAGE: &str = "en";

/// Languages accepted by the target filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    /// German, resolved through the DEMorphy dictionary
    German,
    /// French, resolved through tagger features
    French,
    /// Italian, resolved through tagger features
    Italian,
    /// Hebrew, resolved through word-final letter rules
    Hebrew,
    /// Russian, resolved through ending rules
    Russian,
}

impl TargetLanguage {
    /// All target languages in code order
    pub const ALL: [TargetLanguage; 5] = [
        TargetLanguage::German,
        TargetLanguage::French,
        TargetLanguage::Hebrew,
        TargetLanguage::Italian,
        TargetLanguage::Russian,
    ];

    /// Two-letter language code
    pub fn code(&self) -> &'static str {
        match self {
            TargetLanguage::German => "de",
            TargetLanguage::French => "fr",
            TargetLanguage::Italian => "it",
            TargetLanguage::Hebrew => "he",
            TargetLanguage::Russian => "ru",
        }
    }

    /// English name of the language
    pub fn name(&self) -> &'static str {
        match self {
            TargetLanguage::German => "German",
            TargetLanguage::French => "French",
            TargetLanguage::Italian => "Italian",
            TargetLanguage::Hebrew => "Hebrew",
            TargetLanguage::Russian => "Russian",
        }
    }

    /// Comma-separated list of supported codes
    pub fn supported_codes() -> String {
        Self::ALL
            .iter()
            .map(|lang| lang.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TargetLanguage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "de" | "german" => Ok(TargetLanguage::German),
            "fr" | "french" => Ok(TargetLanguage::French),
            "it" | "italian" => Ok(TargetLanguage::Italian),
            "he" | "hebrew" => Ok(TargetLanguage::Hebrew),
            "ru" | "russian" => Ok(TargetLanguage::Russian),
            _ => Err(CoreError::UnsupportedLanguage {
                code: s.to_string(),
                supported: Self::supported_codes(),
            }),
        }
    }
}
