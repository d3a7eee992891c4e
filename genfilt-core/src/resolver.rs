//! Per-language resolution of token genders on the target side
//!
//! Each target language uses one strategy, chosen once at startup by
//! [`Resolver::for_language`]:
//!
//! | language | strategy |
//! |----------|----------|
//! | de       | [`DictionaryResolver`] over the DEMorphy noun dictionary |
//! | fr, it   | [`FeatureResolver`] reading tagger gender features |
//! | he, ru   | [`SuffixResolver`] over word endings, tagger features first |

use crate::dictionary::MorphDictionary;
use crate::error::{CoreError, Result};
use crate::gender::{Gender, MorphGender, Verdict};
use crate::language::{LanguageProfile, TargetLanguage};
use crate::tagger::TaggedSentence;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

/// Capability to assign genders to the tokens of a tagged sentence
pub trait GenderResolver {
    /// One entry per token, `Unknown` where no gender applies
    fn genders(&self, sentence: &TaggedSentence) -> Vec<MorphGender>;

    /// Check the sentence against the requested gender
    fn verdict(&self, sentence: &TaggedSentence, requested: Gender) -> Verdict {
        Verdict::judge(self.genders(sentence), requested)
    }
}

/// Looks tokens up in a morphological dictionary
#[derive(Debug, Clone)]
pub struct DictionaryResolver {
    dictionary: Arc<MorphDictionary>,
}

impl DictionaryResolver {
    pub fn new(dictionary: Arc<MorphDictionary>) -> Self {
        Self { dictionary }
    }
}

impl GenderResolver for DictionaryResolver {
    fn genders(&self, sentence: &TaggedSentence) -> Vec<MorphGender> {
        sentence
            .iter()
            .map(|token| {
                self.dictionary
                    .lookup(&token.text)
                    .unwrap_or(MorphGender::Unknown)
            })
            .collect()
    }
}

/// Trusts the gender feature supplied by the tagger
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureResolver;

impl GenderResolver for FeatureResolver {
    fn genders(&self, sentence: &TaggedSentence) -> Vec<MorphGender> {
        sentence
            .iter()
            .map(|token| token.gender.unwrap_or(MorphGender::Unknown))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SuffixRule {
    ending: String,
    gender: MorphGender,
    min_len: usize,
}

/// Infers gender from word endings when the tagger gives none
#[derive(Debug, Clone, Default)]
pub struct SuffixResolver {
    rules: Vec<SuffixRule>,
    stopwords: HashSet<String>,
}

impl SuffixResolver {
    pub fn from_profile(profile: &LanguageProfile) -> Self {
        let mut rules: Vec<SuffixRule> = profile
            .rules
            .suffixes
            .iter()
            .flat_map(|group| {
                group.endings.iter().map(move |ending| SuffixRule {
                    ending: ending.to_lowercase(),
                    gender: group.gender,
                    min_len: group.min_len,
                })
            })
            .collect();
        // Longest ending first; stable sort keeps profile order among equals
        rules.sort_by_key(|rule| std::cmp::Reverse(rule.ending.chars().count()));

        let stopwords = profile
            .rules
            .stopwords
            .iter()
            .map(|w| w.to_lowercase())
            .collect();

        Self { rules, stopwords }
    }

    /// Gender implied by the ending of a single word
    pub fn word_gender(&self, word: &str) -> MorphGender {
        let word = word.to_lowercase();
        if self.stopwords.contains(&word) {
            return MorphGender::Unknown;
        }

        let len = word.chars().count();
        self.rules
            .iter()
            .find(|rule| len >= rule.min_len && word.ends_with(&rule.ending))
            .map(|rule| rule.gender)
            .unwrap_or(MorphGender::Unknown)
    }
}

impl GenderResolver for SuffixResolver {
    fn genders(&self, sentence: &TaggedSentence) -> Vec<MorphGender> {
        sentence
            .iter()
            .map(|token| match token.gender {
                Some(gender) if gender != MorphGender::Unknown => gender,
                _ => self.word_gender(&token.text),
            })
            .collect()
    }
}

/// Resolver selected for the run's target language
#[derive(Debug, Clone)]
pub enum Resolver {
    Dictionary(DictionaryResolver),
    Features(FeatureResolver),
    Suffix(SuffixResolver),
}

/// Inputs to the resolver factory
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    /// DEMorphy dictionary dump, needed for German
    pub dictionary_path: Option<PathBuf>,
    /// Replacement for the built-in language profile
    pub profile: Option<LanguageProfile>,
}

impl Resolver {
    /// Build the resolver for `language`.
    ///
    /// For German the dictionary is loaded here, so a missing file fails
    /// before any input is read.
    pub fn for_language(language: TargetLanguage, config: &ResolverConfig) -> Result<Self> {
        match language {
            TargetLanguage::German => {
                let path = config
                    .dictionary_path
                    .as_ref()
                    .ok_or_else(|| CoreError::DictionaryRequired(language.code().to_string()))?;
                let dictionary = MorphDictionary::load(path)?;
                Ok(Resolver::Dictionary(DictionaryResolver::new(Arc::new(
                    dictionary,
                ))))
            }
            TargetLanguage::French | TargetLanguage::Italian => {
                Ok(Resolver::Features(FeatureResolver))
            }
            TargetLanguage::Hebrew | TargetLanguage::Russian => {
                let profile = match &config.profile {
                    Some(profile) => profile,
                    None => crate::language::get_profile(language.code())?,
                };
                Ok(Resolver::Suffix(SuffixResolver::from_profile(profile)))
            }
        }
    }

    /// Short name of the strategy, for logging
    pub fn strategy(&self) -> &'static str {
        match self {
            Resolver::Dictionary(_) => "dictionary",
            Resolver::Features(_) => "tagger features",
            Resolver::Suffix(_) => "suffix rules",
        }
    }
}

impl GenderResolver for Resolver {
    fn genders(&self, sentence: &TaggedSentence) -> Vec<MorphGender> {
        match self {
            Resolver::Dictionary(resolver) => resolver.genders(sentence),
            Resolver::Features(resolver) => resolver.genders(sentence),
            Resolver::Suffix(resolver) => resolver.genders(sentence),
        }
    }
}
