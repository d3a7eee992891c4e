use super::config::LanguageProfile;
use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

static LANGUAGE_PROFILES: OnceLock<std::result::Result<HashMap<String, LanguageProfile>, String>> =
    OnceLock::new();

macro_rules! embed_language_profile {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

fn load_embedded_profiles() -> std::result::Result<HashMap<String, LanguageProfile>, String> {
    let mut profiles = HashMap::new();

    let embedded_profiles = [
        embed_language_profile!("en", "../../configs/languages/english.toml"),
        embed_language_profile!("de", "../../configs/languages/german.toml"),
        embed_language_profile!("fr", "../../configs/languages/french.toml"),
        embed_language_profile!("it", "../../configs/languages/italian.toml"),
        embed_language_profile!("he", "../../configs/languages/hebrew.toml"),
        embed_language_profile!("ru", "../../configs/languages/russian.toml"),
    ];

    for (code, toml_content) in embedded_profiles {
        let profile = LanguageProfile::from_toml_str(toml_content)
            .map_err(|e| format!("failed to parse {code} profile: {e}"))?;

        if profile.metadata.code != code {
            return Err(format!(
                "profile code mismatch: expected {}, got {}",
                code, profile.metadata.code
            ));
        }

        profiles.insert(code.to_string(), profile);
    }

    Ok(profiles)
}

fn profiles() -> Result<&'static HashMap<String, LanguageProfile>> {
    LANGUAGE_PROFILES
        .get_or_init(load_embedded_profiles)
        .as_ref()
        .map_err(|e| CoreError::Configuration(e.clone()))
}

/// Built-in profile for a language code
pub fn get_profile(code: &str) -> Result<&'static LanguageProfile> {
    profiles()?
        .get(code)
        .ok_or_else(|| CoreError::Configuration(format!("no built-in profile for '{code}'")))
}

/// Codes of all built-in profiles, sorted
pub fn list_languages() -> Result<Vec<&'static str>> {
    let mut codes: Vec<&'static str> = profiles()?.keys().map(|s| s.as_str()).collect();
    codes.sort_unstable();
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_profile_english() {
        let profile = get_profile("en").expect("English profile should exist");
        assert_eq!(profile.metadata.code, "en");
        assert_eq!(profile.metadata.name, "English");
        assert!(!profile.lexicon.is_empty());
    }

    #[test]
    fn test_get_profile_unknown() {
        match get_profile("xx") {
            Err(CoreError::Configuration(msg)) => assert!(msg.contains("'xx'")),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_list_languages_sorted() {
        let codes = list_languages().unwrap();
        assert_eq!(codes, vec!["de", "en", "fr", "he", "it", "ru"]);
    }

    #[test]
    fn test_get_profile_multiple_times() {
        let first = get_profile("ru").unwrap();
        let second = get_profile("ru").unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_rule_based_profiles_have_suffixes() {
        for code in ["he", "ru"] {
            let profile = get_profile(code).unwrap();
            assert!(!profile.rules.suffixes.is_empty(), "{code} has no suffix rules");
        }
    }
}
