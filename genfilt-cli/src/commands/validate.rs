//! Validate command implementation

use anyhow::Result;
use clap::Args;
use genfilt_core::LanguageProfile;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Language profile to check
    #[arg(value_name = "FILE")]
    pub profile: PathBuf,
}

impl ValidateArgs {
    pub fn execute(&self) -> Result<()> {
        println!("Validating language profile: {}", self.profile.display());

        match LanguageProfile::from_file(&self.profile) {
            Ok(profile) => {
                let words: usize = profile.lexicon.iter().map(|g| g.words.len()).sum();
                let endings: usize = profile.rules.suffixes.iter().map(|g| g.endings.len()).sum();
                println!("✓ Profile is valid");
                println!("  Language code: {}", profile.metadata.code);
                println!("  Language name: {}", profile.metadata.name);
                println!("  Lexicon words: {words}");
                println!("  Suffix rules:  {endings}");
                Ok(())
            }
            Err(e) => {
                println!("✗ Profile is invalid");
                Err(anyhow::anyhow!("Validation failed: {e}"))
            }
        }
    }
}
