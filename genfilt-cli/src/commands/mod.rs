//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};
use genfilt_core::language::SOURCE_LANGUAGE;
use genfilt_core::TargetLanguage;
use std::path::PathBuf;

pub mod source;
pub mod target;
pub mod validate;

/// Options shared by every command
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress progress, summaries and logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write run statistics as JSON
    #[arg(long, value_name = "FILE", global = true)]
    pub report: Option<PathBuf>,
}

impl GlobalArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split English text into feminine and masculine subsets
    Source(source::SourceArgs),

    /// Keep parallel pairs whose target agrees with one gender
    Target(target::TargetArgs),

    /// Check a language profile file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported target languages
    Languages,
}

impl Commands {
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        global.init_logging();

        match self {
            Commands::Source(args) => args.execute(global),
            Commands::Target(args) => args.execute(global),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                match subcommand {
                    ListCommands::Languages => print!("{}", language_listing()),
                }
                Ok(())
            }
        }
    }
}

fn language_listing() -> String {
    let mut listing = format!("Source language: {SOURCE_LANGUAGE}\n\nTarget languages:\n");
    for language in TargetLanguage::ALL {
        listing.push_str(&format!("  {:<4}{}\n", language.code(), language.name()));
    }
    listing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_listing() {
        let listing = language_listing();
        assert!(listing.starts_with("Source language: en"));
        for code in ["de", "fr", "he", "it", "ru"] {
            assert!(listing.contains(&format!("  {code}")), "missing {code}");
        }
        assert!(listing.contains("German"));
    }

    #[test]
    fn test_list_command_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Languages,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Languages"));
    }
}
