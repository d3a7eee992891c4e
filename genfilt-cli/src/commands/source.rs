//! `genfilt source`: split English text by gender

use super::GlobalArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{open_input, resolve_patterns};
use crate::output::{
    check_distinct, create_output, default_output_path, write_report, RunReport,
    SourceFileReport, FEMININE_SUFFIX, MASCULINE_SUFFIX,
};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use genfilt_core::SourceFilter;
use std::path::{Path, PathBuf};

/// Arguments for the source command
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// English input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Feminine output file (default: <INPUT>.fem)
    #[arg(short = 'f', long, value_name = "FILE")]
    pub feminine_output: Option<PathBuf>,

    /// Masculine output file (default: <INPUT>.msc)
    #[arg(short = 'm', long, value_name = "FILE")]
    pub masculine_output: Option<PathBuf>,
}

impl SourceArgs {
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        log::info!("Starting source filtering");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(global.config.as_deref())?;
        let files = resolve_patterns(&self.input)?;
        if files.len() > 1 && (self.feminine_output.is_some() || self.masculine_output.is_some())
        {
            return Err(CliError::ConfigError(format!(
                "explicit output paths need a single input file, {} matched",
                files.len()
            ))
            .into());
        }

        let filter = SourceFilter::english(&config.source.settings())?;
        let mut progress = ProgressReporter::new(global.quiet);
        let mut reports = Vec::with_capacity(files.len());

        for input in &files {
            let feminine = self.output_path(input, self.feminine_output.as_deref(), FEMININE_SUFFIX);
            let masculine = self.output_path(input, self.masculine_output.as_deref(), MASCULINE_SUFFIX);
            check_distinct(&[input.as_path()], &[feminine.as_path(), masculine.as_path()])?;

            let reader = open_input(input)?;
            let mut fem_writer = create_output(&feminine)?;
            let mut msc_writer = create_output(&masculine)?;

            progress.start(&input.display().to_string());
            let result = filter.run(reader, &mut fem_writer, &mut msc_writer, &progress);
            progress.finish();
            let stats =
                result.with_context(|| format!("Failed to filter {}", input.display()))?;

            log::info!(
                "{}: {} feminine, {} masculine, {} unclassified, {} skipped",
                input.display(),
                stats.feminine,
                stats.masculine,
                stats.unclassified,
                stats.skipped
            );
            if !global.quiet {
                eprintln!("Read {} lines from {}", stats.total, input.display());
                eprintln!(
                    "Wrote {} feminine lines to {}",
                    stats.feminine,
                    feminine.display()
                );
                eprintln!(
                    "Wrote {} masculine lines to {}",
                    stats.masculine,
                    masculine.display()
                );
            }

            reports.push(SourceFileReport {
                input: input.clone(),
                feminine_output: feminine,
                masculine_output: masculine,
                stats,
            });
        }

        if let Some(path) = &global.report {
            write_report(path, &RunReport::Source { files: reports })?;
        }
        Ok(())
    }

    fn output_path(&self, input: &Path, explicit: Option<&Path>, suffix: &str) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input, suffix))
    }
}
