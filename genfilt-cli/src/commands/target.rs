//! `genfilt target`: keep gender-consistent parallel pairs

use super::GlobalArgs;
use crate::config::CliConfig;
use crate::input::{open_input, require_file};
use crate::output::{
    check_distinct, create_output, default_output_path, write_report, RunReport, TargetReport,
    TARGET_SUFFIX,
};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use genfilt_core::{
    AnnotationSource, ConlluReader, Gender, LanguageProfile, ResolverConfig, TargetFilter,
    TargetLanguage,
};
use std::path::{Path, PathBuf};

/// Arguments for the target command
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Source side of the parallel corpus
    #[arg(short, long, value_name = "FILE")]
    pub source: PathBuf,

    /// Target side of the parallel corpus, one line per source line
    #[arg(short, long, value_name = "FILE")]
    pub target: PathBuf,

    /// Target language (de, fr, it, he, ru)
    #[arg(short, long)]
    pub language: TargetLanguage,

    /// Gender to keep (fem, msc)
    #[arg(short, long)]
    pub gender: Gender,

    /// Filtered source output (default: <SOURCE>.target_filtered)
    #[arg(long, value_name = "FILE")]
    pub source_output: Option<PathBuf>,

    /// Filtered target output (default: <TARGET>.target_filtered)
    #[arg(long, value_name = "FILE")]
    pub target_output: Option<PathBuf>,

    /// DEMorphy dictionary dump, used for German
    #[arg(long, value_name = "FILE", env = "GENFILT_DE_DICT")]
    pub dictionary: Option<PathBuf>,

    /// Language profile replacing the built-in one
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// CoNLL-U annotations of the target side, used instead of the built-in tagger
    #[arg(long, value_name = "FILE")]
    pub annotations: Option<PathBuf>,
}

impl TargetArgs {
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        log::info!("Starting target filtering");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(global.config.as_deref())?;

        require_file(&self.source)?;
        require_file(&self.target)?;
        if let Some(path) = &self.annotations {
            require_file(path)?;
        }

        let source_output = self.output_path(&self.source, self.source_output.as_deref());
        let target_output = self.output_path(&self.target, self.target_output.as_deref());
        check_distinct(
            &[self.source.as_path(), self.target.as_path()],
            &[source_output.as_path(), target_output.as_path()],
        )?;

        let resolver_config = self.resolver_config(&config)?;
        let filter = TargetFilter::for_language(
            self.language,
            self.gender,
            &resolver_config,
            &config.target.settings(),
        )
        .with_context(|| format!("Cannot set up the {} filter", self.language.name()))?;

        let mut annotations = match &self.annotations {
            Some(path) => Some(ConlluReader::new(open_input(path)?)),
            None => None,
        };
        let source = open_input(&self.source)?;
        let target = open_input(&self.target)?;
        let mut source_writer = create_output(&source_output)?;
        let mut target_writer = create_output(&target_output)?;

        let mut progress = ProgressReporter::new(global.quiet);
        progress.start(&self.target.display().to_string());
        let result = filter.run(
            source,
            target,
            annotations
                .as_mut()
                .map(|reader| reader as &mut dyn AnnotationSource),
            &mut source_writer,
            &mut target_writer,
            &progress,
        );
        progress.finish();
        let stats = result.with_context(|| {
            format!(
                "Failed to filter {} / {}",
                self.source.display(),
                self.target.display()
            )
        })?;

        log::info!(
            "{} pairs: {} kept, {} too long, {} contradicted, {} mixed, {} without evidence, {} skipped",
            stats.total,
            stats.kept,
            stats.dropped_length,
            stats.contradicted,
            stats.mixed,
            stats.no_evidence,
            stats.skipped
        );
        if !global.quiet {
            eprintln!(
                "Read {} lines from {} and {}",
                stats.total,
                self.source.display(),
                self.target.display()
            );
            eprintln!(
                "Wrote {} {} lines to {} and {}",
                stats.kept,
                self.gender,
                source_output.display(),
                target_output.display()
            );
        }

        if let Some(path) = &global.report {
            let report = TargetReport::new(
                self.language,
                self.gender,
                (self.source.as_path(), self.target.as_path()),
                (source_output.as_path(), target_output.as_path()),
                stats,
            );
            write_report(path, &RunReport::Target(report))?;
        }
        Ok(())
    }

    fn output_path(&self, input: &Path, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input, TARGET_SUFFIX))
    }

    /// Resources for the resolver; the dictionary is only consulted for German
    fn resolver_config(&self, config: &CliConfig) -> Result<ResolverConfig> {
        let profile = match &self.profile {
            Some(path) => {
                let profile = LanguageProfile::from_file(path)?;
                if profile.metadata.code != self.language.code() {
                    log::warn!(
                        "Profile {} is for '{}', applying it to '{}'",
                        path.display(),
                        profile.metadata.code,
                        self.language.code()
                    );
                }
                Some(profile)
            }
            None => None,
        };

        let dictionary_path = match self.language {
            TargetLanguage::German => {
                Some(config.target.dictionary_path(self.dictionary.as_deref()))
            }
            _ => None,
        };

        Ok(ResolverConfig {
            dictionary_path,
            profile,
        })
    }
}
