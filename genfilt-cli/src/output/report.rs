//! JSON run reports written with `--report`

use anyhow::{Context, Result};
use genfilt_core::{Gender, SourceStats, TargetLanguage, TargetStats};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Statistics for one `genfilt` invocation
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum RunReport {
    Source { files: Vec<SourceFileReport> },
    Target(TargetReport),
}

/// One source-filtered input file
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SourceFileReport {
    pub input: PathBuf,
    pub feminine_output: PathBuf,
    pub masculine_output: PathBuf,
    pub stats: SourceStats,
}

/// A target-filtered parallel corpus
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TargetReport {
    pub language: String,
    pub gender: String,
    pub source: PathBuf,
    pub target: PathBuf,
    pub source_output: PathBuf,
    pub target_output: PathBuf,
    pub stats: TargetStats,
}

impl TargetReport {
    pub fn new(
        language: TargetLanguage,
        gender: Gender,
        inputs: (&Path, &Path),
        outputs: (&Path, &Path),
        stats: TargetStats,
    ) -> Self {
        Self {
            language: language.code().to_string(),
            gender: gender.code().to_string(),
            source: inputs.0.to_path_buf(),
            target: inputs.1.to_path_buf(),
            source_output: outputs.0.to_path_buf(),
            target_output: outputs.1.to_path_buf(),
            stats,
        }
    }
}

/// Write `report` as pretty-printed JSON
pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let mut writer = super::create_output(path)?;
    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    writeln!(writer)?;
    writer.flush()?;
    log::info!("Wrote run report to {}", path.display());
    Ok(())
}
