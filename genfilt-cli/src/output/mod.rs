//! Output files and run reports

pub mod report;

pub use report::{write_report, RunReport, SourceFileReport, TargetReport};

use crate::error::CliError;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Suffix of the feminine source partition
pub const FEMININE_SUFFIX: &str = "fem";
/// Suffix of the masculine source partition
pub const MASCULINE_SUFFIX: &str = "msc";
/// Suffix of both sides of a target-filtered corpus
pub const TARGET_SUFFIX: &str = "target_filtered";

/// `corpus.en` becomes `corpus.en.<suffix>`
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// Create (or truncate) an output file with buffering
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output: {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Reject output paths that would clobber an input or each other
pub fn check_distinct(inputs: &[&Path], outputs: &[&Path]) -> Result<()> {
    let inputs: Vec<PathBuf> = inputs.iter().map(|path| comparable(path)).collect();
    let mut seen: Vec<PathBuf> = Vec::with_capacity(outputs.len());

    for output in outputs {
        let resolved = comparable(output);
        if inputs.contains(&resolved) || seen.contains(&resolved) {
            return Err(CliError::OutputConflict(output.display().to_string()).into());
        }
        seen.push(resolved);
    }
    Ok(())
}

/// Canonical parent directory joined with the file name.
///
/// Outputs may not exist yet, so only the parent is resolved. Falls back to
/// the path as written when the parent cannot be resolved.
fn comparable(path: &Path) -> PathBuf {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match (fs::canonicalize(parent), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}
