//! Opening corpus files for line-by-line reading

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Fail early when a required input is missing
pub fn require_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    Ok(())
}

/// Open a corpus file with buffering
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open input: {}", path.display()))?;
    Ok(BufReader::new(file))
}
