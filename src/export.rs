//! Download-as-file action: writes the summary as a plain-text document.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::error::Result;
use crate::domain::SummaryResult;

/// Directory downloads land in: the user's download directory, falling back
/// to the current working directory.
pub fn default_export_dir() -> Result<PathBuf> {
    match dirs::download_dir() {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

/// Write the summary document into `dir` and return the created path.
///
/// The filename is derived from the video title
/// (see [`SummaryResult::export_file_name`]).
pub fn write_summary(result: &SummaryResult, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(result.export_file_name());
    fs::write(&path, result.export_document())?;
    Ok(path)
}
