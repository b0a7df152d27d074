//! Output directory checks

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Check that `dir` is an existing, writable directory.
///
/// Returns the canonical absolute path. Writability is probed by creating
/// (and immediately removing) a temporary file inside the directory.
pub fn validate_output_dir(dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();

    let metadata = fs::metadata(dir).map_err(|e| Error::output_dir(dir, e.to_string()))?;
    if !metadata.is_dir() {
        return Err(Error::output_dir(dir, "not a directory"));
    }

    let canonical = fs::canonicalize(dir).map_err(|e| Error::output_dir(dir, e.to_string()))?;

    NamedTempFile::new_in(&canonical)
        .map_err(|e| Error::output_dir(&canonical, format!("not writable: {e}")))?;

    Ok(canonical)
}
