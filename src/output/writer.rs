//! JSON export writer
//!
//! Writes one user's records as a pretty-printed JSON array.

use crate::error::{Error, Result};
use crate::types::{AsOf, HistoryRecord};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Indentation of exported files
const INDENT: &[u8] = b"    ";

/// File name of a user's export: `{as-of without colons}.{user}.json`
pub fn export_file_name(as_of: &AsOf, user: &str) -> String {
    format!("{}.{user}.json", as_of.file_stem())
}

/// Writes export batches into an output directory
#[derive(Debug, Clone)]
pub struct HistoryWriter {
    output_dir: PathBuf,
}

impl HistoryWriter {
    /// Create a writer for an already validated directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full path of a user's export file
    pub fn path_for(&self, as_of: &AsOf, user: &str) -> PathBuf {
        self.output_dir.join(export_file_name(as_of, user))
    }

    /// Write a user's records, replacing any previous export of the same name.
    ///
    /// The file is written to a temporary sibling first and renamed into
    /// place, so a failure never leaves a partial export behind.
    ///
    /// Users containing a path separator are rejected so that every export
    /// stays inside the output directory.
    pub fn write(&self, as_of: &AsOf, user: &str, records: &[HistoryRecord]) -> Result<PathBuf> {
        let path = self.path_for(as_of, user);

        if user.contains(['/', '\\']) {
            return Err(Error::write(
                &path,
                "user identifier must not contain a path separator",
            ));
        }

        let mut temp_file = NamedTempFile::new_in(&self.output_dir)
            .map_err(|e| Error::write(&path, format!("creating temporary file: {e}")))?;

        {
            let mut writer = BufWriter::new(&mut temp_file);
            let formatter = PrettyFormatter::with_indent(INDENT);
            let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
            records
                .serialize(&mut ser)
                .map_err(|e| Error::write(&path, format!("serializing records: {e}")))?;
            writer
                .flush()
                .map_err(|e| Error::write(&path, format!("flushing: {e}")))?;
        }

        temp_file
            .persist(&path)
            .map_err(|e| Error::write(&path, format!("renaming into place: {}", e.error)))?;

        debug!("Wrote {} records to {}", records.len(), path.display());
        Ok(path)
    }
}
