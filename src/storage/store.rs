//! CSV-backed entry store
//!
//! The diary table lives in a single CSV file with the fixed header
//! `Date,Description`. Every save rewrites the whole file; there is no
//! locking, so concurrent writers race and the last one wins.

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::entry::{Entry, COLUMN_HEADER};
use super::error::{StorageError, StorageResult};

/// Handle to the CSV file holding the diary table
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    /// Create a store for the given file path. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name shown to users in error messages
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Load all entries in file order.
    ///
    /// A missing file is created with only the header row and yields an
    /// empty table.
    pub fn load(&self) -> StorageResult<Vec<Entry>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = ?self.path, "Diary file not found, creating it");
                self.save(&[])?;
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers = reader.headers()?.clone();
        if headers.iter().ne(COLUMN_HEADER.iter().copied()) {
            return Err(StorageError::InvalidHeader {
                found: headers.iter().map(str::to_string).collect(),
            });
        }

        let mut entries = Vec::new();
        for result in reader.records() {
            let record = result?;
            if record.len() != COLUMN_HEADER.len() {
                return Err(StorageError::FieldCount {
                    line: record.position().map(|p| p.line()).unwrap_or_default(),
                    found: record.len(),
                });
            }
            entries.push(record.deserialize::<Entry>(Some(&headers))?);
        }

        tracing::debug!(path = ?self.path, count = entries.len(), "Loaded diary entries");
        Ok(entries)
    }

    /// Overwrite the file with the header followed by `entries`.
    pub fn save(&self, entries: &[Entry]) -> StorageResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        writer.write_record(COLUMN_HEADER)?;
        for entry in entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;

        tracing::debug!(path = ?self.path, count = entries.len(), "Saved diary entries");
        Ok(())
    }
}
