//! Flat-file storage for student records.
//!
//! This module reads and writes the full record set from a single text file,
//! one record per line. Every save rewrites the whole file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::record::Record;

/// Storage engine for student records.
///
/// The store holds no records itself; it only knows where the data file is.
/// Each call to [`load`](Self::load) reads the file afresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    /// Path to the data file.
    path: PathBuf,
}

impl RecordStore {
    /// Bind a store to the given data file. The file need not exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the data file has been created.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read every record, in file order.
    ///
    /// A missing data file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageRead`] if the file exists but cannot be read, or
    /// [`Error::Format`] if any line does not hold exactly five fields.
    pub fn load(&self) -> Result<Vec<Record>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No data file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(Error::StorageRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let records = content
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                Record::parse_line(line).map_err(|mismatch| {
                    warn!(
                        "Malformed line {} in {}: {}",
                        idx + 1,
                        self.path.display(),
                        mismatch
                    );
                    Error::format(&self.path, Some(idx + 1), mismatch.to_string())
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    /// Replace the data file with the given records.
    ///
    /// Lines are written to a temporary file beside the target, which is then
    /// renamed over it, so readers see either the old or the new contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryCreate`] if the parent directory cannot be
    /// created, or [`Error::StorageWrite`] if writing or renaming fails.
    pub fn save(&self, records: &[Record]) -> Result<()> {
        let dir = self.parent_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|source| Error::DirectoryCreate {
                path: dir.clone(),
                source,
            })?;
        }

        let write_err = |source: io::Error| Error::StorageWrite {
            path: self.path.clone(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(&dir).map_err(write_err)?;
        {
            let mut out = io::BufWriter::new(tmp.as_file_mut());
            for record in records {
                writeln!(out, "{}", record.to_line()).map_err(write_err)?;
            }
            out.flush().map_err(write_err)?;
        }
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;

        debug!("Saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}
