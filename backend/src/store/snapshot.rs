//! JSON snapshot file backing the student store.
//!
//! The whole collection is rewritten on every flush. Writes go to a temporary file in the
//! same directory which is fsynced and then renamed over the snapshot, so the file on disk
//! is always either the previous or the new collection. A crash after an in-memory change
//! but before its flush completes loses that one change.

use crate::error::StoreError;
use common::model::student::StudentRecord;
use log::{debug, info, warn};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Snapshot { path: path.into() }
    }

    /// Reads the stored collection in insertion order.
    ///
    /// A missing, empty or unparsable file yields an empty collection; the server must
    /// come up even when the snapshot is damaged. Within a readable file, records that
    /// cannot be read are skipped with a warning.
    pub fn load(&self) -> Vec<StudentRecord> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("no snapshot at {}, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!(
                    "cannot read snapshot {}: {}; starting empty",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Vec::new();
        }

        let items = match serde_json::from_slice::<Vec<serde_json::Value>>(&bytes) {
            Ok(items) => items,
            Err(e) => {
                warn!(
                    "snapshot {} is malformed ({}); starting empty",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };

        // One unreadable record is dropped, not the whole collection.
        let total = items.len();
        let records: Vec<StudentRecord> = items
            .into_iter()
            .enumerate()
            .filter_map(|(i, item)| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(
                        "dropping record {} of {} in {}: {}",
                        i + 1,
                        total,
                        self.path.display(),
                        e
                    );
                    None
                }
            })
            .collect();

        info!(
            "loaded {} students from {}",
            records.len(),
            self.path.display()
        );
        records
    }

    /// Atomically replaces the snapshot with `records`.
    pub fn save(&self, records: &[StudentRecord]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let json = serde_json::to_vec_pretty(records)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        debug!(
            "flushed {} students to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}
