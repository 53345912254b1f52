// 💾 JSON Snapshot Store
//
// The whole collection is written as one JSON array and read back in one go.
// Saves go through a sibling temp file + rename so a failed write never
// leaves a truncated snapshot behind.

use crate::error::SnapshotError;
use crate::repository::{Entity, Repository};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// ============================================================================
// FILE PRIMITIVES
// ============================================================================

/// Serialize `items` and atomically replace the file at `path`
pub fn save_snapshot<T: Serialize>(path: &Path, items: &[T]) -> Result<(), SnapshotError> {
    let json = serde_json::to_vec(items).map_err(SnapshotError::Serialize)?;

    let tmp_path = temp_path_for(path);
    fs::write(&tmp_path, &json).map_err(|source| SnapshotError::Io {
        path: tmp_path.clone(),
        source,
    })?;
    fs::rename(&tmp_path, path).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    Ok(())
}

/// Read a snapshot. `Ok(None)` when there is no file at `path`.
pub fn load_snapshot<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>, SnapshotError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SnapshotError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let items = serde_json::from_slice(&bytes).map_err(SnapshotError::Deserialize)?;
    Ok(Some(items))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "snapshot".into());
    name.push(".tmp");
    path.with_file_name(name)
}

// ============================================================================
// INVENTORY LOGGER
// ============================================================================

/// What a load did to the in-memory log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Snapshot found; the log now holds exactly this many entries
    Loaded(usize),
    /// No snapshot on disk; the log was left as it was
    NoFile,
}

/// Append-only log of entities backed by a JSON snapshot file
#[derive(Debug, Clone)]
pub struct InventoryLogger<T: Entity> {
    log: Repository<T>,
    file_path: PathBuf,
}

impl<T> InventoryLogger<T>
where
    T: Entity + Serialize + DeserializeOwned,
{
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        InventoryLogger {
            log: Repository::new(),
            file_path: file_path.into(),
        }
    }

    pub fn add(&mut self, item: T) {
        self.log.add(item);
    }

    /// Copy of the log, in insertion order
    pub fn get_all(&self) -> Vec<T> {
        self.log.get_all()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn save_to_file(&self) -> Result<(), SnapshotError> {
        let items = self.log.get_all();
        save_snapshot(&self.file_path, &items)?;
        tracing::info!(path = %self.file_path.display(), count = items.len(), "snapshot saved");
        Ok(())
    }

    /// Replace the log with the snapshot contents.
    ///
    /// On any error the in-memory log is untouched.
    pub fn load_from_file(&mut self) -> Result<LoadOutcome, SnapshotError> {
        match load_snapshot(&self.file_path)? {
            Some(items) => {
                let count = items.len();
                self.log.replace_all(items);
                tracing::info!(path = %self.file_path.display(), count, "snapshot loaded");
                Ok(LoadOutcome::Loaded(count))
            }
            None => {
                tracing::info!(path = %self.file_path.display(), "no snapshot found");
                Ok(LoadOutcome::NoFile)
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
