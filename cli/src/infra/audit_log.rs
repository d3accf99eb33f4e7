//! Infrastructure implementation of the `AuditStore` port.
//!
//! Category logs are prepended, newest entry first, and never truncated.
//! Every write goes to a temp file in the same directory that is then
//! renamed over the target, so an interrupted write leaves the previous
//! file intact. Temp files orphaned by a hard exit are swept on startup.

use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use ec2ops_common::LogCategory;
use serde_json::Value;

use crate::application::ports::AuditStore;
use crate::domain::audit::{parse_entries, to_pretty_json};
use crate::domain::operation::INVENTORY_FILE;
use crate::domain::{LogEntry, StorageError};

const TEMP_PREFIX: &str = ".ec2ops-";
const TEMP_SUFFIX: &str = ".tmp";

/// Temp files younger than this may belong to a concurrent run.
const STALE_AFTER: Duration = Duration::from_secs(60);

/// Log files and inventory snapshot under one directory.
pub struct FileAuditLog {
    dir: PathBuf,
}

impl FileAuditLog {
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    #[must_use]
    pub fn log_path(&self, category: LogCategory) -> PathBuf {
        self.dir.join(category.file_name())
    }

    #[must_use]
    pub fn snapshot_path(&self) -> PathBuf {
        self.dir.join(INVENTORY_FILE)
    }

    /// Create the category log if it does not exist. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created.
    pub fn ensure(&self, category: LogCategory) -> Result<PathBuf, StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::Create {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.log_path(category);
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| StorageError::Create {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }

    /// Delete temp files left behind when a run exited mid-write. Returns
    /// how many were removed. Best effort: failures are logged, not raised.
    pub fn remove_stale_temp_files(&self) -> usize {
        let Ok(entries) = std::fs::read_dir(&self.dir) else {
            return 0;
        };
        let now = SystemTime::now();
        let mut removed = 0;
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !(name.starts_with(TEMP_PREFIX) && name.ends_with(TEMP_SUFFIX)) {
                continue;
            }
            let stale = entry
                .metadata()
                .and_then(|m| m.modified())
                .ok()
                .and_then(|modified| now.duration_since(modified).ok())
                .is_some_and(|age| age >= STALE_AFTER);
            if !stale {
                continue;
            }
            match std::fs::remove_file(entry.path()) {
                Ok(()) => removed += 1,
                Err(e) => tracing::warn!(file = name, error = %e, "cannot remove stale temp file"),
            }
        }
        if removed > 0 {
            tracing::debug!(removed, dir = %self.dir.display(), "stale temp files removed");
        }
        removed
    }

    /// Read back a category log, newest entry first. A missing log is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn read_entries(&self, category: LogCategory) -> Result<Vec<LogEntry>, StorageError> {
        let path = self.log_path(category);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content =
            std::fs::read_to_string(&path).map_err(|source| StorageError::Read { path, source })?;
        Ok(parse_entries(&content))
    }
}

impl AuditStore for FileAuditLog {
    fn append(&self, category: LogCategory, entry: &LogEntry) -> Result<(), StorageError> {
        let path = self.ensure(category)?;
        let previous = std::fs::read(&path).map_err(|source| StorageError::Read {
            path: path.clone(),
            source,
        })?;

        let mut content = entry.render().into_bytes();
        content.extend_from_slice(&previous);
        replace_atomically(&self.dir, &path, &content)?;
        tracing::debug!(path = %path.display(), "audit entry written");
        Ok(())
    }

    fn write_snapshot(&self, inventory: &Value) -> Result<PathBuf, StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::Create {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.snapshot_path();
        let mut body = to_pretty_json(inventory)?;
        body.push('\n');
        replace_atomically(&self.dir, &path, body.as_bytes())?;
        Ok(std::path::absolute(&path).unwrap_or(path))
    }

    fn location(&self, category: LogCategory) -> String {
        category.file_name()
    }
}

fn replace_atomically(dir: &Path, target: &Path, content: &[u8]) -> Result<(), StorageError> {
    let write_err = |source| StorageError::Write {
        path: target.to_path_buf(),
        source,
    };
    let mut temp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(TEMP_SUFFIX)
        .tempfile_in(dir)
        .map_err(write_err)?;
    temp.write_all(content).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    temp.persist(target).map_err(|e| write_err(e.error))?;
    Ok(())
}
