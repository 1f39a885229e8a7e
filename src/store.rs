//! File-based persistence for the task list.
//!
//! The whole collection is written as one JSON array of task records,
//! UTF-8 and pretty-printed so the file stays human-inspectable:
//!
//! ```json
//! [
//!   {
//!     "text": "Buy milk",
//!     "completed": false,
//!     "deadline": "2025-01-15",
//!     "priority": "High"
//!   }
//! ]
//! ```
//!
//! Loading is forgiving on purpose: a missing file is the normal first-run
//! state and a corrupt file is logged and treated as empty. Neither error
//! escapes this module.

use crate::error::{OkraError, Result};
use crate::model::Task;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes the full collection, overwriting the target file.
    /// The write goes through a temp file in the same directory so a crash
    /// mid-write never leaves a truncated data file behind.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks)?;
        self.atomic_write(&content)?;
        tracing::debug!(count = tasks.len(), path = %self.path.display(), "Saved tasks");
        Ok(())
    }

    /// Reads the collection back. Missing file means first run and yields an
    /// empty list; unreadable or malformed content is logged and also yields
    /// an empty list rather than failing the session.
    pub fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No data file yet, starting empty");
            return Vec::new();
        }

        match self.load_strict() {
            Ok(tasks) => tasks,
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "Failed to load tasks, starting empty");
                Vec::new()
            }
        }
    }

    fn load_strict(&self) -> Result<Vec<Task>> {
        let content = std::fs::read_to_string(&self.path)?;
        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        Ok(tasks)
    }

    fn atomic_write(&self, content: &str) -> Result<()> {
        let target_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        // Temp file must live in the target directory for the rename to be atomic
        let mut temp_file = NamedTempFile::new_in(target_dir)
            .map_err(|e| OkraError::Storage(format!("Failed to create temp file: {}", e)))?;

        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| OkraError::Storage(format!("Failed to write to temp file: {}", e)))?;

        temp_file
            .persist(&self.path)
            .map_err(|e| OkraError::Storage(format!("Failed to replace data file: {}", e)))?;

        Ok(())
    }
}
