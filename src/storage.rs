use anyhow::Result;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

use crate::todo::TodoState;

/// Single-file JSON storage for the full todo state
///
/// The whole state is written as one document on every save; there is no
/// partial update path.
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load state from disk
    ///
    /// A missing file means first run and yields the empty state. Malformed
    /// content is treated the same way, with a warning, so a corrupted data
    /// file never blocks startup.
    pub fn load(&self) -> Result<TodoState> {
        if !self.file_path.exists() {
            return Ok(TodoState::new());
        }

        let content = fs::read_to_string(&self.file_path)?;
        match serde_json::from_str(&content) {
            Ok(state) => Ok(state),
            Err(e) => {
                warn!(
                    "discarding malformed todo data in {}: {}",
                    self.file_path.display(),
                    e
                );
                Ok(TodoState::new())
            }
        }
    }

    pub fn save(&self, state: &TodoState) -> Result<()> {
        let content = serde_json::to_string_pretty(state)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}
