//! Todo List Library
//!
//! This library implements a todo list with add, toggle, edit, delete, and
//! filter operations, persisted as a single JSON document.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Application Layer**: [`TodoApp`] - Dispatches operations and persists
//!   the state after every change
//! - **Domain Layer**: `todo` module - The state container and its mutations
//! - **Persistence Layer**: `storage` module - Single-file JSON storage
//!
//! # Example
//!
//! ```no_run
//! use todo_list::TodoApp;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut app = TodoApp::new("todos.json")?;
//!     let id = app.add("Buy milk")?;
//!     app.toggle(&id)?;
//!     Ok(())
//! }
//! ```

pub mod formatting;
mod storage;
mod todo;
pub mod validation;

use anyhow::Result;

// Re-export commonly used types
pub use storage::Storage;
pub use todo::{FilterMode, TodoItem, TodoState};

/// Application handle for the todo list
///
/// Owns the in-memory state and the storage. Every mutating method dispatches
/// into [`TodoState`] and then writes the full snapshot back to disk; the
/// state container itself never touches storage.
pub struct TodoApp {
    data: TodoState,
    storage: Storage,
}

impl TodoApp {
    /// Open the data file, starting empty if it is absent or malformed
    ///
    /// # Arguments
    /// * `storage_path` - Path to the todo data file (JSON format)
    pub fn new(storage_path: impl AsRef<std::path::Path>) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let data = storage.load()?;
        Ok(Self { data, storage })
    }

    fn save_data(&self) -> Result<()> {
        self.storage.save(&self.data)
    }

    /// Append a new todo and persist; returns the new item's id
    ///
    /// The caller must pass non-empty, trimmed text (see
    /// [`validation::normalize_text`]).
    pub fn add(&mut self, text: impl Into<String>) -> Result<String> {
        let id = self.data.add(text);
        self.save_data()?;
        Ok(id)
    }

    /// Flip a todo between pending and completed and persist
    ///
    /// Returns whether an item matched; a miss is a no-op, not an error.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let changed = self.data.toggle(id);
        self.save_data()?;
        Ok(changed)
    }

    /// Replace a todo's text and persist
    ///
    /// The caller must pass non-empty, trimmed text. Returns whether an item
    /// matched; a miss is a no-op, not an error.
    pub fn edit(&mut self, id: &str, text: impl Into<String>) -> Result<bool> {
        let changed = self.data.edit(id, text);
        self.save_data()?;
        Ok(changed)
    }

    /// Remove a todo and persist
    ///
    /// Returns whether an item was removed; a miss is a no-op, not an error.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let removed = self.data.delete(id);
        self.save_data()?;
        Ok(removed)
    }

    /// Replace the display filter and persist
    pub fn set_filter(&mut self, filter: FilterMode) -> Result<()> {
        self.data.set_filter(filter);
        self.save_data()?;
        Ok(())
    }

    /// Read-only snapshot of the full state
    pub fn state(&self) -> &TodoState {
        &self.data
    }

    /// Items under the current filter, original order preserved
    pub fn visible(&self) -> Vec<&TodoItem> {
        self.data.visible()
    }
}
