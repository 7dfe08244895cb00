use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::item::{FilterMode, TodoItem};

/// Full application state: the ordered todo list plus the active filter
///
/// Insertion order is display order under `FilterMode::all`. All five
/// mutations are total: a miss on an id is a no-op, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoState {
    pub todos: Vec<TodoItem>,
    pub filter: FilterMode,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item with a freshly generated unique id
    ///
    /// The caller is expected to pass non-empty, trimmed text; the store
    /// itself accepts any string. Returns the new item's id.
    pub fn add(&mut self, text: impl Into<String>) -> String {
        let id = self.generate_id();
        self.todos.push(TodoItem::new(id.clone(), text));
        id
    }

    /// Flip the completed flag of the item with the given id
    ///
    /// Returns whether an item matched.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.find_mut(id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Replace the text of the item with the given id
    ///
    /// Returns whether an item matched.
    pub fn edit(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.find_mut(id) {
            Some(item) => {
                item.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Remove the item with the given id
    ///
    /// Returns whether an item was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }

    /// Replace the current display filter unconditionally
    pub fn set_filter(&mut self, filter: FilterMode) {
        self.filter = filter;
    }

    /// Items matching the given filter, original order preserved
    pub fn filtered(&self, filter: FilterMode) -> Vec<&TodoItem> {
        self.todos.iter().filter(|t| t.matches(filter)).collect()
    }

    /// Items matching the current filter
    pub fn visible(&self) -> Vec<&TodoItem> {
        self.filtered(self.filter)
    }

    /// Find an item by id
    pub fn find(&self, id: &str) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut TodoItem> {
        self.todos.iter_mut().find(|t| t.id == id)
    }

    /// Number of items in the list, ignoring the filter
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Millisecond timestamp, bumped until unique within the list
    ///
    /// Two adds within the same millisecond would otherwise collide.
    fn generate_id(&self) -> String {
        let mut millis = Utc::now().timestamp_millis();
        loop {
            let id = millis.to_string();
            if self.find(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }
}
