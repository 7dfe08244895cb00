use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Display filter applied to the todo sequence
///
/// Uses lowercase naming to match the persisted JSON format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    /// Every item, in insertion order
    #[default]
    all,
    /// Items with completed = true
    completed,
    /// Items with completed = false
    pending,
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FilterMode::all),
            "completed" => Ok(FilterMode::completed),
            "pending" => Ok(FilterMode::pending),
            _ => Err(format!(
                "Invalid filter '{}'. Valid options are: all, completed, pending",
                s
            )),
        }
    }
}

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier assigned at creation, immutable afterwards
    pub id: String,
    /// Display text
    pub text: String,
    /// Completion flag
    pub completed: bool,
}

impl TodoItem {
    /// Create a new, not yet completed item
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }

    /// Check whether this item is shown under the given filter
    pub fn matches(&self, filter: FilterMode) -> bool {
        match filter {
            FilterMode::all => true,
            FilterMode::completed => self.completed,
            FilterMode::pending => !self.completed,
        }
    }
}
