//! Formatting helpers for CLI output

use crate::todo::{FilterMode, TodoItem};

/// Format todos into a display string
///
/// One line per item with a completion marker, id, and text. The filter is
/// only used to word the empty-list message.
pub fn format_todos(todos: &[&TodoItem], filter: FilterMode) -> String {
    if todos.is_empty() {
        return match filter {
            FilterMode::all => "No todos".to_string(),
            FilterMode::completed => "No completed todos".to_string(),
            FilterMode::pending => "No pending todos".to_string(),
        };
    }

    let mut result = format!("{} todo(s):\n\n", todos.len());
    for todo in todos {
        let marker = if todo.completed { "x" } else { " " };
        result.push_str(&format!("- [{}] {}  {}\n", marker, todo.id, todo.text));
    }

    result
}
