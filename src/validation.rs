//! Input validation at the presentation boundary
//!
//! The store accepts any string; trimming and the empty-text rule live here,
//! in front of dispatch. Add and edit must never store empty or
//! whitespace-only text.

/// Trim user-entered text, rejecting input that is empty after trimming
pub fn normalize_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalize a user-supplied id by trimming surrounding whitespace
///
/// Any string is a valid id; an id that matches nothing is a no-op downstream.
pub fn normalize_id(id: &str) -> String {
    id.trim().to_string()
}
