//! Todo domain models and state transitions
//!
//! This module contains the core data structures:
//! - `item`: individual todo items and the display filter
//! - `state`: the state container with the five mutating operations

mod item;
mod state;

// Re-export all public types
pub use item::{FilterMode, TodoItem};
pub use state::TodoState;
