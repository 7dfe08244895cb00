//! Persistence adapter tests

use tempfile::TempDir;
use todo_list::{FilterMode, Storage, TodoState};

fn sample_state() -> TodoState {
    let mut state = TodoState::new();
    let id = state.add("Buy milk");
    state.add("Walk dog");
    state.toggle(&id);
    state.set_filter(FilterMode::pending);
    state
}

#[test]
fn test_load_missing_file_returns_empty_state() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Storage::new(temp_dir.path().join("todos.json"));

    let state = storage.load().unwrap();
    assert!(state.is_empty());
    assert_eq!(state.filter, FilterMode::all);
}

#[test]
fn test_save_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Storage::new(temp_dir.path().join("todos.json"));

    let state = sample_state();
    storage.save(&state).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(loaded, state);
}

#[test]
fn test_load_malformed_file_returns_empty_state() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("todos.json");
    std::fs::write(&path, "]]] definitely not json").unwrap();

    let storage = Storage::new(&path);
    let state = storage.load().unwrap();
    assert!(state.is_empty());
    assert_eq!(state.filter, FilterMode::all);
}

#[test]
fn test_load_empty_file_returns_empty_state() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("todos.json");
    std::fs::write(&path, "").unwrap();

    let storage = Storage::new(&path);
    let state = storage.load().unwrap();
    assert!(state.is_empty());
}

#[test]
fn test_load_wrong_shape_returns_empty_state() {
    // Valid JSON that is not a state document
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("todos.json");
    std::fs::write(&path, r#"{"todos": "oops"}"#).unwrap();

    let storage = Storage::new(&path);
    let state = storage.load().unwrap();
    assert!(state.is_empty());
}

#[test]
fn test_load_accepts_partial_document() {
    // Missing fields fall back to their defaults
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("todos.json");
    std::fs::write(&path, "{}").unwrap();

    let storage = Storage::new(&path);
    let state = storage.load().unwrap();
    assert!(state.is_empty());
    assert_eq!(state.filter, FilterMode::all);
}

#[test]
fn test_persisted_format_matches_wire_shape() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("todos.json");
    let storage = Storage::new(&path);

    storage.save(&sample_state()).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(value["todos"].is_array());
    assert_eq!(value["todos"].as_array().unwrap().len(), 2);
    assert_eq!(value["filter"], "pending");

    let first = &value["todos"][0];
    assert!(first["id"].is_string());
    assert_eq!(first["text"], "Buy milk");
    assert_eq!(first["completed"], true);
}

#[test]
fn test_load_original_wire_format() {
    // A blob written as {todos: [{id, text, completed}], filter} rehydrates
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("todos.json");
    std::fs::write(
        &path,
        r#"{"todos":[{"id":"1714000000000","text":"Buy milk","completed":true}],"filter":"completed"}"#,
    )
    .unwrap();

    let storage = Storage::new(&path);
    let state = storage.load().unwrap();
    assert_eq!(state.len(), 1);
    assert_eq!(state.todos[0].id, "1714000000000");
    assert_eq!(state.todos[0].text, "Buy milk");
    assert!(state.todos[0].completed);
    assert_eq!(state.filter, FilterMode::completed);
}

#[test]
fn test_file_path_accessor() {
    let storage = Storage::new("some/dir/todos.json");
    assert_eq!(
        storage.file_path(),
        std::path::Path::new("some/dir/todos.json")
    );
}
