//! Tests for history/storage

use super::*;

#[test]
fn test_deduplicate_keeps_first_occurrence() {
    let entries = vec![
        "a".to_string(),
        "b".to_string(),
        "a".to_string(),
        "c".to_string(),
        "b".to_string(),
    ];
    let result = deduplicate(&entries);
    assert_eq!(result, vec!["a", "b", "c"]);
}

#[test]
fn test_trim_to_max() {
    let entries: Vec<String> = (0..1500).map(|i| format!("entry{}", i)).collect();
    let trimmed = trim_to_max(&entries);
    assert_eq!(trimmed.len(), MAX_HISTORY_ENTRIES);
    assert_eq!(trimmed[0], "entry0");
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let entries = vec!["rust book".to_string(), "cat videos".to_string()];
    save(&path, &entries).unwrap();

    assert_eq!(load(&path), entries);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deep").join("history.json");

    save(&path, &["query".to_string()]).unwrap();
    assert_eq!(load(&path), vec!["query"]);
}

#[test]
fn test_load_missing_file_returns_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");
    assert!(load(&path).is_empty());
}

#[test]
fn test_load_malformed_file_returns_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(load(&path).is_empty());
}

#[test]
fn test_load_sanitizes_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, r#"["a", "b", "a"]"#).unwrap();
    assert_eq!(load(&path), vec!["a", "b"]);
}
