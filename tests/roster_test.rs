//! Tests for roster file loading

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use todokit::roster::{Roster, RosterError};
use todokit::tree_view::ToTree;

fn write_roster(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write roster file");
    path
}

const SAMPLE: &str = r#"
[[users]]
name = "Taylor Swift"

[[users.projects]]
name = "Album #1"
items = ["Write song #1", "Write song #2"]

[[users.projects]]
name = "Album #2"
items = ["Write song #1"]

[[users]]
name = "Roadie"
"#;

// ============================================================
// Loading Tests
// ============================================================

#[test]
fn given_well_formed_file_when_loading_then_builds_entities() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_roster(&temp, "band.toml", SAMPLE);

    // Act
    let users = Roster::load(&path).unwrap().into_users();

    // Assert
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Taylor Swift");
    assert_eq!(users[0].projects.len(), 2);
    assert_eq!(users[0].total_item_count(), 3);
    assert_eq!(users[1].name, "Roadie");
    assert_eq!(users[1].item_count_label(), "0 items");
}

#[test]
fn given_file_order_when_loading_then_order_is_preserved() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_roster(&temp, "band.toml", SAMPLE);

    // Act
    let users = Roster::load(&path).unwrap().into_users();

    // Assert
    let project_names: Vec<&str> = users[0]
        .projects
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(project_names, vec!["Album #1", "Album #2"]);

    let item_names: Vec<&str> = users[0].projects[0]
        .items
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(item_names, vec!["Write song #1", "Write song #2"]);
}

#[test]
fn given_empty_file_when_loading_then_returns_no_users() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_roster(&temp, "empty.toml", "");

    // Act
    let users = Roster::load(&path).unwrap().into_users();

    // Assert
    assert!(users.is_empty());
}

#[test]
fn given_loaded_roster_when_rendering_tree_then_shows_counts() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_roster(&temp, "band.toml", SAMPLE);
    let users = Roster::load(&path).unwrap().into_users();

    // Act
    let rendered = users[0].to_tree_string().to_string();

    // Assert
    assert!(rendered.contains("Taylor Swift (3 items)"));
    assert!(rendered.contains("Album #1 (2 items)"));
    assert!(rendered.contains("Write song #2"));
}

// ============================================================
// Error Tests
// ============================================================

#[test]
fn given_missing_file_when_loading_then_returns_not_found() {
    let result = Roster::load(Path::new("/nonexistent/band.toml"));

    assert!(matches!(result, Err(RosterError::NotFound(_))));
}

#[test]
fn given_malformed_toml_when_loading_then_returns_parse_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_roster(&temp, "broken.toml", "[[users]\nname = ");

    // Act
    let result = Roster::load(&path);

    // Assert
    assert!(matches!(result, Err(RosterError::Parse { .. })));
}

#[test]
fn given_wrong_shape_when_loading_then_returns_parse_error() {
    // users must be an array of tables, not a string
    let temp = TempDir::new().unwrap();
    let path = write_roster(&temp, "wrong.toml", r#"users = "Taylor Swift""#);

    let result = Roster::load(&path);

    assert!(matches!(result, Err(RosterError::Parse { .. })));
}
