//! Roster file loading
//!
//! A roster is a TOML file describing users, their projects, and each
//! project's items:
//!
//! ```toml
//! [[users]]
//! name = "Taylor Swift"
//!
//! [[users.projects]]
//! name = "Album #1"
//! items = ["Write song #1", "Write song #2"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Project, ToDoItem, User};

/// Error loading or parsing a roster file.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("roster not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read roster {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid roster {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result type for roster operations.
pub type RosterResult<T> = Result<T, RosterError>;

/// Parsed roster file, still in file-record form.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Roster {
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub name: String,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl Roster {
    /// Load a roster file from disk.
    pub fn load(path: &Path) -> RosterResult<Self> {
        if !path.exists() {
            return Err(RosterError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|e| RosterError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, path)
    }

    /// Parse roster content. `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> RosterResult<Self> {
        toml::from_str(content).map_err(|e| RosterError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Convert file records into domain entities, preserving file order.
    pub fn into_users(self) -> Vec<User> {
        self.users
            .into_iter()
            .map(|record| {
                let mut user = User::new(record.name);
                for project_record in record.projects {
                    let mut project = Project::new(project_record.name);
                    for item in project_record.items {
                        project.add_item(ToDoItem::new(item));
                    }
                    user.add_project(project);
                }
                user
            })
            .collect()
    }
}
