//! todokit: a small task-roster domain packaged as a library plus CLI.
//!
//! The crate groups four independent components:
//!
//! - [`domain::entities`]: the User → Project → ToDoItem ownership tree with
//!   aggregate item counting
//! - [`domain::convert`]: Fahrenheit → Celsius conversion
//! - [`domain::mood`]: a two-state mood tracker
//! - [`domain::calc`]: truncating integer division with remainder
//!
//! [`roster`] loads TOML roster files into domain entities, [`tree_view`]
//! renders them with termtree, and [`cli`] exposes everything behind
//! `todokit <subcommand>`.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod roster;
pub mod tree_view;
pub mod util;

pub use domain::{divide, Division, DomainError, Mood, MoodTracker, Project, ToDoItem, User};
pub use roster::{Roster, RosterError};
