//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

/// Task roster playground: to-do trees, unit conversion, and small state machines
#[derive(Parser, Debug)]
#[command(name = "todokit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render roster hierarchies as trees
    Tree {
        /// Roster file (default: configured default_roster)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Print aggregate item counts per user
    Count {
        /// Roster file (default: configured default_roster)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,

        /// Only count items for this user
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Convert degrees Fahrenheit to degrees Celsius
    #[command(allow_negative_numbers = true)]
    Convert {
        /// Temperature in degrees Fahrenheit
        fahrenheit: f64,
    },

    /// Integer division with remainder
    #[command(allow_negative_numbers = true)]
    Divide {
        dividend: i64,
        divisor: i64,
    },

    /// Fold a sequence of day events over a fresh mood tracker
    Mood {
        /// Events in order, e.g. `bad good bad`
        #[arg(required = true, value_enum)]
        events: Vec<DayEvent>,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// One day in a mood history.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayEvent {
    Good,
    Bad,
}
