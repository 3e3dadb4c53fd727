//! Command dispatch: maps parsed arguments onto domain operations

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, DayEvent};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{calc, convert, MoodTracker};
use crate::roster::Roster;
use crate::tree_view::ToTree;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree { file }) => _tree(file.as_deref()),
        Some(Commands::Count { file, user }) => _count(file.as_deref(), user.as_deref()),
        Some(Commands::Convert { fahrenheit }) => _convert(*fahrenheit),
        Some(Commands::Divide { dividend, divisor }) => _divide(*dividend, *divisor),
        Some(Commands::Mood { events }) => _mood(events),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

/// Use the explicit file when given, the configured default otherwise.
fn resolve_roster(file: Option<&Path>) -> CliResult<PathBuf> {
    if let Some(path) = file {
        return Ok(path.to_path_buf());
    }
    let settings = Settings::load()?;
    settings.default_roster.ok_or_else(|| {
        CliError::Usage("no roster file given and no default_roster configured".to_string())
    })
}

#[instrument]
fn _tree(file: Option<&Path>) -> CliResult<()> {
    let path = resolve_roster(file)?;
    debug!("roster: {:?}", path);
    let users = Roster::load(&path)?.into_users();
    if users.is_empty() {
        output::warning("roster has no users");
        return Ok(());
    }
    for user in &users {
        println!("{}", user.to_tree_string());
    }
    Ok(())
}

#[instrument]
fn _count(file: Option<&Path>, user_filter: Option<&str>) -> CliResult<()> {
    let path = resolve_roster(file)?;
    debug!("roster: {:?}, user: {:?}", path, user_filter);
    let users = Roster::load(&path)?.into_users();
    match user_filter {
        Some(name) => {
            let user = users
                .iter()
                .find(|u| u.name == name)
                .ok_or_else(|| CliError::InvalidArgs(format!("no such user: {}", name)))?;
            output::info(&user.item_count_label());
        }
        None => {
            if users.is_empty() {
                output::warning("roster has no users");
            }
            for user in &users {
                output::action(&user.name, &user.item_count_label());
            }
        }
    }
    Ok(())
}

#[instrument]
fn _convert(fahrenheit: f64) -> CliResult<()> {
    let celsius = convert::to_celsius(fahrenheit);
    output::info(&celsius);
    Ok(())
}

#[instrument]
fn _divide(dividend: i64, divisor: i64) -> CliResult<()> {
    let division = calc::divide(dividend, divisor)?;
    output::info(&format!("{} r {}", division.quotient, division.remainder));
    Ok(())
}

#[instrument]
fn _mood(events: &[DayEvent]) -> CliResult<()> {
    let mut tracker = MoodTracker::new();
    for event in events {
        match event {
            DayEvent::Good => tracker.record_good_day(),
            DayEvent::Bad => tracker.record_bad_day(),
        }
    }
    output::info(&tracker.mood());
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
