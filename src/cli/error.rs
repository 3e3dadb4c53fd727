//! CLI-level errors (wraps domain and file errors)

use thiserror::Error;

use crate::domain::DomainError;
use crate::roster::RosterError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Roster(#[from] RosterError),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Domain(_) => crate::exitcode::DATAERR,
            CliError::Roster(e) => match e {
                RosterError::NotFound(_) => crate::exitcode::NOINPUT,
                RosterError::Io { .. } => crate::exitcode::IOERR,
                RosterError::Parse { .. } => crate::exitcode::DATAERR,
            },
            CliError::Config(_) => crate::exitcode::CONFIG,
        }
    }
}
