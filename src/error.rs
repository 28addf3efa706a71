//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and parse errors, and provides semantic variants
//! for configuration problems, scraper failures and git failures.
use std::path::PathBuf;

use thiserror::Error;

use crate::types::VcsStep;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("No categories configured for the sales job")]
    EmptyCategories,

    #[error("Interpreter not found: {0}")]
    InterpreterNotFound(String),

    #[error("Failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Scraper failed for {step} (exit code {code}): {stderr}")]
    ScraperFailed {
        step: String,
        code: ExitCode,
        stderr: String,
    },

    #[error(
        "git pull --rebase failed; resolve the conflict manually (git rebase --continue / --abort): {stderr}"
    )]
    SyncConflict { stderr: String },

    #[error("git {step} failed (exit code {code}): {stderr}")]
    Vcs {
        step: VcsStep,
        code: ExitCode,
        stderr: String,
    },

    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),
}

/// Exit status of a child process; `None` when it was killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub Option<i32>);

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(code) => write!(f, "{}", code),
            None => write!(f, "signal"),
        }
    }
}

impl Error {
    pub fn config<E: std::fmt::Display>(path: &std::path::Path, e: E) -> Self {
        Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    }
}
