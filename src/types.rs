//! Shared types and enums used across scrapesync.
//! Includes `WriteMode`, `Job`, `VcsStep` and `InterpreterSource`.
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a scraper invocation treats its output file.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    Overwrite,
    Append,
}

impl WriteMode {
    pub fn as_arg(&self) -> &'static str {
        match self {
            WriteMode::Overwrite => "overwrite",
            WriteMode::Append => "append",
        }
    }

    /// Mode for the category at `index` in a sales plan.
    pub fn for_position(index: usize) -> Self {
        if index == 0 {
            WriteMode::Overwrite
        } else {
            WriteMode::Append
        }
    }
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_arg())
    }
}

/// Which scrapers a run executes before publishing.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Job {
    Sales,
    Buying,
    All,
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Job::Sales => write!(f, "sales"),
            Job::Buying => write!(f, "buying"),
            Job::All => write!(f, "all"),
        }
    }
}

/// Stages of the publish sequence.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VcsStep {
    Add,
    Diff,
    Commit,
    Pull,
    Push,
}

impl std::fmt::Display for VcsStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VcsStep::Add => write!(f, "add"),
            VcsStep::Diff => write!(f, "diff"),
            VcsStep::Commit => write!(f, "commit"),
            VcsStep::Pull => write!(f, "pull --rebase"),
            VcsStep::Push => write!(f, "push"),
        }
    }
}

/// Where the scraper interpreter comes from.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InterpreterSource {
    /// A fixed absolute path, e.g. `/usr/bin/python3`.
    Fixed { path: PathBuf },
    /// A program name looked up on `PATH` when the scraper is invoked.
    Env { program: String },
}

impl Default for InterpreterSource {
    fn default() -> Self {
        InterpreterSource::Fixed {
            path: PathBuf::from("/usr/bin/python3"),
        }
    }
}

impl std::fmt::Display for InterpreterSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterpreterSource::Fixed { path } => write!(f, "{}", path.display()),
            InterpreterSource::Env { program } => write!(f, "$PATH:{}", program),
        }
    }
}
