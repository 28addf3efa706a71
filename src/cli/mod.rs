//! Command Line Interface (CLI) layer for scrapesync.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that merges CLI flags into the
//! run configuration and hands it to `scrapesync::api`.
//!
//! If you are embedding scrapesync into another application, prefer using
//! the high-level `scrapesync::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
