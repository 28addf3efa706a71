use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Project root does not exist or is not a directory: {path}")]
    MissingProjectRoot { path: PathBuf },

    #[error("End page must be greater than 0, got: {page}")]
    ZeroEndPage { page: u32 },

    #[error("Run failed: {0}")]
    Run(#[from] scrapesync::Error),
}
