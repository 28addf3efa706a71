use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::InterpreterSource;

/// Resolve the interpreter to an executable path. `Env` sources are looked up
/// on the caller's `PATH` each time this is called.
pub fn resolve_interpreter(source: &InterpreterSource) -> Result<PathBuf> {
    let path = match source {
        InterpreterSource::Fixed { path } => {
            if !path.is_file() {
                return Err(Error::InterpreterNotFound(path.display().to_string()));
            }
            path.clone()
        }
        InterpreterSource::Env { program } => which::which(program)
            .map_err(|e| Error::InterpreterNotFound(format!("{} ({})", program, e)))?,
    };
    debug!("Interpreter {} resolved to {}", source, path.display());
    Ok(path)
}
