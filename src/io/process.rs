use std::path::Path;
use std::process::Command;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{Error, ExitCode, Result};

/// What a finished child process left behind.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub code: ExitCode,
    pub stdout: String,
    pub stderr: String,
    pub elapsed: Duration,
}

impl ProcessOutcome {
    pub fn success(&self) -> bool {
        self.code.0 == Some(0)
    }

    /// Last few lines of stderr, or stdout if stderr is empty.
    pub fn tail(&self, lines: usize) -> String {
        let source = if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        };
        let all: Vec<&str> = source.trim_end().lines().collect();
        all[all.len().saturating_sub(lines)..].join("\n")
    }
}

/// Run `program args..` in `cwd` to completion and capture its output.
/// A non-zero exit is still `Ok`; only a failure to start is an error.
pub fn run_captured<I, S>(program: &Path, args: I, cwd: &Path) -> Result<ProcessOutcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args).current_dir(cwd);
    debug!("Running {:?} in {}", cmd, cwd.display());

    let started = Instant::now();
    let output = cmd.output().map_err(|source| Error::Spawn {
        program: program.display().to_string(),
        source,
    })?;

    let outcome = ProcessOutcome {
        code: ExitCode(output.status.code()),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        elapsed: started.elapsed(),
    };

    for line in outcome.stdout.lines() {
        debug!(target: "scrapesync::child", "{}", line);
    }
    for line in outcome.stderr.lines() {
        debug!(target: "scrapesync::child", "stderr: {}", line);
    }

    Ok(outcome)
}
