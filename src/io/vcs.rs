//! Version control. The runner talks to the `Vcs` trait; `GitCli` drives the
//! `git` binary in the project root.
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::params::GitParams;
use crate::error::{Error, Result};
use crate::io::process::{ProcessOutcome, run_captured};
use crate::types::VcsStep;

pub trait Vcs {
    fn stage(&mut self, paths: &[PathBuf]) -> Result<()>;
    fn has_staged_changes(&mut self, paths: &[PathBuf]) -> Result<bool>;
    /// Commit only `paths`, leaving anything else in the index untouched.
    fn commit(&mut self, message: &str, paths: &[PathBuf]) -> Result<()>;
    /// Replay local commits on top of the remote (pull --rebase), stashing
    /// unrelated local changes around it.
    fn synchronize(&mut self) -> Result<()>;
    fn publish(&mut self) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    root: PathBuf,
    remote: Option<String>,
    branch: Option<String>,
}

impl GitCli {
    pub fn new(root: &Path, params: &GitParams) -> Self {
        Self {
            program: PathBuf::from(&params.program),
            root: root.to_path_buf(),
            remote: params.remote.clone(),
            branch: params.branch.clone(),
        }
    }

    fn git(&self, args: &[String]) -> Result<ProcessOutcome> {
        run_captured(&self.program, args, &self.root)
    }

    fn check(&self, step: VcsStep, args: &[String]) -> Result<ProcessOutcome> {
        let outcome = self.git(args)?;
        if outcome.success() {
            Ok(outcome)
        } else {
            Err(Error::Vcs {
                step,
                code: outcome.code,
                stderr: outcome.tail(20),
            })
        }
    }

    /// `[remote [branch]]` suffix for pull and push.
    fn target(&self) -> Vec<String> {
        match (&self.remote, &self.branch) {
            (Some(remote), Some(branch)) => vec![remote.clone(), branch.clone()],
            (Some(remote), None) => vec![remote.clone()],
            _ => Vec::new(),
        }
    }

    /// True while a stopped rebase is waiting for the operator.
    fn rebase_in_progress(&self) -> Result<bool> {
        for dir in ["rebase-merge", "rebase-apply"] {
            let outcome = self.check(
                VcsStep::Pull,
                &["rev-parse".to_string(), "--git-path".to_string(), dir.to_string()],
            )?;
            if self.root.join(outcome.stdout.trim()).exists() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn with_paths(mut args: Vec<String>, paths: &[PathBuf]) -> Vec<String> {
        args.push("--".to_string());
        args.extend(paths.iter().map(|p| p.display().to_string()));
        args
    }
}

impl Vcs for GitCli {
    fn stage(&mut self, paths: &[PathBuf]) -> Result<()> {
        info!("git add {:?}", paths);
        self.check(VcsStep::Add, &Self::with_paths(vec!["add".to_string()], paths))?;
        Ok(())
    }

    fn has_staged_changes(&mut self, paths: &[PathBuf]) -> Result<bool> {
        let args = Self::with_paths(
            vec!["diff".to_string(), "--cached".to_string(), "--quiet".to_string()],
            paths,
        );
        let outcome = self.git(&args)?;
        match outcome.code.0 {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(Error::Vcs {
                step: VcsStep::Diff,
                code: outcome.code,
                stderr: outcome.tail(20),
            }),
        }
    }

    fn commit(&mut self, message: &str, paths: &[PathBuf]) -> Result<()> {
        info!("git commit -m {:?} {:?}", message, paths);
        let args = Self::with_paths(
            vec!["commit".to_string(), "-m".to_string(), message.to_string()],
            paths,
        );
        let outcome = self.check(VcsStep::Commit, &args)?;
        debug!("{}", outcome.stdout.trim_end());
        Ok(())
    }

    fn synchronize(&mut self) -> Result<()> {
        let mut args = vec![
            "pull".to_string(),
            "--rebase".to_string(),
            "--autostash".to_string(),
        ];
        args.extend(self.target());
        info!("git {}", args.join(" "));
        let outcome = self.git(&args)?;
        if outcome.success() {
            Ok(())
        } else if self.rebase_in_progress()? {
            Err(Error::SyncConflict {
                stderr: outcome.tail(20),
            })
        } else {
            Err(Error::Vcs {
                step: VcsStep::Pull,
                code: outcome.code,
                stderr: outcome.tail(20),
            })
        }
    }

    fn publish(&mut self) -> Result<()> {
        let mut args = vec!["push".to_string()];
        args.extend(self.target());
        info!("git {}", args.join(" "));
        self.check(VcsStep::Push, &args)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git(remote: Option<&str>, branch: Option<&str>) -> GitCli {
        let params = GitParams {
            remote: remote.map(str::to_string),
            branch: branch.map(str::to_string),
            ..GitParams::default()
        };
        GitCli::new(Path::new("."), &params)
    }

    #[test]
    fn target_requires_remote_for_branch() {
        assert!(git(None, None).target().is_empty());
        assert!(git(None, Some("main")).target().is_empty());
        assert_eq!(git(Some("origin"), None).target(), ["origin"]);
        assert_eq!(git(Some("origin"), Some("main")).target(), ["origin", "main"]);
    }

    #[test]
    fn paths_follow_double_dash() {
        let args = GitCli::with_paths(
            vec!["add".to_string()],
            &[PathBuf::from("card_data.csv"), PathBuf::from("buying_data.csv")],
        );
        assert_eq!(args, ["add", "--", "card_data.csv", "buying_data.csv"]);
    }
}
