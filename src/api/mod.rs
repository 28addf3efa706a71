//! High-level library API: the `UpdateRunner` that executes a plan of scraper
//! steps and publishes the results, plus `run_update` which wires it to the
//! real scraper process and git. Prefer these entrypoints over driving the
//! `io` modules directly.
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::core::params::RunConfig;
use crate::core::plan::{Plan, Step, plan};
use crate::error::{Error, Result};
use crate::io::scraper::{ProcessScraper, Scraper};
use crate::io::stamp::{write_atomic, write_stamp};
use crate::io::vcs::{GitCli, Vcs};
use crate::types::{Job, WriteMode};

/// Per-step record in a `RunReport`.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: String,
    pub mode: Option<WriteMode>,
    pub end_page: Option<u32>,
    pub exit_code: Option<i32>,
    pub elapsed_ms: u128,
}

/// Summary of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub job: Job,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub steps: Vec<StepReport>,
    pub stamp: Option<String>,
    pub committed: bool,
    pub published: bool,
}

/// Runs every step of a plan in order, then publishes once.
///
/// The first failing step aborts the run: later steps are not started and
/// nothing is staged, committed or pushed.
pub struct UpdateRunner<S: Scraper, V: Vcs> {
    scraper: S,
    vcs: V,
    project_root: PathBuf,
    publish: bool,
    commit_message: String,
    stamp_file: Option<PathBuf>,
}

impl<S: Scraper, V: Vcs> UpdateRunner<S, V> {
    pub fn new(scraper: S, vcs: V, config: &RunConfig) -> Self {
        Self {
            scraper,
            vcs,
            project_root: config.project_root.clone(),
            publish: config.publish,
            commit_message: config.git.commit_message.clone(),
            stamp_file: config.stamp_file.clone(),
        }
    }

    pub fn run(&mut self, plan: &Plan) -> Result<RunReport> {
        let started_at = Local::now();
        info!("Starting {} run with {} step(s)", plan.job, plan.steps.len());

        let mut steps = Vec::with_capacity(plan.steps.len());
        for (index, step) in plan.steps.iter().enumerate() {
            info!("[{}/{}] {}", index + 1, plan.steps.len(), describe(step));
            let started = Instant::now();
            let outcome = self.scraper.scrape(step)?;
            if !outcome.success() {
                error!("{} exited with code {}", step, outcome.code);
                return Err(Error::ScraperFailed {
                    step: step.label(),
                    code: outcome.code,
                    stderr: outcome.tail(20),
                });
            }
            let (mode, end_page) = match step {
                Step::Sales { category } => (Some(category.mode), category.end_page),
                Step::Buying => (None, None),
            };
            steps.push(StepReport {
                step: step.label(),
                mode,
                end_page,
                exit_code: outcome.code.0,
                elapsed_ms: started.elapsed().as_millis(),
            });
        }

        let stamp = match &self.stamp_file {
            Some(path) => Some(write_stamp(&self.project_root.join(path), Local::now())?),
            None => None,
        };

        let mut committed = false;
        if self.publish {
            let mut paths = plan.data_files.clone();
            paths.extend(self.stamp_file.iter().cloned());
            committed = self.publish_files(&paths)?;
        } else {
            info!("Publishing disabled; leaving changes in the working tree");
        }

        info!("Run complete: {} step(s)", steps.len());
        Ok(RunReport {
            job: plan.job,
            started_at,
            finished_at: Local::now(),
            steps,
            stamp,
            committed,
            published: self.publish,
        })
    }

    /// add, commit (when something is staged), pull --rebase, push.
    fn publish_files(&mut self, paths: &[PathBuf]) -> Result<bool> {
        self.vcs.stage(paths)?;
        let committed = if self.vcs.has_staged_changes(paths)? {
            self.vcs.commit(&self.commit_message, paths)?;
            true
        } else {
            warn!("No changes in data files; skipping commit");
            false
        };
        self.vcs.synchronize()?;
        self.vcs.publish()?;
        Ok(committed)
    }
}

fn describe(step: &Step) -> String {
    match step {
        Step::Sales { category } => format!(
            "sales keyword={} mode={} end_page={}",
            category.keyword,
            category.mode,
            category
                .end_page
                .map(|p| p.to_string())
                .unwrap_or_else(|| "all".to_string())
        ),
        Step::Buying => "buying".to_string(),
    }
}

/// Plan `job` from `config` and run it against the scraper process and git.
pub fn run_update(config: &RunConfig, job: Job) -> Result<RunReport> {
    let plan = plan(job, config)?;
    let scraper = ProcessScraper::from_config(config);
    let vcs = GitCli::new(&config.project_root, &config.git);
    UpdateRunner::new(scraper, vcs, config).run(&plan)
}

/// Write a report as pretty JSON.
pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let json = serde_json::to_vec_pretty(report)?;
    write_atomic(path, &json)
}
