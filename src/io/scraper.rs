//! Scraper invocation. The `Scraper` trait is the seam the runner drives;
//! `ProcessScraper` spawns the configured interpreter and script.
use std::ffi::OsString;
use std::path::PathBuf;

use tracing::info;

use crate::core::params::RunConfig;
use crate::core::plan::Step;
use crate::error::Result;
use crate::io::interpreter::resolve_interpreter;
use crate::io::process::{ProcessOutcome, run_captured};
use crate::types::InterpreterSource;

pub trait Scraper {
    /// Run one step to completion. Non-zero exits come back as `Ok` with a
    /// failed outcome; the caller decides what that means for the run.
    fn scrape(&mut self, step: &Step) -> Result<ProcessOutcome>;
}

/// Runs `interpreter script [extra_args..] [step flags..]` in the project root.
#[derive(Debug, Clone)]
pub struct ProcessScraper {
    project_root: PathBuf,
    interpreter: InterpreterSource,
    sales_script: PathBuf,
    sales_args: Vec<String>,
    buying_script: PathBuf,
    buying_args: Vec<String>,
}

impl ProcessScraper {
    pub fn from_config(config: &RunConfig) -> Self {
        Self {
            project_root: config.project_root.clone(),
            interpreter: config.interpreter.clone(),
            sales_script: config.sales.script.clone(),
            sales_args: config.sales.extra_args.clone(),
            buying_script: config.buying.script.clone(),
            buying_args: config.buying.extra_args.clone(),
        }
    }

    /// Arguments after the interpreter for `step`.
    pub fn arguments(&self, step: &Step) -> Vec<OsString> {
        let mut args = Vec::new();
        match step {
            Step::Sales { category } => {
                args.push(self.sales_script.clone().into_os_string());
                args.extend(self.sales_args.iter().map(OsString::from));
                args.push("--keyword".into());
                args.push(category.keyword.clone().into());
                args.push("--mode".into());
                args.push(category.mode.as_arg().into());
                if let Some(end_page) = category.end_page {
                    args.push("--end-page".into());
                    args.push(end_page.to_string().into());
                }
            }
            Step::Buying => {
                args.push(self.buying_script.clone().into_os_string());
                args.extend(self.buying_args.iter().map(OsString::from));
            }
        }
        args
    }
}

impl Scraper for ProcessScraper {
    fn scrape(&mut self, step: &Step) -> Result<ProcessOutcome> {
        let interpreter = resolve_interpreter(&self.interpreter)?;
        let args = self.arguments(step);
        info!("Scraping {} with {}", step, interpreter.display());
        run_captured(&interpreter, &args, &self.project_root)
    }
}
