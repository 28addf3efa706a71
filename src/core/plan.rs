//! Turns a job and its configuration into the ordered list of scraper steps.
//!
//! Write modes are derived from position: the first sales category resets the
//! data file and every later one appends to it. Config files cannot override
//! this, so later appends always follow a completed overwrite.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::params::{Category, RunConfig, SalesParams};
use crate::error::{Error, Result};
use crate::types::{Job, WriteMode};

/// A single scraper invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Step {
    Sales { category: Category },
    Buying,
}

impl Step {
    pub fn label(&self) -> String {
        match self {
            Step::Sales { category } => format!("sales:{}", category.keyword),
            Step::Buying => "buying".to_string(),
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ordered steps plus the data files they touch (relative to the project root).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub job: Job,
    pub steps: Vec<Step>,
    pub data_files: Vec<PathBuf>,
}

pub fn plan_sales(params: &SalesParams) -> Result<Vec<Category>> {
    if params.categories.is_empty() {
        return Err(Error::EmptyCategories);
    }

    params
        .categories
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let keyword = entry.keyword().trim();
            if keyword.is_empty() {
                return Err(Error::InvalidArgument {
                    arg: "keyword",
                    value: format!("<blank at position {}>", index),
                });
            }
            if let Some(0) = entry.end_page().or(params.end_page) {
                return Err(Error::InvalidArgument {
                    arg: "end_page",
                    value: "0".to_string(),
                });
            }
            Ok(Category {
                keyword: keyword.to_string(),
                mode: WriteMode::for_position(index),
                end_page: entry.end_page().or(params.end_page),
            })
        })
        .collect()
}

pub fn plan(job: Job, config: &RunConfig) -> Result<Plan> {
    let mut steps = Vec::new();
    let mut data_files = Vec::new();

    if matches!(job, Job::Sales | Job::All) {
        steps.extend(
            plan_sales(&config.sales)?
                .into_iter()
                .map(|category| Step::Sales { category }),
        );
        data_files.push(config.sales.data_file.clone());
    }
    if matches!(job, Job::Buying | Job::All) {
        steps.push(Step::Buying);
        data_files.push(config.buying.data_file.clone());
    }

    Ok(Plan {
        job,
        steps,
        data_files,
    })
}
