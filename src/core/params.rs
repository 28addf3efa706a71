use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{InterpreterSource, WriteMode};

/// One scrape target as written in a config file: either a bare keyword or a
/// table with its own page limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryEntry {
    Keyword(String),
    Detailed {
        keyword: String,
        #[serde(default)]
        end_page: Option<u32>,
    },
}

impl CategoryEntry {
    pub fn keyword(&self) -> &str {
        match self {
            CategoryEntry::Keyword(k) => k,
            CategoryEntry::Detailed { keyword, .. } => keyword,
        }
    }

    pub fn end_page(&self) -> Option<u32> {
        match self {
            CategoryEntry::Keyword(_) => None,
            CategoryEntry::Detailed { end_page, .. } => *end_page,
        }
    }
}

impl From<&str> for CategoryEntry {
    fn from(keyword: &str) -> Self {
        CategoryEntry::Keyword(keyword.to_string())
    }
}

/// A planned category: keyword, derived write mode and effective page limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub keyword: String,
    pub mode: WriteMode,
    /// Last page to scrape; None scrapes every page
    pub end_page: Option<u32>,
}

/// Sales scraper: invoked once per category, accumulating into `data_file`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesParams {
    pub script: PathBuf,
    pub data_file: PathBuf,
    /// Page limit applied to categories that do not set their own
    pub end_page: Option<u32>,
    /// Passed to the scraper before the category flags
    pub extra_args: Vec<String>,
    pub categories: Vec<CategoryEntry>,
}

impl Default for SalesParams {
    fn default() -> Self {
        Self {
            script: PathBuf::from("scraper.py"),
            data_file: PathBuf::from("card_data.csv"),
            end_page: None,
            extra_args: Vec::new(),
            categories: ["AR", "CHR", "SAR", "SR", "HR"]
                .into_iter()
                .map(CategoryEntry::from)
                .collect(),
        }
    }
}

/// Buying scraper: invoked once with no flags, replacing `data_file`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuyingParams {
    pub script: PathBuf,
    pub data_file: PathBuf,
    pub extra_args: Vec<String>,
}

impl Default for BuyingParams {
    fn default() -> Self {
        Self {
            script: PathBuf::from("buying_scraper.py"),
            data_file: PathBuf::from("buying_data.csv"),
            extra_args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitParams {
    pub program: String,
    /// Remote passed to pull/push; None uses the branch's upstream
    pub remote: Option<String>,
    /// Branch passed to pull/push; only used together with `remote`
    pub branch: Option<String>,
    pub commit_message: String,
}

impl Default for GitParams {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            remote: None,
            branch: None,
            commit_message: "Update price data".to_string(),
        }
    }
}

/// Full run configuration suitable for config files, overridable from the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Working directory for scrapers and git
    pub project_root: PathBuf,
    pub interpreter: InterpreterSource,
    /// If false, scrapers run but nothing is staged or pushed
    pub publish: bool,
    /// Optional file receiving the time of the last successful scrape
    pub stamp_file: Option<PathBuf>,
    pub git: GitParams,
    pub sales: SalesParams,
    pub buying: BuyingParams,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            interpreter: InterpreterSource::default(),
            publish: true,
            stamp_file: None,
            git: GitParams::default(),
            sales: SalesParams::default(),
            buying: BuyingParams::default(),
        }
    }
}
