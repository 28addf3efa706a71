use clap::Parser;
use std::path::PathBuf;

use scrapesync::Job;

#[derive(Parser, Debug)]
#[command(name = "scrapesync", version, about = "Run price scrapers and publish the CSVs")]
pub struct CliArgs {
    /// Config file (.toml, otherwise JSON)
    #[arg(short, long, env = "SCRAPESYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project root holding the scraper scripts, data files and git checkout
    #[arg(short = 'C', long, env = "SCRAPESYNC_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Which scrapers to run before publishing
    #[arg(short, long, value_enum, default_value_t = Job::Sales)]
    pub job: Job,

    /// Last page to scrape for every sales category, replacing any per-category limit
    #[arg(long, conflicts_with = "all_pages")]
    pub end_page: Option<u32>,

    /// Scrape every page, ignoring any page limit from the config file
    #[arg(long, default_value_t = false)]
    pub all_pages: bool,

    /// Override the sales categories, in order (e.g. --category AR --category CHR)
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Interpreter at a fixed path (e.g. /usr/bin/python3)
    #[arg(long, conflicts_with = "env_interpreter")]
    pub interpreter: Option<PathBuf>,

    /// Interpreter looked up on PATH at invocation time (e.g. python3)
    #[arg(long)]
    pub env_interpreter: Option<String>,

    /// Commit message for the data update
    #[arg(short, long)]
    pub message: Option<String>,

    /// Run the scrapers but do not stage, commit or push
    #[arg(long, default_value_t = false)]
    pub no_publish: bool,

    /// Write the run report as JSON to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable debug logging (includes scraper output)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
