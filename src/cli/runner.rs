use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use scrapesync::{CategoryEntry, InterpreterSource, RunConfig, load_config, run_update, write_report};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Merge CLI flags over the config file (or defaults when no file is given).
pub fn build_config(args: &CliArgs) -> Result<RunConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RunConfig::default(),
    };

    if let Some(root) = &args.project_root {
        config.project_root = root.clone();
    }
    if !config.project_root.is_dir() {
        return Err(AppError::MissingProjectRoot {
            path: config.project_root.clone(),
        });
    }

    if let Some(page) = args.end_page {
        if page == 0 {
            return Err(AppError::ZeroEndPage { page });
        }
        config.sales.end_page = Some(page);
    }
    if args.all_pages {
        config.sales.end_page = None;
    }
    if args.end_page.is_some() || args.all_pages {
        for entry in config.sales.categories.iter_mut() {
            *entry = CategoryEntry::Keyword(entry.keyword().to_string());
        }
    }
    if !args.categories.is_empty() {
        config.sales.categories = args
            .categories
            .iter()
            .map(|k| CategoryEntry::from(k.as_str()))
            .collect();
    }

    if let Some(path) = &args.interpreter {
        config.interpreter = InterpreterSource::Fixed { path: path.clone() };
    }
    if let Some(program) = &args.env_interpreter {
        config.interpreter = InterpreterSource::Env {
            program: program.clone(),
        };
    }

    if let Some(message) = &args.message {
        config.git.commit_message = message.clone();
    }
    if args.no_publish {
        config.publish = false;
    }

    Ok(config)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let config = build_config(&args)?;
    info!("Project root: {:?}", config.project_root);
    info!("Interpreter: {}", config.interpreter);

    let report = match run_update(&config, args.job) {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            return Err(AppError::from(e).into());
        }
    };

    info!("Steps completed: {}", report.steps.len());
    info!("Committed: {}", report.committed);
    info!("Published: {}", report.published);
    if let Some(stamp) = &report.stamp {
        info!("Last updated: {}", stamp);
    }

    if let Some(path) = &args.report {
        write_report(path, &report)?;
        info!("Report written to {:?}", path);
    }

    Ok(())
}
