#![doc = r#"
scrapesync — run price scrapers category by category and publish the results.

The crate drives an external scraper program once per category, in a fixed
order, accumulating rows into a CSV data file, then publishes the file to a git
remote with `add`, `commit`, `pull --rebase` and `push`. It powers the
`scrapesync` CLI and can be embedded in other Rust programs.

Ordering
--------
Within a sales run the first category always runs in `overwrite` mode and
every later category in `append` mode. Modes are derived from position, not
configured, and steps never overlap.

Failure policy
--------------
A scraper that exits non-zero stops the run: no later category starts and
nothing is committed or pushed. A failed `pull --rebase` is reported as
[`Error::SyncConflict`] and left for manual resolution. Nothing is ever force
pushed.

Quick start
-----------
```rust,no_run
use scrapesync::{Job, RunConfig, run_update};

fn main() -> scrapesync::Result<()> {
    let mut config = RunConfig::default();
    config.project_root = "/srv/card-prices".into();
    config.sales.end_page = Some(15);

    let report = run_update(&config, Job::Sales)?;
    println!("steps={} committed={}", report.steps.len(), report.committed);
    Ok(())
}
```

Custom collaborators
--------------------
[`UpdateRunner`] is generic over the [`Scraper`] and [`Vcs`] traits, so tests
and embedders can swap either side.

```rust,no_run
use scrapesync::{GitCli, Job, ProcessScraper, RunConfig, UpdateRunner, load_config, plan};

fn main() -> scrapesync::Result<()> {
    let config: RunConfig = load_config(std::path::Path::new("scrapesync.toml"))?;
    let plan = plan(Job::All, &config)?;
    let mut runner = UpdateRunner::new(
        ProcessScraper::from_config(&config),
        GitCli::new(&config.project_root, &config.git),
        &config,
    );
    runner.run(&plan)?;
    Ok(())
}
```

Useful modules
--------------
- [`api`] — `UpdateRunner`, `RunReport` and `run_update`.
- [`core`] — run parameters, config loading and planning.
- [`io`] — child processes, interpreter lookup, scraper and git seams.
- [`types`] — `WriteMode`, `Job`, `InterpreterSource`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::{BuyingParams, Category, CategoryEntry, GitParams, RunConfig, SalesParams};
pub use crate::core::plan::{Plan, Step};
pub use error::{Error, ExitCode, Result};
pub use types::{InterpreterSource, Job, VcsStep, WriteMode};

// Functions and seams
pub use api::{RunReport, StepReport, UpdateRunner, run_update, write_report};
pub use crate::core::config::load_config;
pub use crate::core::plan::{plan, plan_sales};
pub use io::{GitCli, ProcessOutcome, ProcessScraper, Scraper, Vcs};
