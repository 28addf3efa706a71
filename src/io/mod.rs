//! I/O layer: child processes, interpreter lookup, scraper invocation,
//! git operations and the last-updated stamp file.
pub mod process;
pub use process::{ProcessOutcome, run_captured};

pub mod interpreter;
pub use interpreter::resolve_interpreter;

pub mod scraper;
pub use scraper::{ProcessScraper, Scraper};

pub mod vcs;
pub use vcs::{GitCli, Vcs};

pub mod stamp;
