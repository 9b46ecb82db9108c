//! # Course Planner Shell
//!
//! Interactive front end over the course catalog.
//!
//! Startup order: parse flags, load the layered configuration, apply flag overrides, install
//! the logger, then optionally preload a catalog before handing stdin/stdout to the [`Menu`].
//!
//! ## Example
//! ```no_run
//! use cplan_shell::{Cli, Shell};
//! use clap::Parser;
//!
//! fn main() -> anyhow::Result<()> {
//!     Shell::from_cli(Cli::parse())?.run()
//! }
//! ```

pub mod cli;
pub mod menu;

pub use cli::{Cli, KeyModeArg};
pub use menu::{Choice, Menu};

use anyhow::{Context, Result};
use cplan_kernel::Planner;
use cplan_kernel::config::load_config;
use cplan_kernel::domain::config::{LoggingConfig, PlannerConfig};
use cplan_logger::{Logger, parse_level};
use std::io;
use std::path::PathBuf;
use tracing::info;

const LOGGER_NAME: &str = "course-planner";

/// A configured planner plus the logging guard that must outlive it.
#[derive(Debug)]
pub struct Shell {
    planner: Planner,
    preload: Option<PathBuf>,
    _logger: Logger,
}

impl Shell {
    /// Resolves configuration and installs logging.
    ///
    /// # Errors
    ///
    /// Fails on a malformed configuration, an invalid log level, a logger that cannot be
    /// installed, or a zero bucket count.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let mut config: PlannerConfig =
            load_config(cli.config.as_ref()).context("Critical: Configuration is malformed")?;
        cli.apply(&mut config);

        let logger = init_logger(&config.logging)?;
        info!(
            buckets = config.catalog.bucket_count,
            key_mode = %config.catalog.key_mode,
            "Course planner starting"
        );

        let planner = Planner::new(config.catalog).context("Failed to create course catalog")?;

        Ok(Self { planner, preload: cli.file, _logger: logger })
    }

    /// Preloads the requested catalog, then runs the menu on stdin/stdout.
    ///
    /// # Errors
    ///
    /// Fails if the preload file cannot be read or the terminal I/O breaks.
    pub fn run(mut self) -> Result<()> {
        if let Some(path) = self.preload.take() {
            let report = self
                .planner
                .load(&path)
                .with_context(|| format!("Failed to preload catalog from {}", path.display()))?;
            info!(loaded = report.loaded, skipped = report.skipped.len(), "Catalog preloaded");
        }

        let stdin = io::stdin();
        let stdout = io::stdout();
        Menu::new(&mut self.planner, stdin.lock(), stdout.lock()).run().context("Menu I/O failed")
    }
}

fn init_logger(config: &LoggingConfig) -> Result<Logger> {
    let level = parse_level(&config.level)?;
    let builder = Logger::builder().name(LOGGER_NAME).console(true).level(level);

    let logger = match &config.directory {
        Some(dir) => builder.path(dir).json(config.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
