//! # CLI Argument Definitions
//!
//! Command-line flags of the `course-planner` binary. Every flag is optional and, when given,
//! takes precedence over the configuration file and `CPLAN__*` environment variables.

use clap::{Parser, ValueEnum};
use cplan_kernel::domain::KeyMode;
use cplan_kernel::domain::config::PlannerConfig;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "course-planner")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive course catalog and prerequisite lookup for ABCU advisors")]
pub struct Cli {
    /// Configuration file (toml, json, yaml, ...)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog file to load before the menu starts
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Number of hash table buckets
    #[arg(short, long, value_name = "N")]
    pub buckets: Option<u32>,

    /// How identifiers are hashed on insertion
    #[arg(short, long, value_enum)]
    pub key_mode: Option<KeyModeArg>,

    /// Default log level (RUST_LOG still wins)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeyModeArg {
    /// Hash the uppercased identifier
    Uppercase,
    /// Hash the identifier exactly as loaded
    Verbatim,
}

impl From<KeyModeArg> for KeyMode {
    fn from(value: KeyModeArg) -> Self {
        match value {
            KeyModeArg::Uppercase => Self::Uppercase,
            KeyModeArg::Verbatim => Self::Verbatim,
        }
    }
}

impl Cli {
    /// Overlays the flags that were given onto `config`.
    pub fn apply(&self, config: &mut PlannerConfig) {
        if let Some(buckets) = self.buckets {
            config.catalog.bucket_count = buckets;
        }
        if let Some(key_mode) = self.key_mode {
            config.catalog.key_mode = key_mode.into();
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if let Some(dir) = &self.log_dir {
            config.logging.directory = Some(dir.clone());
        }
    }
}
