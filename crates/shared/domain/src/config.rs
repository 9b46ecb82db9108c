use crate::constants::{DEFAULT_BUCKET_COUNT, DEFAULT_CATALOG_FILE};
use crate::key_mode::KeyMode;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration of the course planner.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// Hash table sizing and catalog source.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub bucket_count: u32,
    pub key_mode: KeyMode,
    pub default_file: PathBuf,
}

/// Log level and optional file output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive; `RUST_LOG` still takes precedence.
    pub level: String,
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            key_mode: KeyMode::default(),
            default_file: PathBuf::from(DEFAULT_CATALOG_FILE),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false }
    }
}
