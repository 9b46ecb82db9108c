use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "CPLAN";
/// Separator between nested keys in environment variables.
pub const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[cplan_derive::cplan_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader: an optional file overlaid with environment variables.
///
/// 1. **File**: When `path` is given the file is required; its format follows the extension
///    (`toml`, `json`, `yaml`, ...). Without a path only defaults and the environment apply.
/// 2. **Environment Overrides**: Variables prefixed with `CPLAN__`. Nested keys are joined with
///    double underscores (e.g., `CPLAN__CATALOG__BUCKET_COUNT` maps to `catalog.bucket_count`).
///
/// # Errors
/// This function will return an error if:
/// * The given configuration file cannot be found or parsed.
/// * The merged values do not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use cplan_kernel::config::load_config;
/// use cplan_domain::config::PlannerConfig;
///
/// let cfg: PlannerConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(cfg.catalog.bucket_count > 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        let path = path.as_ref();
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    } else {
        debug!("No config file given, using defaults and environment");
    }

    let config = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
