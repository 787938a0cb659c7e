use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides (`WHUB__DATABASE__URL` maps to `database.url`).
pub const ENV_PREFIX: &str = "WHUB";
/// Config file read when no path is given; optional.
pub const DEFAULT_CONFIG_FILE: &str = "whub";

/// Custom error type for config loading.
#[whub_derive::whub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file with environment overrides on top.
///
/// 1. **Base File**: an explicit `path` must exist; without one, a `whub.*` file in the
///    working directory is used if present.
/// 2. **Environment Overrides**: variables prefixed with `WHUB__`, nested with `__`
///    (e.g., `WHUB__SERVER__PORT=8080`).
///
/// # Errors
/// Returns an error if an explicit file is missing, or if the merged sources do not
/// deserialize into `T`.
///
/// # Example
/// ```rust
/// use whub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Same as [`load_config`], but reads overrides from `env` instead of the process
/// environment when it is given.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<HashMap<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true)
                .source(env),
        );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
