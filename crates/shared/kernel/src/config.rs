use ::config::{Case, Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides (`ENLIST__MAIL__PASSWORD` → `mail.password`).
pub const ENV_PREFIX: &str = "ENLIST";
const ENV_SEPARATOR: &str = "__";
const DEFAULT_CONFIG_FILE: &str = "server";

#[enlist_derive::enlist_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: ::config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a config file overlaid with `ENLIST__*` environment variables.
///
/// The file format is picked from the extension; a path without one is probed for
/// `.toml`, `.yaml` and `.json`. An explicitly given file must exist. With `None`, the
/// `server` file in the working directory is used when present, so the service can
/// run from environment variables alone.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source cannot be
/// parsed, or the merged values do not fit `T`.
///
/// # Example
/// ```rust,no_run
/// use enlist_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     port: u16,
/// }
///
/// let cfg: Settings = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!(path = %path.display(), required, "Loading configuration");

    Config::builder()
        .add_source(File::from(path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .convert_case(Case::Snake)
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
