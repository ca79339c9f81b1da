//! Generator configuration discovery for the CLI.
//!
//! A `--config` path wins. Without one, `delve/config.toml` in the working
//! directory and then the platform config directory are tried before the
//! built-in defaults.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};

use delve::config::GeneratorConfig;

use crate::error::{CliError, ConfigError};

/// Configuration file looked up relative to the working directory.
const LOCAL_CONFIG: &str = "delve/config.toml";

/// Load the generator configuration.
///
/// An explicit path must exist. Otherwise the first existing file from
/// [`search_paths`] is used, falling back to the defaults. The loaded
/// configuration is validated before it is returned.
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be read or parsed
/// - The parsed configuration is invalid
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<GeneratorConfig, CliError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(origin = "explicit", path = path.display().to_string(); "Loading configuration");
        return load_config_file(path);
    }

    for (origin, path) in search_paths() {
        if path.exists() {
            info!(origin, path = path.display().to_string(); "Loading configuration");
            return load_config_file(&path);
        }
        debug!(origin, path = path.display().to_string(); "Configuration file not found");
    }

    debug!("No configuration file found, using default configuration");
    Ok(GeneratorConfig::default())
}

/// Implicit configuration locations, highest priority first.
fn search_paths() -> Vec<(&'static str, PathBuf)> {
    let mut paths = vec![("local", PathBuf::from(LOCAL_CONFIG))];

    match ProjectDirs::from("com", "delve", "delve") {
        Some(dirs) => paths.push(("system", dirs.config_dir().join("config.toml"))),
        None => debug!("Could not determine platform-specific config directory"),
    }

    paths
}

fn load_config_file(path: &Path) -> Result<GeneratorConfig, CliError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: GeneratorConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;

    Ok(config)
}
