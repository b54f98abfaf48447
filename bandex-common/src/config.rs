//! Configuration loading and database path resolution

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Default listen port for the catalog UI
pub const DEFAULT_PORT: u16 = 5780;

/// Resolve the catalog database path following the priority order:
/// 1. Command-line argument (highest priority, already merged with the
///    `BANDEX_DATABASE` environment variable by clap)
/// 2. `database` key in the TOML config file
/// 3. OS-dependent compiled default (fallback)
pub fn resolve_database_path(cli_arg: Option<&Path>) -> PathBuf {
    // Priority 1: Command-line argument / environment variable
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(database) = config.get("database").and_then(|v| v.as_str()) {
                    return PathBuf::from(database);
                }
            }
        }
    }

    // Priority 3: OS-dependent compiled default
    default_database_path()
}

/// Validate the resolved database path at startup.
///
/// The catalog is read-only and pre-populated externally, so a missing
/// database is a deployment error. Failing here gives a clear startup
/// message instead of a query-time failure on the first request.
pub fn ensure_database_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::Config(format!(
            "Database not found: {}\nSupply --database, set BANDEX_DATABASE, \
             or add a `database` key to the config file.",
            path.display()
        )));
    }
    Ok(())
}

/// Get the configuration file path for the platform
fn locate_config_file() -> Result<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("bandex").join("config.toml"));

    if let Some(path) = user_config {
        if path.exists() {
            return Ok(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/bandex/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(Error::Config("No config file found".to_string()))
}

/// Get OS-dependent default database path
fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("bandex"))
        .unwrap_or_else(|| PathBuf::from("./bandex_data"))
        .join("bands.db")
}
