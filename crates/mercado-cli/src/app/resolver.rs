//! Path resolution for config and store files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, read_config};

/// Resolve the config file path, checking MERCADO_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("MERCADO_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the store file path.
///
/// Order: `--store` flag or MERCADO_STORE env (both land in `cli.store`),
/// then the config file, then the XDG data default. A path that does not
/// exist yet is fine; the store creates itself on first open.
pub fn resolve_store_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = &cli.store {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let config_path = resolve_config_path()?;
    if config_path.exists() {
        let config = read_config(&config_path)?;
        if !config.store.path.trim().is_empty() {
            return Ok(PathBuf::from(config.store.path));
        }
    }

    default_store_path()
}
