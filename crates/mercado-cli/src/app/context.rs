//! Application context for the mercado CLI.

use mercado_core::SqliteStore;

use crate::cli::Cli;
use crate::ui::UiContext;

use super::resolver::resolve_store_path;

/// Per-invocation context that bundles CLI args with store access.
///
/// This avoids re-resolving paths and threading multiple parameters through
/// handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self { cli }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Open the store, creating it on first use.
    pub fn open_store(&self) -> anyhow::Result<SqliteStore> {
        let path = resolve_store_path(self.cli)?;
        tracing::debug!(path = %path.display(), "opening store");
        SqliteStore::open(&path)
            .map_err(|e| anyhow::anyhow!("Failed to open store {}: {}", path.display(), e))
    }

    /// Build a UI context for the given per-command output flags.
    pub fn ui_context(&self, json_flag: bool, format_flag: Option<&str>) -> UiContext {
        UiContext::from_env(json_flag, format_flag)
    }
}
