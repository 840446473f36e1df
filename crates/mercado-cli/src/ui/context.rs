//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and per-command output flags.
    ///
    /// Color is disabled off-TTY, under `NO_COLOR`, and under `TERM=dumb`;
    /// `TERM=dumb` also drops unicode symbols. Width comes from `COLUMNS`
    /// with an 80-column fallback.
    pub fn from_env(json_flag: bool, format_flag: Option<&str>) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        let color = is_tty && !no_color_env && !term_is_dumb;
        let unicode = !term_is_dumb;
        let width = terminal_width().unwrap_or(80);
        let mode = OutputMode::resolve(json_flag, format_flag, is_tty, term_is_dumb);

        Self {
            is_tty,
            color,
            unicode,
            width,
            mode,
        }
    }
}

/// Get terminal width from COLUMNS, falling back to 80.
fn terminal_width() -> Option<usize> {
    let cols = std::env::var("COLUMNS").ok()?;
    let width = cols.parse::<usize>().ok()?;
    if width > 0 {
        Some(width)
    } else {
        None
    }
}
