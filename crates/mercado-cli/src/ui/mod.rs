//! UI primitives for the mercado CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and the color palette
//! - **Render**: Tables, receipts, hints, error lines
//! - **Format**: Money and quantity rendering

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{badge, hint, items_table, kv, print, print_error, receipt};
