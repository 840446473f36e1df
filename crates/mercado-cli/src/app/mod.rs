//! Application-level utilities for the mercado CLI.
//!
//! This module provides:
//! - Path resolution for the config file and the store file
//! - The per-invocation context handlers run against

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{resolve_config_path, resolve_store_path};
