//! Command handlers.

pub mod add;
pub mod list;
pub mod maintenance;
pub mod misc;
pub mod quantity;
pub mod rate;
pub mod remove;
pub mod total;
