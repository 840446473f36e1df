//! Persistent key-value store backends.
//!
//! The ledger state lives under two well-known string keys (see
//! [`traits::ITEMS_KEY`] and [`traits::RATE_KEY`]); everything else about the
//! medium is behind the [`KvStore`] trait.

pub mod memory;
pub mod sqlite;
pub mod traits;

pub use memory::MemoryStore;
pub use sqlite::{SqliteStore, StoreMetadata};
pub use traits::{KvStore, ITEMS_KEY, RATE_KEY};
