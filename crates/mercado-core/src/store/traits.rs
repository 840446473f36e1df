//! Key-value store trait definition.
//!
//! The `KvStore` trait is the interface the ledger persists through. It is a
//! deliberately small get/set-by-string-key surface so backends stay trivial
//! to swap (SQLite file, in-memory map) without touching the core logic.

use crate::error::Result;

/// Store key for the serialized item list (JSON array).
///
/// The key names and value encodings are shared with older clients of the
/// same data, so they are part of the persisted contract.
pub const ITEMS_KEY: &str = "groceryItems";

/// Store key for the raw exchange-rate text (may be the empty string).
pub const RATE_KEY: &str = "exchangeRate";

/// String key-value store interface.
///
/// Implementations must treat values as opaque text and return them exactly
/// as written; the ledger depends on byte-for-byte round-trips.
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(value))` if present, `Ok(None)` if the key has never
    /// been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `MercadoError::Storage` if the backend cannot persist the
    /// write.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
