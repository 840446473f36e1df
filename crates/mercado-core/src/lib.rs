//! # Mercado Core
//!
//! Core library for mercado - a dual-currency grocery list ledger for
//! shoppers who price items in US dollars and Venezuelan bolívars at once.
//!
//! This crate provides the domain logic, totals arithmetic, and key-value
//! persistence independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **item**: Items and the two supported currencies
//! - **rate**: The user-supplied USD to VES exchange rate
//! - **ledger**: The mutable list, totals, and load/save against a store
//! - **store**: Key-value store trait plus SQLite and in-memory backends
//!
//! Totals are denominated in USD; bolívar prices convert through the
//! exchange rate, and conversions without a usable rate surface as
//! [`MercadoError::RateUnavailable`] instead of non-finite numbers.

pub mod error;
pub mod item;
pub mod ledger;
pub mod rate;
pub mod store;

pub use error::{MercadoError, Result};
pub use item::{Currency, Item, ItemId};
pub use ledger::{check_store, Ledger};
pub use rate::ExchangeRate;
pub use store::{KvStore, MemoryStore, SqliteStore, StoreMetadata, ITEMS_KEY, RATE_KEY};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
