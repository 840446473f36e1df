//! SQLite-backed key-value store.
//!
//! One file on disk, two tables: `kv` holds the contract keys, `meta` holds
//! store bookkeeping (format version, creation and modification timestamps).
//! Opening a path that does not exist yet creates the file, its parent
//! directories, and the schema, so first use needs no separate init step.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::error::{MercadoError, Result};
use crate::store::traits::KvStore;

/// Schema version written to fresh stores.
const FORMAT_VERSION: &str = "1";

/// Bookkeeping read from the `meta` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// Format version (e.g., "1")
    pub format_version: String,

    /// When this store was first created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the most recent write (informational)
    pub last_modified: DateTime<Utc>,
}

/// File-backed store over SQLite.
pub struct SqliteStore {
    path: PathBuf,
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open the store at `path`, creating file and schema if missing.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;

        // Seed metadata on first open; reopening keeps the original values.
        let now = Utc::now().to_rfc3339();
        conn.execute(
            "INSERT OR IGNORE INTO meta (key, value) VALUES (?, ?)",
            ["format_version", FORMAT_VERSION],
        )?;
        conn.execute(
            "INSERT OR IGNORE INTO meta (key, value) VALUES (?, ?)",
            ["created_at", &now],
        )?;
        conn.execute(
            "INSERT OR IGNORE INTO meta (key, value) VALUES (?, ?)",
            ["last_modified", &now],
        )?;

        Ok(Self {
            path: path.to_path_buf(),
            conn: Mutex::new(conn),
        })
    }

    /// Path this store was opened at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| MercadoError::Storage("SQLite connection poisoned".to_string()))
    }

    /// Read store bookkeeping.
    pub fn metadata(&self) -> Result<StoreMetadata> {
        let conn = self.lock_conn()?;

        let format_version: String = conn.query_row(
            "SELECT value FROM meta WHERE key = 'format_version'",
            [],
            |row| row.get(0),
        )?;

        let created_at_str: String = conn.query_row(
            "SELECT value FROM meta WHERE key = 'created_at'",
            [],
            |row| row.get(0),
        )?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| MercadoError::Storage(format!("Invalid created_at timestamp: {}", e)))?
            .with_timezone(&Utc);

        let last_modified_str: String = conn.query_row(
            "SELECT value FROM meta WHERE key = 'last_modified'",
            [],
            |row| row.get(0),
        )?;
        let last_modified = DateTime::parse_from_rfc3339(&last_modified_str)
            .map_err(|e| MercadoError::Storage(format!("Invalid last_modified timestamp: {}", e)))?
            .with_timezone(&Utc);

        Ok(StoreMetadata {
            format_version,
            created_at,
            last_modified,
        })
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock_conn()?;
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO kv (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        tx.execute(
            "UPDATE meta SET value = ? WHERE key = 'last_modified'",
            [&Utc::now().to_rfc3339()],
        )?;
        tx.commit()?;
        tracing::debug!(key, bytes = value.len(), "store write committed");
        Ok(())
    }
}
