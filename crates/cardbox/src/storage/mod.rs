//! Snapshot store for shared cards.
//!
//! This module provides `SQLite`-based storage for card snapshots behind
//! shareable links. Each snapshot is a JSON envelope
//! `{ "data": <card>, "timestamp": <epoch ms> }` stored under a namespaced
//! key (`vcard_shared_<id>`). The store is capped by a byte budget; before
//! a write, the oldest snapshots are evicted until the new one fits.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info, warn};

use crate::card::ContactCard;
use crate::error::{Error, Result};

/// Key namespace for shared snapshots.
pub const KEY_PREFIX: &str = "vcard_shared_";

/// Default byte budget for the store (4.5 MB).
pub const DEFAULT_MAX_BYTES: u64 = 4_718_592;

/// The JSON envelope persisted for each snapshot.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct SnapshotEnvelope {
    /// The card at the moment of sharing.
    data: ContactCard,
    /// When the snapshot was taken, epoch milliseconds.
    timestamp: i64,
}

/// Summary of one stored snapshot, as returned by [`SnapshotStore::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotInfo {
    /// The snapshot id (without the key namespace).
    pub id: String,
    /// When the snapshot was stored.
    pub created_at: DateTime<Utc>,
    /// Serialized size in bytes.
    pub size_bytes: u64,
    /// Display name of the stored card, if readable.
    pub name: String,
}

/// Statistics about the snapshot store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    /// Total number of snapshots stored.
    pub total_snapshots: i64,
    /// Combined serialized size of all snapshots in bytes.
    pub total_bytes: u64,
    /// The configured byte budget.
    pub max_bytes: u64,
    /// Timestamp of the oldest snapshot.
    pub oldest_snapshot: Option<DateTime<Utc>>,
    /// Timestamp of the newest snapshot.
    pub newest_snapshot: Option<DateTime<Utc>>,
    /// Size of the database file in bytes.
    pub db_size_bytes: u64,
}

/// Snapshot store backed by `SQLite`.
#[derive(Debug)]
pub struct SnapshotStore {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
    /// Byte budget for all stored snapshots combined.
    max_bytes: u64,
}

impl SnapshotStore {
    /// Open or create a snapshot store at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist.
    /// Initializes the schema if this is a new database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema
    /// initialization fails.
    pub fn open(path: impl AsRef<Path>, max_bytes: u64) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        migrations::initialize_schema(&conn)?;

        info!("Database opened successfully at {}", path.display());
        Ok(Self {
            path,
            conn,
            max_bytes,
        })
    }

    /// Create an in-memory store for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory(max_bytes: u64) -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
            max_bytes,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The configured byte budget.
    #[must_use]
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Store a snapshot of the card and return its generated id.
    ///
    /// Before the write, the oldest snapshots are evicted until the existing
    /// content plus the incoming snapshot fits the byte budget. Eviction is
    /// best-effort: a snapshot larger than the whole budget is still written
    /// once the store is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database operation fails.
    pub fn put(&self, card: &ContactCard) -> Result<String> {
        let id = uuid::Uuid::new_v4().simple().to_string();
        let now = Utc::now();
        let envelope = SnapshotEnvelope {
            data: card.clone(),
            timestamp: now.timestamp_millis(),
        };
        let body = serde_json::to_string(&envelope)?;

        self.evict_to_fit(body.len() as u64)?;

        self.conn.execute(
            "INSERT INTO snapshots (key, body, created_at) VALUES (?1, ?2, ?3)",
            params![Self::full_key(&id), body, now.to_rfc3339()],
        )?;

        debug!("Stored snapshot {}", id);
        Ok(id)
    }

    /// Load a snapshot by id.
    ///
    /// Absent keys and malformed entries both yield `None`; a malformed
    /// entry is logged but never an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if the database operation itself fails.
    pub fn get(&self, id: &str) -> Result<Option<ContactCard>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM snapshots WHERE key = ?1",
                [Self::full_key(id)],
                |row| row.get(0),
            )
            .optional()?;

        let Some(body) = body else {
            return Ok(None);
        };

        match serde_json::from_str::<SnapshotEnvelope>(&body) {
            Ok(envelope) => Ok(Some(envelope.data)),
            Err(e) => {
                warn!("Ignoring malformed snapshot {}: {}", id, e);
                Ok(None)
            }
        }
    }

    /// Delete a snapshot by id.
    ///
    /// Returns `true` if a snapshot was deleted, `false` if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let affected = self.conn.execute(
            "DELETE FROM snapshots WHERE key = ?1",
            [Self::full_key(id)],
        )?;
        Ok(affected > 0)
    }

    /// List stored snapshots, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn list(&self) -> Result<Vec<SnapshotInfo>> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT key, body, created_at, LENGTH(CAST(body AS BLOB))
            FROM snapshots ORDER BY created_at DESC, rowid DESC
            ",
        )?;

        let infos = stmt
            .query_map([], Self::row_to_info)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(infos)
    }

    /// Count stored snapshots.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM snapshots", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Combined serialized size of all snapshots in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn total_bytes(&self) -> Result<u64> {
        let total: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(LENGTH(CAST(body AS BLOB))), 0) FROM snapshots",
            [],
            |row| row.get(0),
        )?;
        Ok(u64::try_from(total).unwrap_or(0))
    }

    /// Get store statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn stats(&self) -> Result<StoreStats> {
        let total_snapshots = self.count()?;
        let total_bytes = self.total_bytes()?;

        let oldest: Option<String> = self
            .conn
            .query_row(
                "SELECT created_at FROM snapshots ORDER BY created_at ASC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;

        let newest: Option<String> = self
            .conn
            .query_row(
                "SELECT created_at FROM snapshots ORDER BY created_at DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;

        let oldest_snapshot = oldest
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc));
        let newest_snapshot = newest
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        let db_size_bytes = if self.path.to_string_lossy() == ":memory:" {
            0
        } else {
            std::fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
        };

        Ok(StoreStats {
            total_snapshots,
            total_bytes,
            max_bytes: self.max_bytes,
            oldest_snapshot,
            newest_snapshot,
            db_size_bytes,
        })
    }

    /// Evict oldest snapshots until `incoming` more bytes fit the budget.
    ///
    /// Stops once the store is empty even if the incoming snapshot alone
    /// exceeds the budget.
    fn evict_to_fit(&self, incoming: u64) -> Result<()> {
        let mut total = self.total_bytes()?;

        while total + incoming > self.max_bytes {
            let oldest: Option<(String, i64)> = self
                .conn
                .query_row(
                    r"
                    SELECT key, LENGTH(CAST(body AS BLOB))
                    FROM snapshots ORDER BY created_at ASC, rowid ASC LIMIT 1
                    ",
                    [],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;

            let Some((key, size)) = oldest else {
                break;
            };

            self.conn
                .execute("DELETE FROM snapshots WHERE key = ?1", [&key])?;
            total = total.saturating_sub(u64::try_from(size).unwrap_or(0));
            info!("Evicted oldest snapshot {} ({} bytes)", key, size);
        }

        Ok(())
    }

    /// The namespaced storage key for a snapshot id.
    fn full_key(id: &str) -> String {
        format!("{KEY_PREFIX}{id}")
    }

    /// Convert a database row to a `SnapshotInfo`.
    fn row_to_info(row: &rusqlite::Row) -> rusqlite::Result<SnapshotInfo> {
        let key: String = row.get(0)?;
        let body: String = row.get(1)?;
        let created_at_str: String = row.get(2)?;
        let size: i64 = row.get(3)?;

        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

        let name = serde_json::from_str::<SnapshotEnvelope>(&body)
            .map_or_else(|_| "(unreadable)".to_string(), |e| e.data.full_name());

        let id = key
            .strip_prefix(KEY_PREFIX)
            .unwrap_or(key.as_str())
            .to_string();

        Ok(SnapshotInfo {
            id,
            created_at,
            size_bytes: u64::try_from(size).unwrap_or(0),
            name,
        })
    }
}
