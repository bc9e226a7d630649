//! `SQLite` schema definitions for the snapshot store.
//!
//! This module contains the SQL statements for creating and managing
//! the database schema.

/// SQL statement to create the snapshots table.
///
/// `body` holds the JSON envelope `{ "data": ..., "timestamp": ... }`;
/// `created_at` mirrors the envelope timestamp as RFC 3339 text so rows
/// can be ordered oldest-first for eviction.
pub const CREATE_SNAPSHOTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS snapshots (
    key TEXT PRIMARY KEY,
    body TEXT NOT NULL,
    created_at TEXT NOT NULL
)
";

/// SQL statement to create an index on `created_at` for eviction ordering.
pub const CREATE_CREATED_AT_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_snapshots_created_at ON snapshots(created_at ASC)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_SNAPSHOTS_TABLE,
    CREATE_CREATED_AT_INDEX,
    CREATE_METADATA_TABLE,
];
