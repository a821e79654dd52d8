//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path, creating the file if absent
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    Connection::open(path).map_err(|e| from_rusqlite(e).with_entity_id(path.display().to_string()))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection with the workspace's standard pragmas
pub fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(from_rusqlite)?;

    // journal_mode answers with the resulting mode; in-memory stores stay "memory"
    let mode: String = conn
        .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
        .map_err(from_rusqlite)?;
    tracing::debug!(journal_mode = %mode, "configured sqlite connection");

    Ok(())
}
