//! SQLite snippet repository
//!
//! Every call is a single statement against the `snippets` table and runs
//! in SQLite's implicit per-statement transaction.

use crate::db;
use crate::errors::{from_rusqlite, snippet_not_found, sqlite_op, Result};
use crate::migrations::apply_migrations;
use codescribe_core::model::{Snippet, SnippetFields, SnippetId};
use rusqlite::{Connection, OptionalExtension, Row};
use std::path::Path;

const SELECT_COLUMNS: &str = "SELECT id, title, description, tags, code, language FROM snippets";

/// Repository owning the single SQLite connection for the snippet store
pub struct SnippetRepo {
    conn: Connection,
}

impl SnippetRepo {
    /// Open the store at `path`, creating the file and schema if absent
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = db::open(path)?;
        Self::from_connection(conn)
    }

    /// Open a fresh in-memory store
    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Self::from_connection(conn)
    }

    /// Take ownership of an open connection, configure it and migrate it
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Insert a new snippet and return its store-assigned id
    pub fn create(&self, fields: &SnippetFields) -> Result<SnippetId> {
        self.conn
            .execute(
                "INSERT INTO snippets (title, description, tags, code, language)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![
                    fields.title,
                    fields.description,
                    fields.tags,
                    fields.code,
                    fields.language,
                ],
            )
            .map_err(sqlite_op("snippet_create"))?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(snippet_id = id, "inserted snippet");
        Ok(id)
    }

    /// Fetch one snippet by id
    ///
    /// Fails with `NotFound` when no row has this id.
    pub fn get_by_id(&self, id: SnippetId) -> Result<Snippet> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
            .map_err(sqlite_op("snippet_get"))?;

        stmt.query_row([id], snippet_from_row)
            .optional()
            .map_err(sqlite_op("snippet_get"))?
            .ok_or_else(|| snippet_not_found(id))
    }

    /// Snippets whose title, description or tags contain `keyword`
    ///
    /// Matching is a case-sensitive substring test. The keyword is bound as
    /// a parameter; an empty keyword returns every snippet.
    pub fn search(&self, keyword: &str) -> Result<Vec<Snippet>> {
        let pattern = substring_glob(keyword);
        let mut stmt = self
            .conn
            .prepare_cached(&format!(
                "{SELECT_COLUMNS}
                 WHERE title GLOB ?1 OR description GLOB ?1 OR tags GLOB ?1
                 ORDER BY id"
            ))
            .map_err(sqlite_op("snippet_search"))?;

        let snippets = stmt
            .query_map([pattern], snippet_from_row)
            .map_err(sqlite_op("snippet_search"))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(sqlite_op("snippet_search"))?;

        tracing::debug!(keyword, matches = snippets.len(), "searched snippets");
        Ok(snippets)
    }

    /// Every snippet in insertion order
    pub fn get_all(&self) -> Result<Vec<Snippet>> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .map_err(sqlite_op("snippet_list"))?;

        let snippets = stmt
            .query_map([], snippet_from_row)
            .map_err(sqlite_op("snippet_list"))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(sqlite_op("snippet_list"))?;

        Ok(snippets)
    }

    /// Replace every field of the snippet with `id`
    ///
    /// Returns `Ok(false)` when no row has this id. That case is not an
    /// error and leaves the store unchanged.
    pub fn update(&self, id: SnippetId, fields: &SnippetFields) -> Result<bool> {
        let changed = self
            .conn
            .execute(
                "UPDATE snippets
                 SET title = ?1, description = ?2, tags = ?3, code = ?4, language = ?5
                 WHERE id = ?6",
                rusqlite::params![
                    fields.title,
                    fields.description,
                    fields.tags,
                    fields.code,
                    fields.language,
                    id,
                ],
            )
            .map_err(sqlite_op("snippet_update"))?;

        if changed == 0 {
            tracing::debug!(snippet_id = id, "update matched no snippet");
        }
        Ok(changed > 0)
    }

    /// Number of stored snippets
    pub fn count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM snippets", [], |row| row.get(0))
            .map_err(sqlite_op("snippet_count"))?;
        Ok(count as u64)
    }

    /// Close the connection, reporting any error SQLite raises while doing so
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, err)| from_rusqlite(err).with_op("close"))
    }
}

/// Open (creating if absent) the store at `path`, apply the schema, and close it
pub fn initialize_schema<P: AsRef<Path>>(path: P) -> Result<()> {
    SnippetRepo::open(path)?.close()
}

fn snippet_from_row(row: &Row<'_>) -> rusqlite::Result<Snippet> {
    let code: Option<String> = row.get(4)?;
    Ok(Snippet::new(
        row.get(0)?,
        SnippetFields {
            title: row.get(1)?,
            description: row.get(2)?,
            tags: row.get(3)?,
            code: code.unwrap_or_default(),
            language: row.get(5)?,
        },
    ))
}

/// GLOB pattern matching any text that contains `keyword` literally
///
/// GLOB is case-sensitive. Its metacharacters are wrapped in bracket
/// classes so they only match themselves.
pub(crate) fn substring_glob(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('*');
    for ch in keyword.chars() {
        match ch {
            '*' | '?' | '[' => {
                pattern.push('[');
                pattern.push(ch);
                pattern.push(']');
            }
            _ => pattern.push(ch),
        }
    }
    pattern.push('*');
    pattern
}
