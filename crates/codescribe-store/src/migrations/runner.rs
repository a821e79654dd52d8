//! Migration runner
//!
//! Applies migrations with checksums and idempotency

use crate::errors::{checksum_mismatch, from_rusqlite, migration_error, Result};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::{get_migrations, Migration};
use rusqlite::{Connection, OptionalExtension};

/// Apply all pending embedded migrations to the database
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    apply_migration_set(conn, &get_migrations())
}

/// Apply an ordered set of migrations
///
/// Already-applied migrations are skipped once their recorded checksum is
/// confirmed to match the SQL being offered.
pub fn apply_migration_set(conn: &mut Connection, migrations: &[Migration]) -> Result<()> {
    create_schema_version_table(conn)?;

    for migration in migrations {
        apply_migration(conn, migration.id, migration.sql)?;
    }

    Ok(())
}

/// List applied migration ids in application order
pub fn applied_migrations(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT migration_id FROM schema_version ORDER BY id")
        .map_err(from_rusqlite)?;

    let ids = stmt
        .query_map([], |row| row.get(0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<String>, _>>()
        .map_err(from_rusqlite)?;

    Ok(ids)
}

/// Create the schema_version table if it doesn't exist
fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT
        )",
        [],
    )
    .map_err(|e| migration_error("schema_version", &e.to_string()))?;

    Ok(())
}

/// Apply a single migration if not already applied
fn apply_migration(conn: &mut Connection, migration_id: &str, sql: &str) -> Result<()> {
    let checksum = compute_checksum(sql);

    let recorded: Option<Option<String>> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?1",
            [migration_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;

    if let Some(recorded) = recorded {
        return match recorded {
            Some(expected) if expected != checksum => {
                Err(checksum_mismatch(migration_id, &expected, &checksum))
            }
            _ => Ok(()),
        };
    }

    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(sql)
        .map_err(|e| migration_error(migration_id, &e.to_string()))?;

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?1, ?2, ?3)",
        rusqlite::params![migration_id, now, checksum],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(migration_id, "applied migration");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use codescribe_core::errors::ExErrorKind;

    #[test]
    fn test_apply_migrations() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert!(apply_migrations(&mut conn).is_ok());
    }

    #[test]
    fn test_idempotency() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();
        assert!(apply_migrations(&mut conn).is_ok());
        assert_eq!(applied_migrations(&conn).unwrap(), vec!["001_snippets"]);
    }

    #[test]
    fn test_edited_migration_is_rejected() {
        let mut conn = Connection::open_in_memory().unwrap();
        let original = [Migration {
            id: "900_probe",
            sql: "CREATE TABLE probe (x INTEGER);",
        }];
        apply_migration_set(&mut conn, &original).unwrap();

        let edited = [Migration {
            id: "900_probe",
            sql: "CREATE TABLE probe (x INTEGER, y INTEGER);",
        }];
        let err = apply_migration_set(&mut conn, &edited).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::ChecksumMismatch);
    }

    #[test]
    fn test_failed_migration_rolls_back() {
        let mut conn = Connection::open_in_memory().unwrap();
        let broken = [Migration {
            id: "901_broken",
            sql: "CREATE TABLE half (x INTEGER); THIS IS NOT SQL;",
        }];

        let err = apply_migration_set(&mut conn, &broken).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::StoreUnavailable);
        assert_eq!(err.op(), Some("migration"));

        let half_exists: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'half'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(half_exists, 0);
        assert!(applied_migrations(&conn).unwrap().is_empty());
    }
}
