//! Error handling for codescribe-store
//!
//! Wraps the core `ExError` with store-specific constructors

use codescribe_core::errors::{ExError, ExErrorKind, SnippetError};
use codescribe_core::model::SnippetId;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
///
/// A schema statement that cannot run leaves the store unusable, so this
/// is reported as `StoreUnavailable`.
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::StoreUnavailable)
        .with_op("migration")
        .with_entity_id(migration_id)
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ChecksumMismatch)
        .with_op("migration_checksum")
        .with_entity_id(migration_id)
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a not-found error for a snippet id
pub fn snippet_not_found(id: SnippetId) -> ExError {
    ExError::from(SnippetError::NotFound { id }).with_op("snippet_get")
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::from(SnippetError::StoreUnavailable {
        message: err.to_string(),
    })
    .with_op("sqlite")
}

/// Like `from_rusqlite`, tagged with the failing operation
pub fn sqlite_op(op: &'static str) -> impl Fn(rusqlite::Error) -> ExError {
    move |err| from_rusqlite(err).with_op(op)
}
