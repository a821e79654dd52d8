//! CodeScribe Core - Domain model and shared facilities
//!
//! This crate provides:
//! - The `Snippet` record and its editable `SnippetFields`
//! - The canonical error facility (`ExError`, `ExErrorKind`)
//! - The structured logging facility and its boundary macros

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod schema;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, SnippetError};
pub use model::{Snippet, SnippetFields, SnippetId};
