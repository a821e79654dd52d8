//! CodeScribe Store - Persistence layer over SQLite
//!
//! Provides:
//! - Connection helpers (`db`)
//! - Embedded, checksummed schema migrations
//! - `SnippetRepo`, the single-table snippet repository

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::{initialize_schema, SnippetRepo};
