//! Repository layer for persisting snippets to SQLite

pub mod snippet_repo;

pub use snippet_repo::{initialize_schema, SnippetRepo};
