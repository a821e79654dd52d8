//! Domain models

pub mod snippet;

pub use snippet::{Snippet, SnippetFields, SnippetId};
