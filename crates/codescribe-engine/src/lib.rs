//! CodeScribe Engine - Snippet management façade
//!
//! Maps domain-named snippet operations onto the persistence layer and owns
//! the lifecycle logging for each of them.

pub mod manager;

pub use codescribe_store::initialize_schema;
pub use manager::SnippetManager;
