//! Snippet model
//!
//! A snippet is a short piece of source code stored with a title and
//! optional metadata. The store assigns the id; everything else is
//! replaceable through an update.

use serde::{Deserialize, Serialize};

/// Store-assigned snippet identifier (SQLite rowid)
pub type SnippetId = i64;

/// The editable fields of a snippet
///
/// Create and update both take a full `SnippetFields`; an update replaces
/// every field at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetFields {
    /// Human-readable title (required)
    pub title: String,

    /// Free-text description
    pub description: Option<String>,

    /// Tags as an opaque string; delimiters are up to the caller
    pub tags: Option<String>,

    /// The snippet body
    pub code: String,

    /// Programming language label
    pub language: Option<String>,
}

impl SnippetFields {
    /// Create fields with the required title and code
    pub fn new(title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Whether `keyword` occurs in the title, description, or tags
    ///
    /// Case-sensitive. This is the in-memory reading of the store's search
    /// predicate.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.title.contains(keyword)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.contains(keyword))
            || self.tags.as_deref().is_some_and(|t| t.contains(keyword))
    }
}

/// A stored snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: SnippetId,

    #[serde(flatten)]
    pub fields: SnippetFields,
}

impl Snippet {
    pub fn new(id: SnippetId, fields: SnippetFields) -> Self {
        Self { id, fields }
    }

    pub fn title(&self) -> &str {
        &self.fields.title
    }

    pub fn code(&self) -> &str {
        &self.fields.code
    }
}
