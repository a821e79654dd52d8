//! Snippet manager with boundary logging.
//!
//! ## Logging Ownership
//!
//! The manager owns lifecycle logging for snippet operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The store only uses `tracing::debug!()` for internal details. Errors are
//! logged and then returned exactly as the store produced them.

use codescribe_core::model::{Snippet, SnippetFields, SnippetId};
use codescribe_core::{log_op_end, log_op_error, log_op_start};
use codescribe_store::errors::Result;
use codescribe_store::SnippetRepo;
use std::time::Instant;

/// Façade exposing domain-named snippet operations over a `SnippetRepo`
#[derive(Clone, Copy)]
pub struct SnippetManager<'a> {
    repo: &'a SnippetRepo,
}

impl<'a> SnippetManager<'a> {
    pub fn new(repo: &'a SnippetRepo) -> Self {
        Self { repo }
    }

    /// Create a snippet from its individual fields
    ///
    /// ## Returns
    ///
    /// The id assigned by the store
    ///
    /// ## Errors
    ///
    /// - `StoreUnavailable`: the insert failed
    pub fn create_snippet(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        tags: Option<String>,
        code: impl Into<String>,
        language: Option<String>,
    ) -> Result<SnippetId> {
        let fields = SnippetFields {
            title: title.into(),
            description,
            tags,
            code: code.into(),
            language,
        };

        log_op_start!("create_snippet", title = %fields.title);
        let start = Instant::now();

        let id = self.repo.create(&fields).map_err(|e| {
            log_op_error!(
                "create_snippet",
                e.clone(),
                duration_ms = elapsed_ms(start)
            );
            e
        })?;

        log_op_end!(
            "create_snippet",
            duration_ms = elapsed_ms(start),
            snippet_id = id
        );
        Ok(id)
    }

    /// Fetch a snippet by id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no snippet has this id
    /// - `StoreUnavailable`: the query failed
    pub fn get_snippet_by_id(&self, id: SnippetId) -> Result<Snippet> {
        log_op_start!("get_snippet_by_id", snippet_id = id);
        let start = Instant::now();

        let snippet = self.repo.get_by_id(id).map_err(|e| {
            log_op_error!(
                "get_snippet_by_id",
                e.clone(),
                duration_ms = elapsed_ms(start),
                snippet_id = id
            );
            e
        })?;

        log_op_end!(
            "get_snippet_by_id",
            duration_ms = elapsed_ms(start),
            snippet_id = id
        );
        Ok(snippet)
    }

    /// Snippets whose title, description or tags contain `keyword`
    ///
    /// Case-sensitive; an empty keyword returns every snippet.
    pub fn search_snippets(&self, keyword: &str) -> Result<Vec<Snippet>> {
        log_op_start!("search_snippets", keyword = keyword);
        let start = Instant::now();

        let snippets = self.repo.search(keyword).map_err(|e| {
            log_op_error!(
                "search_snippets",
                e.clone(),
                duration_ms = elapsed_ms(start)
            );
            e
        })?;

        log_op_end!(
            "search_snippets",
            duration_ms = elapsed_ms(start),
            result_len = snippets.len()
        );
        Ok(snippets)
    }

    /// Replace every field of snippet `id`
    ///
    /// ## Returns
    ///
    /// `true` if a snippet was replaced, `false` if no snippet has this id.
    /// The unknown-id case is not an error and changes nothing.
    pub fn update_snippet(
        &self,
        id: SnippetId,
        title: impl Into<String>,
        description: Option<String>,
        tags: Option<String>,
        code: impl Into<String>,
        language: Option<String>,
    ) -> Result<bool> {
        let fields = SnippetFields {
            title: title.into(),
            description,
            tags,
            code: code.into(),
            language,
        };

        log_op_start!("update_snippet", snippet_id = id);
        let start = Instant::now();

        let matched = self.repo.update(id, &fields).map_err(|e| {
            log_op_error!(
                "update_snippet",
                e.clone(),
                duration_ms = elapsed_ms(start),
                snippet_id = id
            );
            e
        })?;

        log_op_end!(
            "update_snippet",
            duration_ms = elapsed_ms(start),
            snippet_id = id,
            matched = matched
        );
        Ok(matched)
    }

    /// Every stored snippet in insertion order
    pub fn get_all_snippets(&self) -> Result<Vec<Snippet>> {
        log_op_start!("get_all_snippets");
        let start = Instant::now();

        let snippets = self.repo.get_all().map_err(|e| {
            log_op_error!(
                "get_all_snippets",
                e.clone(),
                duration_ms = elapsed_ms(start)
            );
            e
        })?;

        log_op_end!(
            "get_all_snippets",
            duration_ms = elapsed_ms(start),
            result_len = snippets.len()
        );
        Ok(snippets)
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
