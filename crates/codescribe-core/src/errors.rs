use crate::model::SnippetId;
use thiserror::Error;

/// Result type alias using the canonical error
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can branch on
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A read by id matched no row
    NotFound,

    /// The backing store could not be opened, or a statement failed
    StoreUnavailable,

    /// An applied migration no longer matches its recorded checksum
    ChecksumMismatch,

    /// Filesystem work outside the database
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::StoreUnavailable => "ERR_STORE_UNAVAILABLE",
            ExErrorKind::ChecksumMismatch => "ERR_CHECKSUM_MISMATCH",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus the
/// operation, entity and message context needed for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Shorthand for `kind() == ExErrorKind::NotFound`
    pub fn is_not_found(&self) -> bool {
        self.kind == ExErrorKind::NotFound
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by snippet operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnippetError {
    /// No snippet with this id exists
    #[error("Snippet not found: {id}")]
    NotFound { id: SnippetId },

    /// The store could not be opened or a statement failed
    #[error("Snippet store unavailable: {message}")]
    StoreUnavailable { message: String },
}

impl From<SnippetError> for ExError {
    fn from(err: SnippetError) -> Self {
        match err {
            SnippetError::NotFound { id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(id.to_string())
                .with_message("Snippet not found"),

            SnippetError::StoreUnavailable { message } => {
                ExError::new(ExErrorKind::StoreUnavailable).with_message(message)
            }
        }
    }
}

impl From<std::io::Error> for ExError {
    fn from(err: std::io::Error) -> Self {
        ExError::new(ExErrorKind::Io).with_message(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_op_and_entity() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("get_snippet")
            .with_entity_id("42")
            .with_message("Snippet not found");

        assert_eq!(
            err.to_string(),
            "[ERR_NOT_FOUND] in operation 'get_snippet': Snippet not found (entity_id: 42)"
        );
    }

    #[test]
    fn test_display_without_context() {
        let err = ExError::new(ExErrorKind::Io);
        assert_eq!(err.to_string(), "[ERR_IO]");
    }

    #[test]
    fn test_io_error_converts_to_io_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExError = io.into();
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert!(err.message().contains("denied"));
    }
}
