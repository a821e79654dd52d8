use codescribe_core::errors::{ExError, ExErrorKind, SnippetError};

#[test]
fn test_not_found_verifiable_by_kind() {
    let err = SnippetError::NotFound { id: 404 };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.entity_id(), Some("404"));
    assert!(ex_err.is_not_found());
}

#[test]
fn test_store_unavailable_distinct_from_not_found() {
    let err = SnippetError::StoreUnavailable {
        message: "unable to open database file".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::StoreUnavailable);
    assert_eq!(ex_err.code(), "ERR_STORE_UNAVAILABLE");
    assert_ne!(ex_err.kind(), ExErrorKind::NotFound);
    assert!(!ex_err.is_not_found());
    assert!(ex_err.message().contains("unable to open"));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::StoreUnavailable, "ERR_STORE_UNAVAILABLE"),
        (ExErrorKind::ChecksumMismatch, "ERR_CHECKSUM_MISMATCH"),
        (ExErrorKind::Io, "ERR_IO"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_snippet_error_display() {
    let err = SnippetError::NotFound { id: 3 };
    assert_eq!(err.to_string(), "Snippet not found: 3");
}

#[test]
fn test_ex_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}

    let ex_err: ExError = SnippetError::StoreUnavailable {
        message: "boom".to_string(),
    }
    .into();
    assert_error(&ex_err);

    let boxed: Box<dyn std::error::Error> = Box::new(ex_err);
    assert!(boxed.to_string().contains("ERR_STORE_UNAVAILABLE"));
}
