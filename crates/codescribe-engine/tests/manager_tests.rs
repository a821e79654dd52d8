// Integration tests for the snippet manager façade

use codescribe_core::errors::ExErrorKind;
use codescribe_core::model::SnippetFields;
use codescribe_engine::{initialize_schema, SnippetManager};
use codescribe_store::SnippetRepo;
use tempfile::TempDir;

fn setup_repo() -> SnippetRepo {
    SnippetRepo::open_in_memory().unwrap()
}

fn create_bubble_sort(manager: &SnippetManager<'_>) -> i64 {
    manager
        .create_snippet(
            "Bubble Sort",
            Some("O(n^2) sort".to_string()),
            Some("sorting,algorithms".to_string()),
            "<code>",
            Some("go".to_string()),
        )
        .unwrap()
}

#[test]
fn test_create_and_get_scenario() {
    let repo = setup_repo();
    let manager = SnippetManager::new(&repo);

    let id = create_bubble_sort(&manager);
    assert_eq!(id, 1);

    let snippet = manager.get_snippet_by_id(1).unwrap();
    assert_eq!(
        snippet.fields,
        SnippetFields::new("Bubble Sort", "<code>")
            .with_description("O(n^2) sort")
            .with_tags("sorting,algorithms")
            .with_language("go")
    );

    for keyword in ["sort", "Sort"] {
        let found = manager.search_snippets(keyword).unwrap();
        assert_eq!(found.len(), 1, "keyword {keyword}");
        assert_eq!(found[0].id, 1);
    }
}

#[test]
fn test_get_unknown_propagates_not_found() {
    let repo = setup_repo();
    let manager = SnippetManager::new(&repo);

    let err = manager.get_snippet_by_id(77).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("77"));
}

#[test]
fn test_manager_passes_fields_through_unchanged() {
    let repo = setup_repo();
    let manager = SnippetManager::new(&repo);

    // No trimming, no validation
    let id = manager
        .create_snippet("  padded  ", Some(String::new()), None, "", None)
        .unwrap();

    let snippet = repo.get_by_id(id).unwrap();
    assert_eq!(snippet.fields.title, "  padded  ");
    assert_eq!(snippet.fields.description.as_deref(), Some(""));
    assert_eq!(snippet.fields.tags, None);
}

#[test]
fn test_update_and_get_all() {
    let repo = setup_repo();
    let manager = SnippetManager::new(&repo);
    let id = create_bubble_sort(&manager);
    manager
        .create_snippet("Other", None, None, "x", None)
        .unwrap();

    let matched = manager
        .update_snippet(id, "Insertion Sort", None, Some("sorting".to_string()), "ins()", None)
        .unwrap();
    assert!(matched);

    let all = manager.get_all_snippets().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title(), "Insertion Sort");
    assert_eq!(all[0].fields.description, None);
    assert_eq!(all[1].title(), "Other");
}

#[test]
fn test_update_unknown_id_succeeds_without_change() {
    let repo = setup_repo();
    let manager = SnippetManager::new(&repo);
    create_bubble_sort(&manager);
    let before = manager.get_all_snippets().unwrap();

    let matched = manager
        .update_snippet(42, "Ghost", None, None, "", None)
        .unwrap();

    assert!(!matched);
    assert_eq!(manager.get_all_snippets().unwrap(), before);
}

#[test]
fn test_store_failure_propagates_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("snippets.db");
    let repo = SnippetRepo::open(&db_path).unwrap();
    let manager = SnippetManager::new(&repo);

    // Another writer drops the table out from under the open repo
    rusqlite::Connection::open(&db_path)
        .unwrap()
        .execute_batch("DROP TABLE snippets;")
        .unwrap();

    let direct = repo.get_all().unwrap_err();
    let via_manager = manager.get_all_snippets().unwrap_err();

    assert_eq!(via_manager.kind(), ExErrorKind::StoreUnavailable);
    assert_eq!(via_manager.kind(), direct.kind());
    assert_eq!(via_manager.message(), direct.message());
    assert_eq!(via_manager.op(), direct.op());
}

#[test]
fn test_initialize_schema_reexport() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("engine.db");

    initialize_schema(&db_path).unwrap();
    initialize_schema(&db_path).unwrap();

    let repo = SnippetRepo::open(&db_path).unwrap();
    let manager = SnippetManager::new(&repo);
    assert!(manager.get_all_snippets().unwrap().is_empty());
}
