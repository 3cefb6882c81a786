// QuestionStore behavior of the SQLite implementation

mod common;

use trivia_core::{Category, NewQuestion, QuestionStore};

#[test]
fn test_list_questions_in_id_order() {
    let store = common::seeded_store();

    let ids: Vec<i64> = store
        .list_questions()
        .unwrap()
        .iter()
        .map(|q| q.id)
        .collect();

    assert_eq!(ids, (1..=19).collect::<Vec<i64>>());
}

#[test]
fn test_search_world_finds_two() {
    let store = common::seeded_store();

    let found = store.search_questions("World").unwrap();

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|q| q.category == 6));
}

#[test]
fn test_search_is_case_insensitive() {
    let store = common::seeded_store();
    assert_eq!(store.search_questions("wOrLd").unwrap().len(), 2);
    assert!(store.search_questions("blablabla").unwrap().is_empty());
}

#[test]
fn test_questions_by_category() {
    let store = common::seeded_store();

    let science = store.questions_by_category(1).unwrap();

    assert_eq!(science.len(), 3);
    assert!(science.windows(2).all(|w| w[0].id < w[1].id));
    assert!(store.questions_by_category(1000).unwrap().is_empty());
}

#[test]
fn test_get_category() {
    let store = common::seeded_store();
    assert_eq!(
        store.get_category(6).unwrap(),
        Some(Category::new(6, "Sports"))
    );
    assert_eq!(store.get_category(1000).unwrap(), None);
}

#[test]
fn test_question_with_unknown_category_is_stored() {
    let mut store = common::seeded_store();

    let id = store
        .insert_question(&NewQuestion::new("Orphan?", "Yes", 42, 1))
        .unwrap();

    assert_eq!(store.get_question(id).unwrap().map(|q| q.category), Some(42));
}

#[test]
fn test_delete_missing_reports_false() {
    let mut store = common::seeded_store();
    assert!(!store.delete_question(1000).unwrap());
    assert_eq!(store.count_questions().unwrap(), 19);
}
