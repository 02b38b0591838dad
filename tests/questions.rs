//! Tests of the file-backed question store and the teacher view load.

use std::fs;

use classmate_ai::api::operations::AnswerQuestionInput;
use classmate_ai::api::questions::{load_board, UNREADABLE_STORE_NOTICE};
use classmate_ai::api::{JsonFileStore, QuestionStore};

fn input(question: &str) -> AnswerQuestionInput {
    AnswerQuestionInput {
        question: question.to_string(),
        topic_context: None,
        student_profile: None,
    }
}

#[test]
fn appended_questions_survive_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");

    let store = JsonFileStore::new(path.clone());
    store.append(&input("How do plants make food?")).unwrap();
    store.append(&input("Why is the sky blue today?")).unwrap();

    let reopened = JsonFileStore::new(path);
    let questions = reopened.load_all().unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].id, "q1");
    assert_eq!(questions[1].id, "q2");
    assert_eq!(questions[0].question, "How do plants make food?");
}

#[test]
fn missing_file_loads_as_an_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("questions.json"));
    assert!(store.load_all().unwrap().is_empty());

    let board = load_board(&store);
    assert!(board.questions.is_empty());
    assert!(board.notice.is_none());
}

#[test]
fn board_lists_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("questions.json"));
    store.append(&input("How do plants make food?")).unwrap();
    store.append(&input("Why is the sky blue today?")).unwrap();

    let board = load_board(&store);
    assert_eq!(board.questions[0].question, "Why is the sky blue today?");
    assert_eq!(board.questions[1].question, "How do plants make food?");
}

#[test]
fn corrupted_data_fails_soft_with_a_notice() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");
    fs::write(&path, "this is not json").unwrap();

    let store = JsonFileStore::new(path);
    let board = load_board(&store);
    assert!(board.questions.is_empty());
    assert_eq!(board.notice.as_deref(), Some(UNREADABLE_STORE_NOTICE));
}

#[test]
fn clear_empties_the_whole_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");

    let store = JsonFileStore::new(path.clone());
    store.append(&input("How do plants make food?")).unwrap();
    store.clear().unwrap();

    assert!(store.load_all().unwrap().is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn clearing_a_missing_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("questions.json"));
    store.clear().unwrap();
    assert!(store.load_all().unwrap().is_empty());
}
