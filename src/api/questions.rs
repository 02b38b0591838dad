//! The teacher-facing question store.
//!
//! Storage is a single slot holding the whole question sequence; the only
//! operations are read-whole, append (a synchronous read-modify-write), and
//! clear-whole. The store is an injected port so views and tests can swap
//! the file-backed implementation for an in-memory one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use super::error::StorageError;
use super::operations::AnswerQuestionInput;

/// One question a student submitted for a teacher, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredQuestion {
    pub id: String,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_profile: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Port over the persisted question list.
pub trait QuestionStore: Send + Sync {
    /// Loads the full stored sequence in insertion order.
    fn load_all(&self) -> Result<Vec<StoredQuestion>, StorageError>;
    /// Appends one question, assigning its ID from the insertion order.
    fn append(&self, question: &AnswerQuestionInput) -> Result<StoredQuestion, StorageError>;
    /// Clears the whole list. There is no partial removal.
    fn clear(&self) -> Result<(), StorageError>;
}

fn build_question(input: &AnswerQuestionInput, position: usize) -> StoredQuestion {
    StoredQuestion {
        id: format!("q{}", position + 1),
        question: input.question.clone(),
        topic_context: input.topic_context.clone(),
        student_profile: input.student_profile.clone(),
        submitted_at: Utc::now(),
    }
}

/// File-backed store: one JSON array, written whole on every mutation.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl QuestionStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<StoredQuestion>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn append(&self, question: &AnswerQuestionInput) -> Result<StoredQuestion, StorageError> {
        let mut questions = self.load_all()?;
        let stored = build_question(question, questions.len());
        questions.push(stored.clone());
        fs::write(&self.path, serde_json::to_string_pretty(&questions)?)?;
        Ok(stored)
    }

    fn clear(&self) -> Result<(), StorageError> {
        fs::write(&self.path, "[]")?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    questions: Mutex<Vec<StoredQuestion>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuestionStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<StoredQuestion>, StorageError> {
        Ok(self.questions.lock().unwrap().clone())
    }

    fn append(&self, question: &AnswerQuestionInput) -> Result<StoredQuestion, StorageError> {
        let mut questions = self.questions.lock().unwrap();
        let stored = build_question(question, questions.len());
        questions.push(stored.clone());
        Ok(stored)
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.questions.lock().unwrap().clear();
        Ok(())
    }
}

/// What the teacher view renders: questions newest-first, plus a notice when
/// the stored data could not be read.
pub struct QuestionBoard {
    pub questions: Vec<StoredQuestion>,
    pub notice: Option<String>,
}

/// Notice surfaced when the stored list cannot be read.
pub const UNREADABLE_STORE_NOTICE: &str =
    "Stored questions could not be read and were ignored.";

/// Loads the board for the teacher view. Fails soft: a read or parse error
/// becomes an empty list plus a notice, never an error.
pub fn load_board(store: &dyn QuestionStore) -> QuestionBoard {
    match store.load_all() {
        Ok(mut questions) => {
            questions.reverse();
            QuestionBoard {
                questions,
                notice: None,
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to load stored questions");
            QuestionBoard {
                questions: Vec::new(),
                notice: Some(UNREADABLE_STORE_NOTICE.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(question: &str) -> AnswerQuestionInput {
        AnswerQuestionInput {
            question: question.to_string(),
            topic_context: None,
            student_profile: None,
        }
    }

    #[test]
    fn memory_store_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let first = store.append(&input("How do plants make food?")).unwrap();
        let second = store.append(&input("Why is the sky blue today?")).unwrap();
        assert_eq!(first.id, "q1");
        assert_eq!(second.id, "q2");
        assert_eq!(store.load_all().unwrap().len(), 2);
    }

    #[test]
    fn board_renders_newest_first() {
        let store = MemoryStore::new();
        store.append(&input("How do plants make food?")).unwrap();
        store.append(&input("Why is the sky blue today?")).unwrap();
        let board = load_board(&store);
        assert_eq!(board.questions[0].question, "Why is the sky blue today?");
        assert_eq!(board.questions[1].question, "How do plants make food?");
        assert!(board.notice.is_none());
    }

    #[test]
    fn clear_removes_everything() {
        let store = MemoryStore::new();
        store.append(&input("How do plants make food?")).unwrap();
        store.clear().unwrap();
        assert!(store.load_all().unwrap().is_empty());
    }
}
