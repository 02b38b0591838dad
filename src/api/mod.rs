//! Library core: validated form actions over prompt-backed domain operations.

pub mod actions;
pub mod backend;
pub mod envelope;
pub mod error;
pub mod invoker;
pub mod operations;
pub mod prompt;
pub mod questions;
pub mod schema;

pub use actions::FormData;
pub use backend::{GenerationBackend, LlmBackend};
pub use envelope::{ActionResult, FieldErrors};
pub use error::{GenerationError, StorageError};
pub use questions::{JsonFileStore, MemoryStore, QuestionStore, StoredQuestion};
