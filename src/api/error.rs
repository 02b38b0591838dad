//! Error types for the library API.

use llm::error::LLMError;
use thiserror::Error;

/// Errors raised while generating content through the external model.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The underlying LLM backend call failed.
    #[error("LLM backend error: {0}")]
    Backend(#[from] LLMError),

    /// The model replied, but the reply could not be parsed into the
    /// expected output shape.
    #[error("Model response did not match the expected output shape: {0}")]
    MalformedResponse(String),

    /// Input rejected by the invoker's own validation pass. Callers are
    /// expected to validate first, so hitting this indicates a caller bug.
    #[error("Invalid input for prompt '{0}': {1}")]
    Input(String, String),
}

/// Errors related to the locally stored question list.
#[derive(Error, Debug)]
pub enum StorageError {
    /// An underlying file I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored question data could not be parsed.
    #[error("Corrupted question data: {0}")]
    Corrupted(#[from] serde_json::Error),
}
