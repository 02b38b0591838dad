pub mod api;
pub mod cli;
pub mod commands;
pub mod core;

pub use api::{ActionResult, FieldErrors, GenerationBackend, GenerationError, StorageError};
