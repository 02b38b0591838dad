//! Runtime context: application directory and persisted state paths.

use std::env;
use std::path::PathBuf;

use super::utils::ensure_dir;
use crate::api::JsonFileStore;

/// Runtime context holding the application's paths.
pub struct AppCtx {
    pub base_dir: PathBuf,
    pub config_path: PathBuf,
    pub questions_path: PathBuf,
}

impl AppCtx {
    pub fn init() -> Result<Self, String> {
        let home =
            env::var("HOME").map_err(|_| "Unable to determine HOME directory".to_string())?;
        let base_dir = PathBuf::from(home).join(".classmate-ai");
        ensure_dir(&base_dir)?;

        Ok(Self {
            config_path: base_dir.join("config.toml"),
            questions_path: base_dir.join("questions.json"),
            base_dir,
        })
    }

    /// The store holding questions students submitted for a teacher.
    pub fn question_store(&self) -> JsonFileStore {
        JsonFileStore::new(self.questions_path.clone())
    }
}
