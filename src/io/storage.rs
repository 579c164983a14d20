use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::model::Task;

const TASKS_FILE: &str = "tasks.json";

/// Error type for the JSON file backend. Internal only: the `TaskStorage`
/// contract absorbs read errors into the empty fallback and write errors
/// into a log line.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Injectable persistence boundary for the task collection.
pub trait TaskStorage {
    /// Load the saved collection. Absent or unparseable data yields an empty
    /// list; a fresh install and a corrupt file are indistinguishable to the
    /// caller.
    fn load(&self) -> Vec<Task>;

    /// Best-effort write of the full collection. Failures must never
    /// interrupt the caller.
    fn save(&self, tasks: &[Task]);
}

/// File-backed storage: the whole collection as one JSON array in
/// `tasks.json` under the data directory.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(data_dir: &Path) -> Self {
        JsonStorage {
            path: data_dir.join(TASKS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<Task>, StorageError> {
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn write(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let dir = self.path.parent().unwrap_or(Path::new("."));
        fs::create_dir_all(dir)?;
        let json = serde_json::to_vec_pretty(tasks)?;
        // Write to a temp file in the same directory, then rename into
        // place, so a crash mid-write never leaves a truncated file.
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&json)?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl TaskStorage for JsonStorage {
    fn load(&self) -> Vec<Task> {
        match self.read() {
            Ok(tasks) => tasks,
            Err(StorageError::Io(_)) => Vec::new(),
            Err(StorageError::Json(e)) => {
                debug!("discarding unparseable task data: {e}");
                Vec::new()
            }
        }
    }

    fn save(&self, tasks: &[Task]) {
        if let Err(e) = self.write(tasks) {
            warn!("could not save tasks to {}: {e}", self.path.display());
        }
    }
}

/// Default location for the task data file: the platform data directory
/// plus `taskpad`.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskpad")
}
