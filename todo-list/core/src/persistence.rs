//! Persistence seam for the task list.
//!
//! The whole list is written as one JSON array under a single key on every
//! mutation and read back once at startup. There is no partial persistence and
//! no schema version.

use crate::task::Task;
use thiserror::Error;

/// Default key the list is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "tasks";

#[derive(Error, Debug)]
pub enum StoreError {
    /// The blob could not be encoded or decoded as a JSON task array.
    #[error("Invalid task data: {0}")]
    Json(#[from] serde_json::Error),
    /// The backend refused the read or write.
    #[error("Storage backend failed: {0}")]
    Storage(String),
}

/// Backend holding the serialized task list.
///
/// `load` returns an empty list when nothing has been stored yet. Decoding
/// failures are returned as errors; falling back to an empty list is the
/// store's decision, not the backend's.
#[cfg_attr(test, mockall::automock)]
pub trait TaskPersistence {
    fn load(&self) -> Result<Vec<Task>, StoreError>;

    fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError>;
}

/// In-memory backend that keeps the raw JSON blob, exactly as a key-value
/// store would.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryPersistence {
    blob: Option<String>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing raw value, which may or may not be valid JSON.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl TaskPersistence for MemoryPersistence {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        match &self.blob {
            Some(blob) => Ok(serde_json::from_str(blob)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        self.blob = Some(serde_json::to_string(tasks)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;

    #[test]
    fn can_load_empty_list_when_nothing_stored() {
        let persistence = MemoryPersistence::new();

        assert_eq!(persistence.load().unwrap(), Vec::new());
    }

    #[test]
    fn can_save_and_load_tasks() {
        let mut persistence = MemoryPersistence::new();
        let mut done = Task::new(2, "Walk dog", "2024-03-04", Priority::High);
        done.completed = true;
        let tasks = vec![done, Task::new(1, "Buy milk", "", Priority::Low)];

        persistence.save(&tasks).unwrap();

        assert_eq!(persistence.load().unwrap(), tasks);
    }

    #[test]
    fn cannot_load_corrupted_blob() {
        let persistence = MemoryPersistence::with_blob("{not json");

        let result = persistence.load();

        assert!(matches!(result, Err(StoreError::Json(_))));
    }

    #[test]
    fn cannot_load_tasks_with_unknown_priority() {
        let persistence = MemoryPersistence::with_blob(
            r#"[{"id":1,"text":"a","dueDate":"No due date","priority":"urgent","completed":false}]"#,
        );

        assert!(persistence.load().is_err());
    }
}
