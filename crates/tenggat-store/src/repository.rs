use tenggat_core::{Task, TaskRecord};
use tracing::{debug, info, warn};

use crate::{KeyValueStore, StoreError};

/// Key under which the task list blob is stored unless configured otherwise.
pub const DEFAULT_KEY: &str = "tasks";

/// Loads and saves the whole task collection as one JSON array.
#[derive(Debug)]
pub struct TaskRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TaskRepository<S> {
    /// Repository over `store` using [`DEFAULT_KEY`].
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_KEY)
    }

    /// Repository over `store` using a custom key.
    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Storage key of the blob.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Read the collection.
    ///
    /// A missing blob, or one that does not parse as a task array, yields an
    /// empty collection. Records stored without an id are given one and the
    /// blob is rewritten at once, so the ids stay the same on the next load.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the store cannot be read, or when the
    /// rewrite of id-less records fails.
    pub fn load(&self) -> Result<Vec<Task>, StoreError> {
        let Some(blob) = self.store.get(&self.key)? else {
            debug!(key = %self.key, "No stored tasks");
            return Ok(Vec::new());
        };
        let records = match serde_json::from_str::<Option<Vec<TaskRecord>>>(&blob) {
            Ok(records) => records.unwrap_or_default(),
            Err(err) => {
                warn!(key = %self.key, error = %err, "Ignoring unparsable task blob");
                return Ok(Vec::new());
            }
        };

        let missing_ids = records.iter().filter(|record| record.id.is_none()).count();
        let tasks: Vec<Task> = records.into_iter().map(TaskRecord::into_task).collect();
        if missing_ids > 0 {
            info!(key = %self.key, missing_ids, "Assigning ids to stored tasks");
            self.save(&tasks)?;
        }
        debug!(key = %self.key, count = tasks.len(), "Loaded tasks");
        Ok(tasks)
    }

    /// Overwrite the blob with the full collection.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when serialization or the write fails.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(tasks)?;
        self.store.set(&self.key, &blob)?;
        info!(key = %self.key, count = tasks.len(), "Saved tasks");
        Ok(())
    }

    /// Drop the stored blob entirely.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the removal fails.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(&self.key)
    }
}
