//! Local key-value storage for tenggat.
//!
//! The task list lives as one JSON blob under a fixed key. [`FileStore`] keeps
//! each key in its own file; [`MemoryStore`] keeps everything in process.

pub mod error;
mod file;
mod memory;
mod repository;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::{DEFAULT_KEY, TaskRepository};

/// Minimal string-blob storage: get/set/remove by key.
pub trait KeyValueStore {
    /// Read the blob stored at `key`, or `None` when absent.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the blob at `key`.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the write does not complete. A failed
    /// write leaves the previous blob in place.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the blob at `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the backing medium rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Check that `key` is non-empty and only uses `[A-Za-z0-9_-]`.
///
/// # Errors
/// Returns [`StoreError::InvalidKey`] otherwise.
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_owned()))
    }
}
