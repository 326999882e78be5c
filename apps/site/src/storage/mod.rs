//! Key-value persistence used by the demo form.

#[cfg(any(test, not(target_arch = "wasm32")))]
use std::cell::RefCell;
#[cfg(any(test, not(target_arch = "wasm32")))]
use std::collections::HashMap;

use thiserror::Error;

/// Latest in-progress demo form values.
pub const DRAFT_KEY: &str = "fundwise_demo_form";
/// Demo requests that could not be delivered.
pub const SUBMISSION_QUEUE_KEY: &str = "fundwise_demo_submissions";

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Error, Debug)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("stored value under `{key}` is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Browser `localStorage`. Disabled or blocked storage surfaces as `Unavailable`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    fn storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| StorageError::Unavailable("localStorage is not accessible".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

/// Process-local store for tests and non-browser targets.
#[cfg(any(test, not(target_arch = "wasm32")))]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(any(test, not(target_arch = "wasm32")))]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(any(test, not(target_arch = "wasm32")))]
impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store the running target can actually use.
#[cfg(target_arch = "wasm32")]
pub fn default_store() -> LocalStore {
    LocalStore
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_store() -> MemoryStore {
    MemoryStore::new()
}
