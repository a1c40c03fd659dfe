//! JSON values on top of a raw key/value backend

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::kv::KeyValueStore;
use super::{Result, StorageError};

/// Typed JSON access to a [`KeyValueStore`].
pub struct JsonStore<S> {
    backend: S,
}

impl<S: KeyValueStore> JsonStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read and parse `key`, reporting every failure.
    ///
    /// An empty payload counts as absent.
    pub fn try_read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let raw = match self.backend.get(key)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(None),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Read `key`, returning `fallback` if storage is unavailable, the key is
    /// absent or the payload does not parse. Parse failures are logged.
    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.try_read(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(StorageError::Unavailable) => {
                log::debug!("Storage unavailable, using fallback for {}", key);
                fallback
            }
            Err(StorageError::Json(e)) => {
                log::error!("Failed to parse storage item {}: {}", key, e);
                fallback
            }
            Err(e) => {
                log::error!("Failed to read storage item {}: {}", key, e);
                fallback
            }
        }
    }

    pub fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.read(key, T::default())
    }

    /// Serialize and store `value` under `key`.
    ///
    /// Failures are logged and returned; the previously stored value is left
    /// unchanged. Nothing is retried.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let result = serde_json::to_string(value)
            .map_err(StorageError::from)
            .and_then(|raw| self.backend.set(key, &raw));

        match &result {
            Ok(()) => {}
            Err(StorageError::Unavailable) => {
                log::debug!("Storage unavailable, dropped write of {}", key);
            }
            Err(e) => log::error!("Failed to write storage item {}: {}", key, e),
        }
        result
    }

    /// Read-modify-write of a single key.
    ///
    /// The updated value is returned even if persisting it failed.
    pub fn update<T, F>(&self, key: &str, fallback: T, f: F) -> Persisted<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut T),
    {
        let mut value = self.read(key, fallback);
        f(&mut value);
        let write = self.write(key, &value);
        Persisted::new(value, write)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let result = self.backend.remove(key);
        if let Err(e) = &result {
            log::error!("Failed to remove storage item {}: {}", key, e);
        }
        result
    }
}

/// The in-memory result of a mutation together with the outcome of its write.
///
/// Callers that follow the default policy just take [`Persisted::into_value`]
/// and carry on; the failure has already been logged. Callers that want to
/// surface it use [`Persisted::into_result`].
#[derive(Debug)]
pub struct Persisted<T> {
    pub value: T,
    pub write: Result<()>,
}

impl<T> Persisted<T> {
    pub fn new(value: T, write: Result<()>) -> Self {
        Self { value, write }
    }

    /// A value that needed no write
    pub fn unchanged(value: T) -> Self {
        Self::new(value, Ok(()))
    }

    pub fn is_saved(&self) -> bool {
        self.write.is_ok()
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_result(self) -> Result<T> {
        self.write.map(|()| self.value)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Persisted<U> {
        Persisted::new(f(self.value), self.write)
    }

    /// Fold in the outcome of a follow-up write; the first failure wins
    pub fn then_write(self, write: Result<()>) -> Self {
        let write = self.write.and(write);
        Self::new(self.value, write)
    }
}
