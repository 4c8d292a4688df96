//! Preference store port — durable client-side key/value storage.

use folio_domain::error::FolioError;

/// String key/value storage that survives page reloads.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Storage`] when the backing store is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>, FolioError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Storage`] when the store is unavailable or full.
    fn set(&self, key: &str, value: &str) -> Result<(), FolioError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        (**self).set(key, value)
    }
}
