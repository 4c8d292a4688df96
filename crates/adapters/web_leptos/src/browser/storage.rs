//! `localStorage` preference store.

use folio_app::ports::PreferenceStore;
use folio_domain::error::FolioError;

use crate::error::BrowserError;

/// Preferences kept in `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn storage() -> Result<web_sys::Storage, BrowserError> {
    web_sys::window()
        .ok_or(BrowserError::NoWindow)?
        .local_storage()
        .map_err(|err| BrowserError::js(&err))?
        .ok_or(BrowserError::StorageUnavailable)
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        let value = storage()?
            .get_item(key)
            .map_err(|err| BrowserError::js(&err))?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        storage()?
            .set_item(key, value)
            .map_err(|err| BrowserError::js(&err))?;
        Ok(())
    }
}
