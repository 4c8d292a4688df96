//! Browser-specific error type wrapping JavaScript exceptions.

use folio_domain::error::FolioError;
use wasm_bindgen::JsValue;

/// Errors originating from browser APIs.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    /// No `window` object (not running in a browser main thread).
    #[error("window is not available")]
    NoWindow,

    /// `localStorage` is disabled or blocked for this origin.
    #[error("localStorage is unavailable")]
    StorageUnavailable,

    /// A browser API threw.
    #[error("browser API error: {0}")]
    Js(String),
}

impl BrowserError {
    /// Capture a thrown JavaScript value.
    pub fn js(value: &JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<BrowserError> for FolioError {
    fn from(err: BrowserError) -> Self {
        Self::Storage(Box::new(err))
    }
}
