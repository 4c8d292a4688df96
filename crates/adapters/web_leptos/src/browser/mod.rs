//! `web-sys` implementations of the folio ports.
//!
//! Every adapter is a unit struct that looks up `window`/`document` on each
//! call, so they are `Copy + Send + Sync` and can live inside Leptos stored
//! values and event handlers freely.

mod root;
mod scroll;
mod storage;
mod viewport;

pub use root::DocumentRoot;
pub use scroll::{ScrollListener, WindowScrollEvents};
pub use storage::LocalStorage;
pub use viewport::DomViewport;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}
