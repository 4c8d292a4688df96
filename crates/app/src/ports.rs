//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the page logic and the browser. They are
//! defined here (in `app`) so that both the services and the adapter layer can
//! depend on them without creating circular dependencies.

pub mod navigation_store;
pub mod preference_store;
pub mod scroll_events;
pub mod theme_root;
pub mod viewport;

pub use navigation_store::NavigationStore;
pub use preference_store::PreferenceStore;
pub use scroll_events::ScrollEvents;
pub use theme_root::ThemeRoot;
pub use viewport::Viewport;
