//! # folio-app
//!
//! Application layer — page handlers and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that the browser adapter must implement:
//!   - `Viewport` — scroll offset, section geometry, smooth scrolling
//!   - `ThemeRoot` — dark style scope on the document root
//!   - `PreferenceStore` — durable key/value storage
//!   - `ScrollEvents` — scroll subscription returning a drop guard
//!   - `NavigationStore` — owner of the shared navigation state
//! - Define the **handlers** as service structs:
//!   - `ScrollTracker` — navbar chrome and active section on scroll
//!   - `SectionNavigator` — smooth jumps between sections
//!   - `ThemeController` — restore, toggle and persist the theme
//!
//! ## Dependency rule
//! Depends on `folio-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
