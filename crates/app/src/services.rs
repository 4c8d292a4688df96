//! Application services — the page's event handlers.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection) and operates on a borrowed
//! [`NavigationState`](folio_domain::navigation::NavigationState), keeping this
//! layer decoupled from the browser.

pub mod scroll_tracker;
pub mod section_navigator;
pub mod theme_controller;

pub use scroll_tracker::ScrollTracker;
pub use section_navigator::SectionNavigator;
pub use theme_controller::ThemeController;
