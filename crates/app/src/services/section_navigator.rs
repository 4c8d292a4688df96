//! Section navigator — click-driven jumps between page sections.

use folio_domain::config::NavConfig;
use folio_domain::navigation::NavigationState;
use folio_domain::section::SectionId;

use crate::ports::Viewport;

/// Scrolls to a section and mirrors it into the navigation state.
#[derive(Debug, Clone)]
pub struct SectionNavigator<V> {
    viewport: V,
    nav_offset: f64,
}

impl<V: Viewport> SectionNavigator<V> {
    /// Create a navigator driving `viewport`.
    pub fn new(viewport: V, config: &NavConfig) -> Self {
        Self {
            viewport,
            nav_offset: config.nav_offset,
        }
    }

    /// Jump to `target`.
    ///
    /// Scrolls smoothly so the section's top sits `nav_offset` below the
    /// viewport top, if the section is rendered. The menu is closed and
    /// `target` becomes the active section in every case, so the highlight
    /// follows the click without waiting for the next scroll event.
    #[tracing::instrument(skip(self, state))]
    pub fn navigate(&self, state: &mut NavigationState, target: SectionId) {
        match self.viewport.section_document_top(target) {
            Some(top) => self.viewport.smooth_scroll_to(top - self.nav_offset),
            None => tracing::debug!("section element not found, not scrolling"),
        }
        state.close_menu();
        state.active_section = target;
    }
}
