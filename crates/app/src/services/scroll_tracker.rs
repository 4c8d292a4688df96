//! Scroll tracker — derives navbar chrome and the active section from layout.

use folio_domain::config::NavConfig;
use folio_domain::geometry;
use folio_domain::navigation::NavigationState;

use crate::ports::{NavigationStore, ScrollEvents, Viewport};

/// Recomputes `is_scrolled` and `active_section` on every scroll event.
#[derive(Debug, Clone)]
pub struct ScrollTracker<V> {
    viewport: V,
    scrolled_threshold: f64,
    active_band: f64,
}

impl<V: Viewport> ScrollTracker<V> {
    /// Create a tracker reading geometry from `viewport`.
    pub fn new(viewport: V, config: &NavConfig) -> Self {
        Self {
            viewport,
            scrolled_threshold: config.scrolled_threshold,
            active_band: config.active_band,
        }
    }

    /// Handle one scroll event.
    ///
    /// The active section is only replaced when some section spans the band;
    /// otherwise the previous one is kept.
    pub fn on_scroll(&self, state: &mut NavigationState) {
        state.is_scrolled = self.viewport.scroll_offset() > self.scrolled_threshold;

        let found = geometry::section_at_band(self.active_band, |id| {
            self.viewport.section_bounds(id)
        });
        if let Some(section) = found.filter(|&section| section != state.active_section) {
            tracing::debug!(from = %state.active_section, to = %section, "active section changed");
            state.active_section = section;
        }
    }

    /// Subscribe to `events`, applying [`on_scroll`](Self::on_scroll) to
    /// `store` for each event.
    ///
    /// The returned guard keeps the listener attached; drop it to detach.
    pub fn attach<E, S>(self, events: &E, store: S) -> E::Subscription
    where
        V: 'static,
        E: ScrollEvents,
        S: NavigationStore + 'static,
    {
        events.subscribe(Box::new(move || {
            store.update(|state| self.on_scroll(state));
        }))
    }
}
