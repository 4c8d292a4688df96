//! Viewport port — scroll position, section geometry and smooth scrolling.

use folio_domain::geometry::SectionBounds;
use folio_domain::section::SectionId;

/// Read-mostly view of the rendered page.
///
/// Lookups return `None` when the section's element is not in the document;
/// callers treat that as "not applicable", never as an error.
pub trait Viewport {
    /// Current vertical scroll offset of the page.
    fn scroll_offset(&self) -> f64;

    /// Bounding box of a section relative to the viewport top.
    fn section_bounds(&self, section: SectionId) -> Option<SectionBounds>;

    /// Distance from the document top to the section's top edge.
    fn section_document_top(&self, section: SectionId) -> Option<f64>;

    /// Start an animated (non-instant) scroll to `top`. Fire-and-forget.
    fn smooth_scroll_to(&self, top: f64);
}

impl<T: Viewport + ?Sized> Viewport for &T {
    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn section_bounds(&self, section: SectionId) -> Option<SectionBounds> {
        (**self).section_bounds(section)
    }

    fn section_document_top(&self, section: SectionId) -> Option<f64> {
        (**self).section_document_top(section)
    }

    fn smooth_scroll_to(&self, top: f64) {
        (**self).smooth_scroll_to(top);
    }
}
