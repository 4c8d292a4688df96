//! Viewport geometry and active-section resolution.

use crate::section::SectionId;

/// Vertical extent of a rendered section, relative to the viewport top, in
/// CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether the horizontal line `band` pixels below the viewport top
    /// crosses this section. Both edges are inclusive.
    #[must_use]
    pub fn spans(&self, band: f64) -> bool {
        self.top <= band && self.bottom >= band
    }
}

/// Pick the first section, in document order, whose bounds span `band`.
///
/// `bounds_of` returns `None` for sections that are not rendered; those never
/// match. Returns `None` when no section spans the band.
pub fn section_at_band<F>(band: f64, mut bounds_of: F) -> Option<SectionId>
where
    F: FnMut(SectionId) -> Option<SectionBounds>,
{
    SectionId::ALL
        .into_iter()
        .find(|&id| bounds_of(id).is_some_and(|bounds| bounds.spans(band)))
}
