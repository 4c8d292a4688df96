//! Window scroll position and section element geometry.

use folio_app::ports::Viewport;
use folio_domain::geometry::SectionBounds;
use folio_domain::section::SectionId;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// The browser window viewport. Sections are found by element id.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomViewport;

fn section_element(section: SectionId) -> Option<web_sys::Element> {
    super::document()?.get_element_by_id(section.as_str())
}

impl Viewport for DomViewport {
    fn scroll_offset(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or_default()
    }

    fn section_bounds(&self, section: SectionId) -> Option<SectionBounds> {
        let rect = section_element(section)?.get_bounding_client_rect();
        Some(SectionBounds::new(rect.top(), rect.bottom()))
    }

    fn section_document_top(&self, section: SectionId) -> Option<f64> {
        let element = section_element(section)?.dyn_into::<HtmlElement>().ok()?;
        Some(f64::from(element.offset_top()))
    }

    fn smooth_scroll_to(&self, top: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
