//! The `<html>` element's class list.

use folio_app::ports::ThemeRoot;
use folio_domain::theme::DARK_SCOPE_CLASS;

/// Toggles the dark class on `document.documentElement`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl ThemeRoot for DocumentRoot {
    fn set_dark_scope(&self, enabled: bool) {
        let Some(root) = super::document().and_then(|d| d.document_element()) else {
            return;
        };
        let classes = root.class_list();
        let result = if enabled {
            classes.add_1(DARK_SCOPE_CLASS)
        } else {
            classes.remove_1(DARK_SCOPE_CLASS)
        };
        if let Err(err) = result {
            leptos::logging::warn!("failed to update root class list: {err:?}");
        }
    }
}
