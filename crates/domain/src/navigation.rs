//! Navigation state — the single record shared by every page handler.
//!
//! Field writers:
//! - `active_section`: scroll tracker and section navigator
//! - `is_menu_open`: the menu button, and the section navigator (close only)
//! - `is_scrolled`: scroll tracker
//! - `dark_mode`: theme controller

use serde::{Deserialize, Serialize};

use crate::section::SectionId;
use crate::theme::Theme;

/// In-memory UI state of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    pub active_section: SectionId,
    pub is_menu_open: bool,
    pub is_scrolled: bool,
    pub dark_mode: bool,
}

impl NavigationState {
    /// Flip the mobile menu between open and closed.
    pub fn toggle_menu(&mut self) {
        self.is_menu_open = !self.is_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.is_menu_open = false;
    }

    /// Whether `section` is the highlighted navigation entry.
    #[must_use]
    pub fn is_active(&self, section: SectionId) -> bool {
        self.active_section == section
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.dark_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_on_home_with_menu_closed_and_light_theme() {
        let state = NavigationState::default();
        assert_eq!(state.active_section, SectionId::Home);
        assert!(!state.is_menu_open);
        assert!(!state.is_scrolled);
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn should_open_then_close_menu_when_toggled_twice() {
        let mut state = NavigationState::default();
        state.toggle_menu();
        assert!(state.is_menu_open);
        state.toggle_menu();
        assert!(!state.is_menu_open);
    }

    #[test]
    fn should_keep_menu_closed_when_closed_twice() {
        let mut state = NavigationState {
            is_menu_open: true,
            ..NavigationState::default()
        };
        state.close_menu();
        state.close_menu();
        assert!(!state.is_menu_open);
    }

    #[test]
    fn should_report_only_current_section_as_active() {
        let state = NavigationState {
            active_section: SectionId::Skills,
            ..NavigationState::default()
        };
        assert!(state.is_active(SectionId::Skills));
        assert!(!state.is_active(SectionId::Home));
    }
}
