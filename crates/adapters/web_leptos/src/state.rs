//! Page state shared through Leptos context.

use folio_app::ports::NavigationStore;
use folio_app::services::{ScrollTracker, SectionNavigator, ThemeController};
use folio_domain::config::NavConfig;
use folio_domain::navigation::NavigationState;
use folio_domain::section::SectionId;
use leptos::prelude::*;

use crate::browser::{DocumentRoot, DomViewport, LocalStorage, ScrollListener, WindowScrollEvents};

type BrowserThemeController = ThemeController<LocalStorage, DocumentRoot>;

/// [`NavigationStore`] backed by a reactive signal.
#[derive(Debug, Clone, Copy)]
pub struct SignalStore(RwSignal<NavigationState>);

impl NavigationStore for SignalStore {
    fn get(&self) -> NavigationState {
        self.0.get_untracked()
    }

    fn update<F: FnOnce(&mut NavigationState)>(&self, f: F) {
        self.0.update(f);
    }
}

/// Handles to the navigation state and the services that write it.
///
/// `Copy`, so event handlers can capture it directly.
#[derive(Clone, Copy)]
pub struct PageContext {
    nav: RwSignal<NavigationState>,
    navigator: StoredValue<SectionNavigator<DomViewport>>,
    theme: StoredValue<BrowserThemeController>,
    tracker: StoredValue<ScrollTracker<DomViewport>>,
}

impl PageContext {
    /// Build the services and restore the persisted theme.
    pub fn new(config: &NavConfig) -> Self {
        let theme = ThemeController::new(LocalStorage, DocumentRoot, config);
        let mut initial = NavigationState::default();
        theme.initialize(&mut initial);

        Self {
            nav: RwSignal::new(initial),
            navigator: StoredValue::new(SectionNavigator::new(DomViewport, config)),
            theme: StoredValue::new(theme),
            tracker: StoredValue::new(ScrollTracker::new(DomViewport, config)),
        }
    }

    /// Attach the scroll tracker to the window; the listener is removed when
    /// the returned guard is dropped.
    pub fn track_scroll(&self) -> ScrollListener {
        let tracker = self.tracker.get_value();
        tracker.attach(&WindowScrollEvents, SignalStore(self.nav))
    }

    pub fn navigate(&self, target: SectionId) {
        self.navigator.with_value(|navigator| {
            self.nav.update(|state| navigator.navigate(state, target));
        });
    }

    pub fn toggle_theme(&self) {
        self.theme.with_value(|theme| {
            self.nav.update(|state| {
                theme.toggle(state);
            });
        });
    }

    pub fn toggle_menu(&self) {
        self.nav.update(NavigationState::toggle_menu);
    }

    pub fn dark_mode(&self) -> Memo<bool> {
        let nav = self.nav;
        Memo::new(move |_| nav.with(|state| state.dark_mode))
    }

    pub fn is_scrolled(&self) -> Memo<bool> {
        let nav = self.nav;
        Memo::new(move |_| nav.with(|state| state.is_scrolled))
    }

    pub fn is_menu_open(&self) -> Memo<bool> {
        let nav = self.nav;
        Memo::new(move |_| nav.with(|state| state.is_menu_open))
    }

    pub fn active_section(&self) -> Memo<SectionId> {
        let nav = self.nav;
        Memo::new(move |_| nav.with(|state| state.active_section))
    }
}

/// Access the page context.
///
/// Must be called within the component tree under [`App`](crate::App).
pub fn use_page() -> PageContext {
    use_context::<PageContext>().expect("PageContext not found in context")
}
