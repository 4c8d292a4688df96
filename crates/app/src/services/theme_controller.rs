//! Theme controller — dark/light preference, applied to the document root and
//! persisted across visits.

use folio_domain::config::NavConfig;
use folio_domain::navigation::NavigationState;
use folio_domain::theme::Theme;

use crate::ports::{PreferenceStore, ThemeRoot};

/// Owns the persisted theme preference.
///
/// Built once when the page mounts and shared with whatever needs to toggle
/// the theme. Storage failures never reach the caller: the session keeps the
/// chosen theme even when it cannot be persisted.
#[derive(Debug, Clone)]
pub struct ThemeController<S, R> {
    store: S,
    root: R,
    storage_key: String,
}

impl<S: PreferenceStore, R: ThemeRoot> ThemeController<S, R> {
    /// Create a controller persisting under the configured storage key.
    pub fn new(store: S, root: R, config: &NavConfig) -> Self {
        Self {
            store,
            root,
            storage_key: config.theme_storage_key.clone(),
        }
    }

    /// Restore the persisted preference. Call once per page load.
    ///
    /// Only a stored `"dark"` changes anything; otherwise the state stays
    /// light and the root is left untouched.
    #[tracing::instrument(skip(self, state), fields(key = %self.storage_key))]
    pub fn initialize(&self, state: &mut NavigationState) -> Theme {
        let stored = match self.store.get(&self.storage_key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, "failed to read theme preference, using light");
                None
            }
        };

        let theme = Theme::from_stored(stored.as_deref());
        if theme.is_dark() {
            state.dark_mode = true;
            self.root.set_dark_scope(true);
        }
        tracing::debug!(%theme, "theme restored");
        theme
    }

    /// Flip the theme, apply it to the root and persist it.
    #[tracing::instrument(skip(self, state), fields(key = %self.storage_key))]
    pub fn toggle(&self, state: &mut NavigationState) -> Theme {
        let theme = state.theme().toggled();
        state.dark_mode = theme.is_dark();
        self.root.set_dark_scope(theme.is_dark());

        if let Err(err) = self.store.set(&self.storage_key, theme.as_str()) {
            tracing::warn!(%err, %theme, "failed to persist theme preference");
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::error::FolioError;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Debug)]
    struct Unavailable;

    impl std::fmt::Display for Unavailable {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("storage disabled")
        }
    }

    impl std::error::Error for Unavailable {}

    #[derive(Default)]
    struct InMemoryStore {
        items: RefCell<HashMap<String, String>>,
        broken: Cell<bool>,
    }

    impl InMemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }

        fn broken() -> Self {
            let store = Self::default();
            store.broken.set(true);
            store
        }

        fn value(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }
    }

    impl PreferenceStore for InMemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
            if self.broken.get() {
                return Err(FolioError::Storage(Box::new(Unavailable)));
            }
            Ok(self.value(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
            if self.broken.get() {
                return Err(FolioError::Storage(Box::new(Unavailable)));
            }
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeRoot {
        dark: Cell<bool>,
        calls: Cell<usize>,
    }

    impl ThemeRoot for FakeRoot {
        fn set_dark_scope(&self, enabled: bool) {
            self.dark.set(enabled);
            self.calls.set(self.calls.get() + 1);
        }
    }

    const KEY: &str = "theme";

    fn controller<'a>(
        store: &'a InMemoryStore,
        root: &'a FakeRoot,
    ) -> ThemeController<&'a InMemoryStore, &'a FakeRoot> {
        ThemeController::new(store, root, &NavConfig::default())
    }

    #[test]
    fn should_restore_dark_when_stored_value_is_dark() {
        let store = InMemoryStore::with(KEY, "dark");
        let root = FakeRoot::default();
        let mut state = NavigationState::default();

        let theme = controller(&store, &root).initialize(&mut state);

        assert_eq!(theme, Theme::Dark);
        assert!(state.dark_mode);
        assert!(root.dark.get());
    }

    #[test]
    fn should_stay_light_without_touching_root_when_value_is_not_dark() {
        for stored in [Some("light"), Some("Dark"), Some("1"), None] {
            let store = stored.map_or_else(InMemoryStore::default, |v| InMemoryStore::with(KEY, v));
            let root = FakeRoot::default();
            let mut state = NavigationState::default();

            let theme = controller(&store, &root).initialize(&mut state);

            assert_eq!(theme, Theme::Light, "stored {stored:?}");
            assert!(!state.dark_mode);
            assert_eq!(root.calls.get(), 0);
        }
    }

    #[test]
    fn should_stay_light_when_storage_read_fails() {
        let store = InMemoryStore::broken();
        let root = FakeRoot::default();
        let mut state = NavigationState::default();

        let theme = controller(&store, &root).initialize(&mut state);

        assert_eq!(theme, Theme::Light);
        assert!(!state.dark_mode);
    }

    #[test]
    fn should_apply_and_persist_dark_when_toggled_from_light() {
        let store = InMemoryStore::default();
        let root = FakeRoot::default();
        let mut state = NavigationState::default();

        let theme = controller(&store, &root).toggle(&mut state);

        assert_eq!(theme, Theme::Dark);
        assert!(state.dark_mode);
        assert!(root.dark.get());
        assert_eq!(store.value(KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn should_remove_scope_and_persist_light_when_toggled_from_dark() {
        let store = InMemoryStore::with(KEY, "dark");
        let root = FakeRoot::default();
        let ctrl = controller(&store, &root);
        let mut state = NavigationState::default();
        ctrl.initialize(&mut state);

        ctrl.toggle(&mut state);

        assert!(!state.dark_mode);
        assert!(!root.dark.get());
        assert_eq!(store.value(KEY).as_deref(), Some("light"));
    }

    #[test]
    fn should_restore_original_state_when_toggled_twice() {
        for initial in ["dark", "light"] {
            let store = InMemoryStore::with(KEY, initial);
            let root = FakeRoot::default();
            let ctrl = controller(&store, &root);
            let mut state = NavigationState::default();
            ctrl.initialize(&mut state);
            let before = state.dark_mode;

            ctrl.toggle(&mut state);
            ctrl.toggle(&mut state);

            assert_eq!(state.dark_mode, before);
            assert_eq!(store.value(KEY).as_deref(), Some(initial));
        }
    }

    #[test]
    fn should_keep_session_theme_when_storage_write_fails() {
        let store = InMemoryStore::broken();
        let root = FakeRoot::default();
        let mut state = NavigationState::default();

        let theme = controller(&store, &root).toggle(&mut state);

        assert_eq!(theme, Theme::Dark);
        assert!(state.dark_mode);
        assert!(root.dark.get());
    }

    #[test]
    fn should_restore_dark_after_reload() {
        let store = InMemoryStore::default();
        let mut state = NavigationState::default();

        let first_root = FakeRoot::default();
        let first = controller(&store, &first_root);
        assert_eq!(first.initialize(&mut state), Theme::Light);
        first.toggle(&mut state);
        assert_eq!(store.value(KEY).as_deref(), Some("dark"));

        let mut reloaded = NavigationState::default();
        let second_root = FakeRoot::default();
        let theme = controller(&store, &second_root).initialize(&mut reloaded);

        assert_eq!(theme, Theme::Dark);
        assert!(reloaded.dark_mode);
        assert!(second_root.dark.get());
    }

    #[test]
    fn should_persist_under_configured_key() {
        let store = InMemoryStore::default();
        let root = FakeRoot::default();
        let config = NavConfig {
            theme_storage_key: "folio-theme".to_string(),
            ..NavConfig::default()
        };
        let mut state = NavigationState::default();

        ThemeController::new(&store, &root, &config).toggle(&mut state);

        assert_eq!(store.value("folio-theme").as_deref(), Some("dark"));
        assert_eq!(store.value(KEY), None);
    }
}
