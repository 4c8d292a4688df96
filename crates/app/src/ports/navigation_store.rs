//! Navigation store port — owner of the shared [`NavigationState`] record.

use std::cell::RefCell;
use std::rc::Rc;

use folio_domain::navigation::NavigationState;

/// Holder of the page's single navigation state record.
///
/// Handlers never keep the state themselves; they borrow it mutably for the
/// duration of one event through [`update`](Self::update).
pub trait NavigationStore {
    /// Snapshot of the current state.
    fn get(&self) -> NavigationState;

    /// Mutate the state in place.
    fn update<F: FnOnce(&mut NavigationState)>(&self, f: F);
}

impl NavigationStore for RefCell<NavigationState> {
    fn get(&self) -> NavigationState {
        *self.borrow()
    }

    fn update<F: FnOnce(&mut NavigationState)>(&self, f: F) {
        f(&mut self.borrow_mut());
    }
}

impl<T: NavigationStore + ?Sized> NavigationStore for Rc<T> {
    fn get(&self) -> NavigationState {
        (**self).get()
    }

    fn update<F: FnOnce(&mut NavigationState)>(&self, f: F) {
        (**self).update(f);
    }
}
