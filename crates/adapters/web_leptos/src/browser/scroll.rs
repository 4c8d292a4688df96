//! Window `scroll` event subscription.

use folio_app::ports::ScrollEvents;
use wasm_bindgen::prelude::*;
use web_sys::Window;

const SCROLL_EVENT: &str = "scroll";

/// Source of the window's scroll events.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScrollEvents;

/// Guard that removes the scroll listener on drop.
///
/// Inert when there was no window to attach to.
pub struct ScrollListener {
    window: Option<Window>,
    callback: Closure<dyn FnMut()>,
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(window) = &self.window {
            if let Err(err) = window
                .remove_event_listener_with_callback(SCROLL_EVENT, self.callback.as_ref().unchecked_ref())
            {
                leptos::logging::warn!("failed to remove scroll listener: {err:?}");
            }
        }
    }
}

impl ScrollEvents for WindowScrollEvents {
    type Subscription = ScrollListener;

    fn subscribe(&self, on_scroll: Box<dyn FnMut()>) -> ScrollListener {
        let callback = Closure::wrap(on_scroll);

        let window = web_sys::window().filter(|window| {
            match window
                .add_event_listener_with_callback(SCROLL_EVENT, callback.as_ref().unchecked_ref())
            {
                Ok(()) => true,
                Err(err) => {
                    leptos::logging::warn!("failed to add scroll listener: {err:?}");
                    false
                }
            }
        });

        ScrollListener { window, callback }
    }
}
