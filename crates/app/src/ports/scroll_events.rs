//! Scroll events port — subscription to the page's scroll notifications.

/// Source of scroll notifications.
///
/// Subscribing hands back a guard; the listener stays attached exactly as
/// long as the guard is alive and is removed when it is dropped.
pub trait ScrollEvents {
    /// Guard that detaches the listener on drop.
    type Subscription;

    /// Attach `on_scroll`, called synchronously once per scroll event.
    fn subscribe(&self, on_scroll: Box<dyn FnMut()>) -> Self::Subscription;
}
