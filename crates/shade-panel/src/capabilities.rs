use crate::session::TouchTarget;
use shade_foundation::MotionEvent;

/// Receives motion events routed by the host's view tree.
pub trait TouchConsumer {
    /// Returns `true` when the event was consumed and must not reach the
    /// target's own handling.
    fn on_touch(&mut self, target: TouchTarget, event: &MotionEvent) -> bool;
}

/// Receives scroll callbacks from the notification list.
pub trait ScrollObserver {
    /// `can_scroll_down` is whether the list can still scroll toward its
    /// end after applying the delta.
    fn on_scrolled(&mut self, dx: f32, dy: f32, can_scroll_down: bool);
}
