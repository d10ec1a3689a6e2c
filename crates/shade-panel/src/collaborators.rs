//! Outbound seams of the panel.
//!
//! The panel never renders, scrolls or talks to system services itself. It
//! drives these traits, which the host implements on top of its view tree.

use crate::error::ServiceError;
use shade_graphics::Rect;

/// Rendering side of the panel.
pub trait PanelSurface {
    /// Clips the panel to `bounds`; the visible part is anchored at the top.
    fn set_clip_bounds(&mut self, bounds: Rect);

    /// Background alpha in `0.0..=1.0`.
    fn set_background_alpha(&mut self, alpha: f32);

    /// Vertical offset of the handle bar so it rides the panel's bottom edge.
    fn set_handle_bar_translation(&mut self, translation_y: f32);

    fn set_visible(&mut self, visible: bool);
}

/// The scrollable notification list inside the panel.
pub trait NotificationList {
    fn on_visibility_changed(&mut self, visible: bool);

    fn scroll_to_top(&mut self);

    /// Marks the currently visible notifications as seen, which refreshes
    /// the unseen count reported to the host.
    fn mark_visible_as_seen(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBarState {
    Shade,
    Keyguard,
}

/// System status bar service.
pub trait StatusBarService {
    fn state(&self) -> StatusBarState;

    /// Clears buzz, beep and blink effects of posted notifications. Best
    /// effort: the panel logs and drops any error.
    fn clear_notification_effects(&mut self) -> Result<(), ServiceError>;
}

/// Command routing; decides whether panels may be expanded at all.
pub trait CommandRouter {
    fn panels_enabled(&self) -> bool;
}

pub struct PanelCollaborators {
    pub surface: Box<dyn PanelSurface>,
    pub list: Box<dyn NotificationList>,
    pub status_bar: Box<dyn StatusBarService>,
    pub commands: Box<dyn CommandRouter>,
}
