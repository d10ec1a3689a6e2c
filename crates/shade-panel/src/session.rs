//! Per-gesture and per-panel records shared by the decision functions.

use shade_graphics::Point;

/// Which view a motion event was delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchTarget {
    /// Invisible overlay that observes gesture origins before the list.
    GlassPane,
    NotificationList,
    HandleBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArbiterState {
    Idle,
    /// The gesture started with the list at its bottom edge; a vertical
    /// drag may close the panel.
    Armed,
    /// A drag is moving the panel.
    Tracking,
}

/// How a finished gesture resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The panel animates closed.
    FlingClose,
    /// The panel animates back to fully open.
    FlingOpen,
    /// The list or a notification card owned the gesture.
    HandledByChild,
    /// The panel was eligible but nothing moved it.
    NoMotion,
    Cancelled,
}

/// State of one down-to-up/cancel cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureSession {
    /// Raw position of the down event.
    pub start: Point,
    /// Upward travel of the finger since the down, in px.
    pub displacement: f32,
    pub is_tracking: bool,
    pub is_horizontal_card_swipe: bool,
    /// Set once both scroll flags agree the panel may close; survives the
    /// card-swipe reset of `ScrollState::at_bottom_at_touch_start`.
    pub is_vertical_close_candidate: bool,
    active: bool,
    list_engaged: bool,
}

impl GestureSession {
    pub fn begin(&mut self, raw: Point) {
        *self = Self {
            start: raw,
            active: true,
            ..Self::default()
        };
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the list has received events for this gesture.
    pub fn is_list_engaged(&self) -> bool {
        self.list_engaged
    }

    pub(crate) fn engage_list(&mut self) {
        self.list_engaged = true;
    }

    pub fn end(&mut self) {
        *self = Self::default();
    }
}

/// Scroll position of the notification list, as last reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// The list cannot scroll further down.
    pub at_bottom: bool,
    /// Snapshot of `at_bottom` taken at the glass pane down event.
    pub at_bottom_at_touch_start: bool,
}
