use shade_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionAction {
    Down,
    Move,
    Up,
    Cancel,
}

impl MotionAction {
    /// Whether this action ends the gesture it belongs to.
    pub fn ends_gesture(&self) -> bool {
        matches!(self, MotionAction::Up | MotionAction::Cancel)
    }
}

/// A single-pointer motion event as delivered by the host surface.
///
/// `position` is local to the view that receives the event, `raw` is in
/// screen coordinates. Gesture decisions that span nested views (the glass
/// pane and the list it covers) compare raw coordinates only, since the local
/// origin differs between the two receivers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionEvent {
    pub action: MotionAction,
    pub position: Point,
    pub raw: Point,
    /// Event time in milliseconds since an arbitrary epoch.
    pub time_ms: i64,
}

impl MotionEvent {
    pub fn new(action: MotionAction, position: Point, raw: Point, time_ms: i64) -> Self {
        Self {
            action,
            position,
            raw,
            time_ms,
        }
    }

    /// Creates an event whose local and raw coordinates coincide.
    pub fn at_raw(action: MotionAction, raw: Point, time_ms: i64) -> Self {
        Self::new(action, raw, raw, time_ms)
    }

    /// Creates a copy of this event with a new local position.
    pub fn with_local_position(&self, position: Point) -> Self {
        Self { position, ..*self }
    }

    pub fn raw_x(&self) -> f32 {
        self.raw.x
    }

    pub fn raw_y(&self) -> f32 {
        self.raw.y
    }
}
