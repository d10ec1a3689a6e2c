//! Timestamped motion event sequences.

use shade_foundation::{MotionAction, MotionEvent};
use shade_graphics::Point;

/// Builds a single-pointer gesture in raw screen coordinates.
///
/// ```
/// use shade_testing::GestureBuilder;
///
/// let events = GestureBuilder::down_at(200.0, 700.0)
///     .drag_to(200.0, 220.0, 6)
///     .up();
/// assert_eq!(events.len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct GestureBuilder {
    events: Vec<MotionEvent>,
    position: Point,
    time_ms: i64,
    frame_interval_ms: i64,
}

impl GestureBuilder {
    /// Default spacing between generated events, one 60 Hz frame.
    pub const FRAME_INTERVAL_MS: i64 = 16;

    pub fn down_at(x: f32, y: f32) -> Self {
        Self::down_at_time(x, y, 0)
    }

    pub fn down_at_time(x: f32, y: f32, time_ms: i64) -> Self {
        let position = Point::new(x, y);
        Self {
            events: vec![MotionEvent::at_raw(MotionAction::Down, position, time_ms)],
            position,
            time_ms,
            frame_interval_ms: Self::FRAME_INTERVAL_MS,
        }
    }

    pub fn with_frame_interval(mut self, interval_ms: i64) -> Self {
        self.frame_interval_ms = interval_ms;
        self
    }

    /// A single move, one frame after the previous event.
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.time_ms += self.frame_interval_ms;
        self.position = Point::new(x, y);
        self.events
            .push(MotionEvent::at_raw(MotionAction::Move, self.position, self.time_ms));
        self
    }

    /// `steps` evenly spaced moves ending at `(x, y)`.
    pub fn drag_to(mut self, x: f32, y: f32, steps: usize) -> Self {
        let from = self.position;
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self = self.move_to(from.x + (x - from.x) * t, from.y + (y - from.y) * t);
        }
        self
    }

    /// Keeps the pointer still for `millis` without emitting events.
    pub fn hold(mut self, millis: i64) -> Self {
        self.time_ms += millis;
        self
    }

    pub fn time_ms(&self) -> i64 {
        self.time_ms
    }

    /// Events so far, without a terminal event.
    pub fn build(self) -> Vec<MotionEvent> {
        self.events
    }

    pub fn up(self) -> Vec<MotionEvent> {
        self.finish(MotionAction::Up)
    }

    pub fn cancel(self) -> Vec<MotionEvent> {
        self.finish(MotionAction::Cancel)
    }

    fn finish(mut self, action: MotionAction) -> Vec<MotionEvent> {
        self.time_ms += self.frame_interval_ms;
        self.events
            .push(MotionEvent::at_raw(action, self.position, self.time_ms));
        self.events
    }
}
