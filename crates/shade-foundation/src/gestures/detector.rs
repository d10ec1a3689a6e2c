//! Scroll/fling gesture recogniser.
//!
//! Turns a down/move*/up sequence into `on_scroll` callbacks once the
//! pointer leaves the touch slop, and into a single `on_fling` callback when
//! a scroll is released fast enough. The return value of `on_touch_event`
//! is whatever the listener answered for the callback that event produced,
//! or `false` when no callback fired.

use crate::gesture_constants::{MAX_FLING_VELOCITY, MIN_FLING_VELOCITY, TOUCH_SLOP};
use crate::input::{MotionAction, MotionEvent};
use crate::velocity_tracker::VelocityTracker;
use shade_graphics::Point;

pub trait GestureListener {
    fn on_down(&mut self, _event: &MotionEvent) -> bool {
        false
    }

    /// `distance_x`/`distance_y` are measured from the previous callback to
    /// `current`, positive when the pointer moved left/up.
    fn on_scroll(
        &mut self,
        _first: &MotionEvent,
        _current: &MotionEvent,
        _distance_x: f32,
        _distance_y: f32,
    ) -> bool {
        false
    }

    /// Velocities in px/sec, positive when moving right/down.
    fn on_fling(
        &mut self,
        _first: &MotionEvent,
        _current: &MotionEvent,
        _velocity_x: f32,
        _velocity_y: f32,
    ) -> bool {
        false
    }
}

#[derive(Debug, Clone)]
pub struct CloseGestureDetector {
    touch_slop: f32,
    min_fling_velocity: f32,
    max_fling_velocity: f32,
    first: Option<MotionEvent>,
    last_raw: Point,
    is_scrolling: bool,
    velocity: VelocityTracker,
}

impl Default for CloseGestureDetector {
    fn default() -> Self {
        Self::new(TOUCH_SLOP)
    }
}

impl CloseGestureDetector {
    pub fn new(touch_slop: f32) -> Self {
        Self {
            touch_slop,
            min_fling_velocity: MIN_FLING_VELOCITY,
            max_fling_velocity: MAX_FLING_VELOCITY,
            first: None,
            last_raw: Point::ZERO,
            is_scrolling: false,
            velocity: VelocityTracker::new(),
        }
    }

    /// The down event of the gesture in progress, if any.
    pub fn origin(&self) -> Option<&MotionEvent> {
        self.first.as_ref()
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn on_touch_event<L>(&mut self, event: &MotionEvent, listener: &mut L) -> bool
    where
        L: GestureListener + ?Sized,
    {
        match event.action {
            MotionAction::Down => {
                self.velocity.reset();
                self.velocity.add_movement(event);
                self.first = Some(*event);
                self.last_raw = event.raw;
                self.is_scrolling = false;
                listener.on_down(event)
            }
            MotionAction::Move => {
                let Some(first) = self.first else {
                    return false;
                };
                self.velocity.add_movement(event);
                if !self.is_scrolling {
                    let dx = event.raw.x - first.raw.x;
                    let dy = event.raw.y - first.raw.y;
                    if dx * dx + dy * dy <= self.touch_slop * self.touch_slop {
                        return false;
                    }
                    log::trace!("touch slop exceeded at {:?}; scrolling", event.raw);
                    self.is_scrolling = true;
                }
                let distance_x = self.last_raw.x - event.raw.x;
                let distance_y = self.last_raw.y - event.raw.y;
                self.last_raw = event.raw;
                listener.on_scroll(&first, event, distance_x, distance_y)
            }
            MotionAction::Up => {
                let Some(first) = self.first.take() else {
                    return false;
                };
                self.velocity.add_movement(event);
                let mut handled = false;
                if self.is_scrolling {
                    let (velocity_x, velocity_y) = self.velocity.velocity(self.max_fling_velocity);
                    if velocity_y.abs() >= self.min_fling_velocity
                        || velocity_x.abs() >= self.min_fling_velocity
                    {
                        handled = listener.on_fling(&first, event, velocity_x, velocity_y);
                        log::trace!("fling ({velocity_x}, {velocity_y}) px/s handled={handled}");
                    }
                }
                self.finish();
                handled
            }
            MotionAction::Cancel => {
                if self.first.take().is_some() {
                    log::trace!("gesture cancelled");
                }
                self.finish();
                false
            }
        }
    }

    fn finish(&mut self) {
        self.is_scrolling = false;
        self.velocity.reset();
    }
}
