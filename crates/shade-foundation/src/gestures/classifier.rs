//! Horizontal card-swipe classification.
//!
//! The origin is recorded from the overlay that sees the down event first;
//! every later event from the nested list is compared against it in raw
//! screen coordinates.

use crate::gesture_constants::SWIPE_MAX_OFF_PATH;
use crate::input::{MotionAction, MotionEvent};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeClassifier {
    max_off_path: f32,
    start_x: Option<f32>,
    is_horizontal_swipe: bool,
}

impl Default for SwipeClassifier {
    fn default() -> Self {
        Self::new(SWIPE_MAX_OFF_PATH)
    }
}

impl SwipeClassifier {
    pub fn new(max_off_path: f32) -> Self {
        Self {
            max_off_path,
            start_x: None,
            is_horizontal_swipe: false,
        }
    }

    pub fn max_off_path(&self) -> f32 {
        self.max_off_path
    }

    /// Records the gesture origin. Called for the overlay's down event.
    pub fn begin(&mut self, raw_x: f32) {
        self.start_x = Some(raw_x);
        self.is_horizontal_swipe = false;
    }

    /// Re-evaluates the classification for an event delivered through the
    /// list and returns it. Without a recorded origin nothing is a swipe.
    pub fn classify(&mut self, event: &MotionEvent) -> bool {
        if event.action == MotionAction::Down && self.start_x.is_none() {
            self.start_x = Some(event.raw_x());
        }
        self.is_horizontal_swipe = match self.start_x {
            Some(start_x) => (start_x - event.raw_x()).abs() > self.max_off_path,
            None => false,
        };
        self.is_horizontal_swipe
    }

    pub fn is_horizontal_swipe(&self) -> bool {
        self.is_horizontal_swipe
    }

    pub fn start_x(&self) -> Option<f32> {
        self.start_x
    }

    pub fn reset(&mut self) {
        self.start_x = None;
        self.is_horizontal_swipe = false;
    }
}
