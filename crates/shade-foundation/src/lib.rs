//! Foundation input handling for the notification shade: motion events,
//! gesture thresholds, velocity tracking and gesture recognisers.

pub mod gesture_constants;
pub mod gestures;
pub mod input;
pub mod velocity_tracker;

pub use gestures::{CloseGestureDetector, GestureListener, SwipeClassifier};
pub use input::{MotionAction, MotionEvent, MotionQueue};
pub use velocity_tracker::VelocityTracker;

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::gestures::{CloseGestureDetector, GestureListener, SwipeClassifier};
    pub use crate::input::prelude::*;
    pub use crate::velocity_tracker::VelocityTracker;
}
