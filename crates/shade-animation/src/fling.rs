//! Settle timing derived from the release velocity.
//!
//! A settle keeps the finger's speed when it can: the duration is the time
//! a linear-out-slow-in curve needs to cover the remaining distance at the
//! release velocity. Slow or zero-velocity releases are capped at a maximum
//! length that shrinks with the square root of the distance left, and then
//! use the standard fast-out-slow-in curve instead.

use crate::animation::{AnimationSpec, Easing};

/// Initial slope of the linear-out-slow-in curve.
const LINEAR_OUT_SLOW_IN_START_GRADIENT: f32 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingTiming {
    max_length_millis: u64,
    min_velocity: f32,
}

impl FlingTiming {
    /// Default cap for a full-height settle.
    pub const DEFAULT_MAX_LENGTH_MILLIS: u64 = 500;

    /// Release speeds below this are treated as this speed, in px/sec.
    pub const DEFAULT_MIN_VELOCITY: f32 = 250.0;

    pub fn new(max_length_millis: u64) -> Self {
        Self {
            max_length_millis,
            min_velocity: Self::DEFAULT_MIN_VELOCITY,
        }
    }

    pub fn with_min_velocity(mut self, min_velocity: f32) -> Self {
        self.min_velocity = min_velocity;
        self
    }

    pub fn max_length_millis(&self) -> u64 {
        self.max_length_millis
    }

    /// Spec for animating `from → to` after a release at `velocity` px/sec.
    /// `max_distance` is the longest possible travel (the panel height).
    pub fn spec_for(&self, from: f32, to: f32, velocity: f32, max_distance: f32) -> AnimationSpec {
        let distance = (to - from).abs();
        if distance <= f32::EPSILON {
            return AnimationSpec::linear(0);
        }

        let max_distance = max_distance.max(distance);
        let max_length = self.max_length_millis as f32 * (distance / max_distance).sqrt();
        let speed = velocity.abs().max(self.min_velocity);
        let duration = LINEAR_OUT_SLOW_IN_START_GRADIENT * distance / speed * 1000.0;

        if duration <= max_length {
            AnimationSpec::tween(duration.round() as u64, Easing::LinearOutSlowInEasing)
        } else {
            AnimationSpec::tween(max_length.round() as u64, Easing::FastOutSlowInEasing)
        }
    }
}

impl Default for FlingTiming {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_LENGTH_MILLIS)
    }
}
