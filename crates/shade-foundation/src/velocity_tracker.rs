//! Release velocity estimation for fling detection.
//!
//! Uses the impulse strategy: velocity is derived from the kinetic energy
//! the pointer imparted over the recent sample window, which is less noisy
//! than a two-point difference on jittery touch input.

use crate::input::MotionEvent;
use smallvec::SmallVec;

/// Maximum number of retained samples per axis.
const HISTORY_SIZE: usize = 20;

/// Only samples within this window of the newest sample contribute.
const HORIZON_MS: i64 = 100;

/// A gap this long between samples means the pointer had stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: i64,
    value: f32,
}

/// Single-axis velocity tracker over absolute positions.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker1D {
    /// Oldest first.
    samples: SmallVec<[Sample; HISTORY_SIZE]>,
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_data_point(&mut self, time_ms: i64, value: f32) {
        if self.samples.len() == HISTORY_SIZE {
            self.samples.remove(0);
        }
        self.samples.push(Sample { time_ms, value });
    }

    /// Velocity in units per second, or 0.0 without enough recent samples.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.samples.last().copied() else {
            return 0.0;
        };

        // (time relative to newest, value), newest first.
        let mut window: SmallVec<[(f32, f32); HISTORY_SIZE]> = SmallVec::new();
        let mut previous = newest;
        for sample in self.samples.iter().rev() {
            let age = newest.time_ms - sample.time_ms;
            let gap = (sample.time_ms - previous.time_ms).abs();
            previous = *sample;
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            window.push((-(age as f32), sample.value));
        }

        if window.len() < 2 {
            return 0.0;
        }

        impulse_velocity(&window) * 1000.0
    }

    /// Velocity in units per second clamped to `±max_velocity`.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.calculate_velocity();
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }
}

/// `window` is ordered newest first; returns units per millisecond.
fn impulse_velocity(window: &[(f32, f32)]) -> f32 {
    let oldest = window.len() - 1;
    let mut work = 0.0f32;
    let mut next_time = window[oldest].0;

    for i in (1..=oldest).rev() {
        let current_time = next_time;
        next_time = window[i - 1].0;
        if current_time == next_time {
            continue;
        }
        let v_curr = (window[i].1 - window[i - 1].1) / (current_time - next_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = 0.5 * m * v^2 with m = 1.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

/// Two-axis tracker fed with the raw coordinates of motion events.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    x: VelocityTracker1D,
    y: VelocityTracker1D,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_movement(&mut self, event: &MotionEvent) {
        self.x.add_data_point(event.time_ms, event.raw.x);
        self.y.add_data_point(event.time_ms, event.raw.y);
    }

    /// `(vx, vy)` in px/sec, each clamped to `±max_velocity`. Positive `vy`
    /// means the pointer moved down the screen.
    pub fn velocity(&self, max_velocity: f32) -> (f32, f32) {
        (
            self.x.calculate_velocity_with_max(max_velocity),
            self.y.calculate_velocity_with_max(max_velocity),
        )
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}
