//! Tween animations with easing curves.

/// Easing curves used by panel settle animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Fast out, slow in (material standard curve). Used when a settle is
    /// capped at the maximum duration.
    FastOutSlowInEasing,
    /// Linear out, slow in. Continues the finger's speed, then decelerates.
    LinearOutSlowInEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowInEasing => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Evaluates the cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1) at the
/// point whose x coordinate is `fraction`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let derivative = |a: f32, b: f32, c: f32, t: f32| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson first, bisection when the slope flattens out.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            converged = true;
            break;
        }
        let dx = derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = fraction;
        for _ in 0..16 {
            let delta = sample(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}

/// Tween parameters: duration, easing curve and start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    pub easing: Easing,
    /// Delay before the animation starts, in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Value reported for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub value: f32,
    pub finished: bool,
}

/// A single tween from `from` to `to`.
///
/// The first frame delivered fixes the start time, so an animation created
/// between frames starts on the next tick rather than jumping ahead.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelAnimation {
    from: f32,
    to: f32,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    current: f32,
    finished: bool,
}

impl PanelAnimation {
    pub fn new(from: f32, to: f32, spec: AnimationSpec) -> Self {
        Self {
            from,
            to,
            spec,
            start_time_nanos: None,
            current: from,
            finished: false,
        }
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn on_frame(&mut self, frame_time_nanos: u64) -> AnimationFrame {
        if self.finished {
            return AnimationFrame {
                value: self.current,
                finished: true,
            };
        }

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let delay_nanos = self.spec.delay_millis * 1_000_000;

        if elapsed_nanos < delay_nanos {
            return AnimationFrame {
                value: self.current,
                finished: false,
            };
        }

        let duration_nanos = self.spec.duration_millis * 1_000_000;
        let linear_progress = if duration_nanos == 0 {
            1.0
        } else {
            ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0)
        };

        if linear_progress >= 1.0 {
            self.current = self.to;
            self.finished = true;
        } else {
            let progress = self.spec.easing.transform(linear_progress);
            self.current = self.from + (self.to - self.from) * progress;
        }

        AnimationFrame {
            value: self.current,
            finished: self.finished,
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
