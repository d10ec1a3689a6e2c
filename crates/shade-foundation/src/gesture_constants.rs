//! Shared gesture thresholds for the shade's touch targets.
//!
//! All values are in logical pixels (or logical pixels per second). The
//! glass pane, the notification list and the handle bar read the same
//! constants so that a gesture classified on one surface is classified the
//! same way on the others.

/// Drag distance from the initial press before a gesture counts as a scroll.
///
/// Below this distance a release is treated as a tap and no scroll callback
/// fires. Matches the platform touch slop of ~8dp.
pub const TOUCH_SLOP: f32 = 8.0;

/// Horizontal travel after which a gesture on the list is a card swipe.
///
/// A gesture that drifts further than this sideways from the glass pane
/// down position belongs to the notification card, not to the shade.
pub const SWIPE_MAX_OFF_PATH: f32 = 75.0;

/// Minimum vertical release velocity for a close fling, in px/sec.
pub const SWIPE_THRESHOLD_VELOCITY: f32 = 200.0;

/// Release velocity below which the detector does not report a fling at all.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Maximum fling velocity in logical pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Velocity passed to settle animations that are not driven by a fling.
pub const DEFAULT_FLING_VELOCITY: f32 = 0.0;
