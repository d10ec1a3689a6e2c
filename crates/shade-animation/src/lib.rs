//! Frame-driven animations for the notification shade.
//!
//! Animations here never own a clock. The host delivers frame times and the
//! animation answers with the value for that frame, which keeps every
//! animation deterministic under test.

mod animation;
mod fling;

pub use animation::*;
pub use fling::*;
