//! Pure geometry for the notification shade
//!
//! Points, sizes and rectangles shared by the gesture and motion crates.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
