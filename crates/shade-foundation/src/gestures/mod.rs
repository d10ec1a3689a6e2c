pub mod classifier;
pub mod detector;

pub use classifier::SwipeClassifier;
pub use detector::{CloseGestureDetector, GestureListener};
