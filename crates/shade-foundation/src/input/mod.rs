pub mod dispatcher;
pub mod types;

pub use dispatcher::MotionQueue;
pub use types::{MotionAction, MotionEvent};

pub mod prelude {
    pub use super::dispatcher::MotionQueue;
    pub use super::types::{MotionAction, MotionEvent};
}
