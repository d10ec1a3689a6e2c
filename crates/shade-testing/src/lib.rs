//! Testing utilities and harness for the notification shade

pub mod fakes;
pub mod gesture;
pub mod rule;

pub use fakes::*;
pub use gesture::GestureBuilder;
pub use rule::PanelTestRule;

/// Routes `log` output through `env_logger` in test mode. Safe to call from
/// every test; only the first call installs the logger.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub mod prelude {
    pub use crate::fakes::*;
    pub use crate::gesture::GestureBuilder;
    pub use crate::init_test_logging;
    pub use crate::rule::PanelTestRule;
}
