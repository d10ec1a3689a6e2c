//! Gesture arbitration and motion control for a sliding notification panel.
//!
//! The panel decides, for every touch sequence, whether the notification
//! list scrolls or the panel itself is dragged closed, and animates the
//! panel to its terminal state on release.

mod arbiter;
mod capabilities;
pub mod collaborators;
pub mod config;
pub mod error;
mod motion;
mod panel;
pub mod scroll_tracker;
mod session;

pub use arbiter::GestureArbiter;
pub use capabilities::{ScrollObserver, TouchConsumer};
pub use collaborators::{
    CommandRouter, NotificationList, PanelCollaborators, PanelSurface, StatusBarService, StatusBarState,
};
pub use config::{BackgroundAlpha, PanelConfig};
pub use error::{ConfigError, ServiceError};
pub use motion::{PanelLayout, PanelMotionController, SettleEnd};
pub use panel::NotificationPanel;
pub use session::{ArbiterState, GestureOutcome, GestureSession, ScrollState, TouchTarget};

pub mod prelude {
    pub use crate::capabilities::{ScrollObserver, TouchConsumer};
    pub use crate::collaborators::*;
    pub use crate::config::PanelConfig;
    pub use crate::motion::{PanelLayout, SettleEnd};
    pub use crate::panel::NotificationPanel;
    pub use crate::session::{ArbiterState, GestureOutcome, TouchTarget};
}
