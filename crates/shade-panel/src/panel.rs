//! The notification panel facade.
//!
//! Owns the arbiter and the motion controller, routes host callbacks to
//! them, and turns settle completion into list and service notifications.

use crate::arbiter::GestureArbiter;
use crate::capabilities::{ScrollObserver, TouchConsumer};
use crate::collaborators::{CommandRouter, NotificationList, PanelCollaborators, StatusBarService, StatusBarState};
use crate::config::PanelConfig;
use crate::error::ConfigError;
use crate::motion::{PanelLayout, PanelMotionController, SettleEnd};
use crate::session::{ArbiterState, GestureOutcome, ScrollState, TouchTarget};
use shade_animation::FlingTiming;
use shade_foundation::gesture_constants::DEFAULT_FLING_VELOCITY;
use shade_foundation::MotionEvent;

type UnseenCountListener = Box<dyn FnMut(usize)>;

pub struct NotificationPanel {
    arbiter: GestureArbiter,
    motion: PanelMotionController,
    list: Box<dyn NotificationList>,
    status_bar: Box<dyn StatusBarService>,
    commands: Box<dyn CommandRouter>,
    unseen_count_listener: Option<UnseenCountListener>,
}

impl NotificationPanel {
    /// Builds a hidden panel. Fails without touching any collaborator when
    /// `config` is invalid.
    pub fn new(
        config: PanelConfig,
        layout: PanelLayout,
        collaborators: PanelCollaborators,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let alpha = config.background_alpha()?;
        let PanelCollaborators {
            surface,
            list,
            status_bar,
            commands,
        } = collaborators;

        let motion = PanelMotionController::new(
            surface,
            alpha,
            layout,
            FlingTiming::new(config.fling_max_duration_millis),
        );
        log::debug!(
            "notification panel created: alpha {}..{}, close past {}",
            alpha.initial(),
            alpha.final_alpha(),
            config.settle_close_percentage
        );

        Ok(Self {
            arbiter: GestureArbiter::new(&config),
            motion,
            list,
            status_bar,
            commands,
            unseen_count_listener: None,
        })
    }

    /// Same as [`NotificationPanel::new`] with the configuration read from a
    /// TOML resource.
    pub fn from_toml(
        source: &str,
        layout: PanelLayout,
        collaborators: PanelCollaborators,
    ) -> Result<Self, ConfigError> {
        Self::new(PanelConfig::from_toml_str(source)?, layout, collaborators)
    }

    pub fn state(&self) -> ArbiterState {
        self.arbiter.state()
    }

    pub fn last_outcome(&self) -> Option<GestureOutcome> {
        self.arbiter.last_outcome()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.arbiter.scroll_state()
    }

    pub fn arbiter(&self) -> &GestureArbiter {
        &self.arbiter
    }

    pub fn motion(&self) -> &PanelMotionController {
        &self.motion
    }

    pub fn clip_height(&self) -> f32 {
        self.motion.clip_height()
    }

    pub fn background_alpha(&self) -> f32 {
        self.motion.background_alpha()
    }

    pub fn is_expanded(&self) -> bool {
        self.motion.is_expanded()
    }

    pub fn is_visible(&self) -> bool {
        self.motion.is_visible()
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_animating()
    }

    pub fn set_layout(&mut self, layout: PanelLayout) {
        self.motion.set_layout(layout);
    }

    /// Shows the panel and animates it fully open.
    ///
    /// Returns `false` when panels are disabled or the panel is already
    /// fully open.
    pub fn animate_expand(&mut self) -> bool {
        if !self.commands.panels_enabled() {
            log::debug!("expand vetoed: panels disabled");
            return false;
        }
        if self.motion.is_fully_open() && !self.motion.is_animating() {
            return false;
        }

        self.motion.show();
        self.list.scroll_to_top();
        if self.status_bar.state() != StatusBarState::Keyguard {
            log::trace!("clearing notification effects on expand");
            if let Err(err) = self.status_bar.clear_notification_effects() {
                log::warn!("failed to clear notification effects: {err}");
            }
        }
        self.motion.settle(DEFAULT_FLING_VELOCITY, true)
    }

    /// Animates the panel closed from wherever it is.
    pub fn animate_collapse(&mut self) -> bool {
        if !self.motion.is_visible() {
            return false;
        }
        self.motion.settle(DEFAULT_FLING_VELOCITY, false)
    }

    /// Frame tick from the host's choreographer.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> Option<SettleEnd> {
        let end = self.motion.on_frame(frame_time_nanos)?;
        match end {
            SettleEnd::Opened => {
                log::debug!("panel opened");
                self.list.on_visibility_changed(true);
                self.list.mark_visible_as_seen();
            }
            SettleEnd::Closed => {
                log::debug!("panel closed");
                self.list.on_visibility_changed(false);
            }
        }
        self.arbiter.reset_session();
        Some(end)
    }

    pub fn set_unseen_count_listener(&mut self, listener: impl FnMut(usize) + 'static) {
        self.unseen_count_listener = Some(Box::new(listener));
    }

    pub fn clear_unseen_count_listener(&mut self) {
        self.unseen_count_listener = None;
    }

    /// Forwards a new unseen notification count reported by the list.
    pub fn notify_unseen_count(&mut self, count: usize) {
        if let Some(listener) = self.unseen_count_listener.as_mut() {
            listener(count);
        }
    }
}

impl TouchConsumer for NotificationPanel {
    fn on_touch(&mut self, target: TouchTarget, event: &MotionEvent) -> bool {
        match target {
            TouchTarget::GlassPane => self.arbiter.on_glass_pane_touch(event, &mut self.motion),
            TouchTarget::NotificationList => self.arbiter.on_list_touch(event, &mut self.motion),
            TouchTarget::HandleBar => self.arbiter.on_handle_bar_touch(event, &mut self.motion),
        }
    }
}

impl ScrollObserver for NotificationPanel {
    fn on_scrolled(&mut self, dx: f32, dy: f32, can_scroll_down: bool) {
        self.arbiter.on_scrolled(dx, dy, can_scroll_down);
    }
}

#[cfg(test)]
#[path = "tests/panel_tests.rs"]
mod tests;
