//! Headless harness driving a [`NotificationPanel`] with recording fakes.

use crate::fakes::Recorder;
use shade_foundation::{MotionEvent, MotionQueue};
use shade_graphics::Size;
use shade_panel::{
    ConfigError, NotificationPanel, PanelConfig, PanelLayout, ScrollObserver, SettleEnd, TouchConsumer,
    TouchTarget,
};

/// Frames pumped before `wait_for_settle` gives up. Settles are capped well
/// below this.
const MAX_SETTLE_FRAMES: usize = 600;

/// `PanelTestRule` plays the host: it routes touches to the panel's three
/// targets, reports list scroll positions and delivers frame ticks.
///
/// ```
/// use shade_testing::{GestureBuilder, PanelTestRule};
///
/// let mut rule = PanelTestRule::new();
/// rule.open_panel();
/// rule.scroll_to_bottom();
/// rule.perform_list_gesture(GestureBuilder::down_at(200.0, 700.0).drag_to(200.0, 220.0, 6).up());
/// assert!(rule.panel().is_animating());
/// ```
pub struct PanelTestRule {
    panel: NotificationPanel,
    recorder: Recorder,
    frame_time_nanos: u64,
}

impl PanelTestRule {
    pub const DEFAULT_SIZE: Size = Size::new(400.0, 800.0);

    /// Frame spacing used by `advance_frame`, 60 Hz.
    pub const FRAME_NANOS: u64 = 16_666_667;

    /// A hidden 400x800 panel with the default configuration.
    pub fn new() -> Self {
        match Self::with_config(PanelConfig::default()) {
            Ok(rule) => rule,
            Err(err) => panic!("default panel configuration rejected: {err}"),
        }
    }

    pub fn with_config(config: PanelConfig) -> Result<Self, ConfigError> {
        Self::with_layout(config, PanelLayout::new(Self::DEFAULT_SIZE))
    }

    pub fn with_layout(config: PanelConfig, layout: PanelLayout) -> Result<Self, ConfigError> {
        crate::init_test_logging();
        let recorder = Recorder::new();
        let panel = NotificationPanel::new(config, layout, recorder.collaborators())?;
        Ok(Self {
            panel,
            recorder,
            frame_time_nanos: 0,
        })
    }

    pub fn panel(&self) -> &NotificationPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut NotificationPanel {
        &mut self.panel
    }

    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    /// Expands the panel and lets the settle finish.
    pub fn open_panel(&mut self) -> Option<SettleEnd> {
        if !self.panel.animate_expand() {
            return None;
        }
        self.wait_for_settle()
    }

    pub fn close_panel(&mut self) -> Option<SettleEnd> {
        if !self.panel.animate_collapse() {
            return None;
        }
        self.wait_for_settle()
    }

    /// Reports that the list can no longer scroll down.
    pub fn scroll_to_bottom(&mut self) {
        self.panel.on_scrolled(0.0, 40.0, false);
    }

    /// Reports that the list scrolled up and can scroll down again.
    pub fn scroll_away_from_bottom(&mut self) {
        self.panel.on_scrolled(0.0, -40.0, true);
    }

    /// Delivers one frame tick and advances the clock.
    pub fn advance_frame(&mut self) -> Option<SettleEnd> {
        let end = self.panel.on_frame(self.frame_time_nanos);
        self.frame_time_nanos += Self::FRAME_NANOS;
        end
    }

    /// Pumps frames until the running settle ends. `None` when nothing was
    /// animating.
    pub fn wait_for_settle(&mut self) -> Option<SettleEnd> {
        for _ in 0..MAX_SETTLE_FRAMES {
            if !self.panel.is_animating() {
                return None;
            }
            if let Some(end) = self.advance_frame() {
                return Some(end);
            }
        }
        None
    }

    pub fn touch(&mut self, target: TouchTarget, event: &MotionEvent) -> bool {
        self.panel.on_touch(target, event)
    }

    /// Delivers queued `(target, event)` pairs in order. Returns whether the
    /// panel consumed each one.
    pub fn dispatch(&mut self, queue: &mut MotionQueue<TouchTarget>) -> Vec<bool> {
        let panel = &mut self.panel;
        let mut consumed = Vec::with_capacity(queue.len());
        queue.drain(|target, event| consumed.push(panel.on_touch(target, &event)));
        consumed
    }

    /// Delivers every event to the glass pane and then the list, as the host
    /// view tree does. Returns what the list handler answered for each event.
    pub fn perform_list_gesture(&mut self, events: Vec<MotionEvent>) -> Vec<bool> {
        let mut queue = MotionQueue::new();
        for event in events {
            queue.push(TouchTarget::GlassPane, event);
            queue.push(TouchTarget::NotificationList, event);
        }
        self.dispatch(&mut queue)
            .into_iter()
            .skip(1)
            .step_by(2)
            .collect()
    }

    pub fn perform_handle_bar_gesture(&mut self, events: Vec<MotionEvent>) -> Vec<bool> {
        let mut queue = MotionQueue::new();
        for event in events {
            queue.push(TouchTarget::HandleBar, event);
        }
        self.dispatch(&mut queue)
    }
}

impl Default for PanelTestRule {
    fn default() -> Self {
        Self::new()
    }
}
