//! Decides, per gesture, whether the panel or the notification list owns a
//! touch sequence.
//!
//! Three targets feed the arbiter. The glass pane sees the down event
//! before the list and snapshots the scroll position; the list delivers the
//! rest of the gesture through the close detector; the handle bar always
//! drags the panel. Scroll callbacks from the list arrive in between and may
//! revoke close eligibility mid-gesture.

use crate::config::PanelConfig;
use crate::motion::PanelMotionController;
use crate::scroll_tracker::track_scroll;
use crate::session::{ArbiterState, GestureOutcome, GestureSession, ScrollState};
use shade_foundation::gesture_constants::DEFAULT_FLING_VELOCITY;
use shade_foundation::{CloseGestureDetector, GestureListener, MotionAction, MotionEvent, SwipeClassifier};

pub struct GestureArbiter {
    session: GestureSession,
    scroll: ScrollState,
    classifier: SwipeClassifier,
    close_detector: CloseGestureDetector,
    handle_bar_detector: CloseGestureDetector,
    handle_bar_dragging: bool,
    state: ArbiterState,
    settle_close_percentage: f32,
    swipe_threshold_velocity: f32,
    last_outcome: Option<GestureOutcome>,
}

impl GestureArbiter {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            session: GestureSession::default(),
            scroll: ScrollState::default(),
            classifier: SwipeClassifier::new(config.swipe_max_off_path),
            close_detector: CloseGestureDetector::new(config.touch_slop),
            handle_bar_detector: CloseGestureDetector::new(config.touch_slop),
            handle_bar_dragging: false,
            state: ArbiterState::Idle,
            settle_close_percentage: config.settle_close_percentage,
            swipe_threshold_velocity: config.swipe_threshold_velocity,
            last_outcome: None,
        }
    }

    pub fn state(&self) -> ArbiterState {
        self.state
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    /// Resolution of the most recent finished gesture.
    pub fn last_outcome(&self) -> Option<GestureOutcome> {
        self.last_outcome
    }

    /// Glass pane events. Never consumes, so the list still receives the
    /// gesture.
    pub fn on_glass_pane_touch(&mut self, event: &MotionEvent, motion: &mut PanelMotionController) -> bool {
        match event.action {
            MotionAction::Down => self.begin_gesture(event, motion),
            MotionAction::Move => {}
            MotionAction::Up => {
                // The list's own up clears the snapshot once its detector has
                // seen the event.
                if !self.session.is_list_engaged() {
                    self.scroll.at_bottom_at_touch_start = false;
                    if self.session.is_active() {
                        self.finish(GestureOutcome::NoMotion);
                    }
                }
            }
            MotionAction::Cancel => self.cancel(event),
        }
        false
    }

    /// List events. Returns whether the panel consumed the event.
    pub fn on_list_touch(&mut self, event: &MotionEvent, motion: &mut PanelMotionController) -> bool {
        match event.action {
            MotionAction::Down => {
                if !self.session.is_active() {
                    log::debug!("list down without glass pane down; starting gesture here");
                    self.begin_gesture(event, motion);
                }
            }
            MotionAction::Move | MotionAction::Up => {
                if !self.session.is_active() {
                    log::debug!("list {:?} without a down; ignoring", event.action);
                    self.reset_session();
                    return false;
                }
            }
            MotionAction::Cancel => {
                self.cancel(event);
                return false;
            }
        }
        self.session.engage_list();

        self.session.is_horizontal_card_swipe = self.classifier.classify(event);
        if self.scroll.at_bottom_at_touch_start && self.scroll.at_bottom {
            self.session.is_vertical_close_candidate = true;
        }
        // A drag that already moves the panel keeps closing even if it
        // drifts sideways.
        if self.session.is_horizontal_card_swipe
            && !self.session.is_tracking
            && self.scroll.at_bottom_at_touch_start
        {
            log::debug!("notification card swipe; panel stays open");
            self.scroll.at_bottom_at_touch_start = false;
            if self.state == ArbiterState::Armed {
                self.state = ArbiterState::Idle;
            }
        }
        log::trace!(
            "list {:?}: card_swipe={} close_candidate={} tracking={}",
            event.action,
            self.session.is_horizontal_card_swipe,
            self.session.is_vertical_close_candidate,
            self.session.is_tracking
        );

        let mut listener = CloseListener {
            session: &mut self.session,
            motion: &mut *motion,
            closing_allowed: self.scroll.at_bottom_at_touch_start,
            max_off_path: self.classifier.max_off_path(),
            swipe_threshold_velocity: self.swipe_threshold_velocity,
            fling: None,
        };
        let handled = self.close_detector.on_touch_event(event, &mut listener);
        let fling = listener.fling;

        let is_tracking = self.session.is_tracking;
        if is_tracking && self.state != ArbiterState::Tracking {
            log::debug!("panel tracking close drag");
            self.state = ArbiterState::Tracking;
        }

        if event.action == MotionAction::Up {
            let candidate = self.session.is_vertical_close_candidate;
            let settled = if !handled && candidate && is_tracking {
                settle_after_release(motion, self.settle_close_percentage)
            } else {
                None
            };
            let outcome = fling.or(settled).unwrap_or(
                if candidate && !self.session.is_horizontal_card_swipe {
                    GestureOutcome::NoMotion
                } else {
                    GestureOutcome::HandledByChild
                },
            );
            self.scroll.at_bottom_at_touch_start = false;
            self.finish(outcome);
        }

        handled || is_tracking
    }

    /// Handle bar events. The handle bar consumes every event.
    pub fn on_handle_bar_touch(&mut self, event: &MotionEvent, motion: &mut PanelMotionController) -> bool {
        match event.action {
            MotionAction::Down => {
                self.handle_bar_dragging = false;
                self.state = ArbiterState::Armed;
            }
            MotionAction::Cancel => {
                self.handle_bar_detector.on_touch_event(event, &mut Ignore);
                if self.handle_bar_dragging || self.state != ArbiterState::Idle {
                    self.last_outcome = Some(GestureOutcome::Cancelled);
                }
                self.handle_bar_dragging = false;
                self.state = ArbiterState::Idle;
                return true;
            }
            MotionAction::Move | MotionAction::Up => {
                if self.handle_bar_detector.origin().is_none() {
                    log::debug!("handle bar {:?} without a down; ignoring", event.action);
                    self.handle_bar_dragging = false;
                    self.state = ArbiterState::Idle;
                    return true;
                }
            }
        }

        let mut listener = HandleBarListener {
            motion: &mut *motion,
            dragging: &mut self.handle_bar_dragging,
        };
        self.handle_bar_detector.on_touch_event(event, &mut listener);
        if self.handle_bar_dragging {
            self.state = ArbiterState::Tracking;
        }

        if event.action == MotionAction::Up {
            let outcome = if self.handle_bar_dragging {
                settle_after_release(motion, self.settle_close_percentage)
            } else {
                None
            };
            let outcome = outcome.unwrap_or(GestureOutcome::NoMotion);
            log::debug!("handle bar released: {outcome:?}");
            self.last_outcome = Some(outcome);
            self.handle_bar_dragging = false;
            self.state = ArbiterState::Idle;
        }
        true
    }

    /// Scroll callback from the list.
    pub fn on_scrolled(&mut self, dx: f32, dy: f32, can_scroll_down: bool) {
        log::trace!("list scrolled by ({dx}, {dy}); can_scroll_down={can_scroll_down}");
        track_scroll(&mut self.scroll, &mut self.session, can_scroll_down);
        if self.state == ArbiterState::Armed
            && !self.scroll.at_bottom_at_touch_start
            && !self.handle_bar_dragging
            && self.session.is_active()
        {
            self.state = ArbiterState::Idle;
        }
    }

    /// Drops any gesture in progress. The last reported scroll position is
    /// kept.
    pub fn reset_session(&mut self) {
        self.session.end();
        self.classifier.reset();
        self.scroll.at_bottom_at_touch_start = false;
        self.handle_bar_dragging = false;
        self.state = ArbiterState::Idle;
    }

    fn begin_gesture(&mut self, event: &MotionEvent, motion: &mut PanelMotionController) {
        // Snapshot strictly before the detector sees the down.
        self.scroll.at_bottom_at_touch_start = self.scroll.at_bottom;
        self.session.begin(event.raw);
        self.classifier.begin(event.raw_x());

        let mut listener = CloseListener {
            session: &mut self.session,
            motion,
            closing_allowed: self.scroll.at_bottom_at_touch_start,
            max_off_path: self.classifier.max_off_path(),
            swipe_threshold_velocity: self.swipe_threshold_velocity,
            fling: None,
        };
        self.close_detector.on_touch_event(event, &mut listener);

        self.state = if self.scroll.at_bottom_at_touch_start {
            ArbiterState::Armed
        } else {
            ArbiterState::Idle
        };
        log::debug!("gesture started at {:?}; state {:?}", event.raw, self.state);
    }

    fn cancel(&mut self, event: &MotionEvent) {
        self.close_detector.on_touch_event(event, &mut Ignore);
        if self.session.is_active() {
            self.scroll.at_bottom_at_touch_start = false;
            self.finish(GestureOutcome::Cancelled);
        } else {
            self.state = ArbiterState::Idle;
        }
    }

    fn finish(&mut self, outcome: GestureOutcome) {
        log::debug!("gesture finished: {outcome:?}");
        self.last_outcome = Some(outcome);
        self.session.end();
        self.classifier.reset();
        self.state = ArbiterState::Idle;
    }
}

/// Animates to the terminal state implied by how far the panel was dragged
/// up before the release. `None` when the panel is already where it should
/// be.
fn settle_after_release(
    motion: &mut PanelMotionController,
    settle_close_percentage: f32,
) -> Option<GestureOutcome> {
    if motion.panel_height() <= 0.0 {
        return None;
    }
    if motion.percentage_from_bottom() > settle_close_percentage {
        motion
            .settle(DEFAULT_FLING_VELOCITY, false)
            .then_some(GestureOutcome::FlingClose)
    } else if !motion.is_fully_open() {
        motion
            .settle(DEFAULT_FLING_VELOCITY, true)
            .then_some(GestureOutcome::FlingOpen)
    } else {
        None
    }
}

/// Upward drag height for a gesture that started at `first`.
fn dragged_clip_height(panel_height: f32, first: &MotionEvent, current: &MotionEvent) -> f32 {
    panel_height - (first.raw_y() - current.raw_y())
}

struct CloseListener<'a> {
    session: &'a mut GestureSession,
    motion: &'a mut PanelMotionController,
    closing_allowed: bool,
    max_off_path: f32,
    swipe_threshold_velocity: f32,
    fling: Option<GestureOutcome>,
}

impl GestureListener for CloseListener<'_> {
    fn on_scroll(&mut self, first: &MotionEvent, current: &MotionEvent, _dx: f32, _dy: f32) -> bool {
        if !self.closing_allowed || !self.motion.is_visible() {
            return false;
        }
        self.session.displacement = first.raw_y() - current.raw_y();
        self.session.is_tracking = true;
        let height = dragged_clip_height(self.motion.panel_height(), first, current);
        self.motion.drag_to(height);
        true
    }

    fn on_fling(&mut self, first: &MotionEvent, current: &MotionEvent, _vx: f32, vy: f32) -> bool {
        if !self.closing_allowed {
            return false;
        }
        if (first.raw_x() - current.raw_x()).abs() > self.max_off_path
            || vy.abs() < self.swipe_threshold_velocity
        {
            return false;
        }

        if vy < 0.0 {
            if self.motion.is_expanded() && self.motion.settle(vy, false) {
                log::debug!("close fling at {vy} px/s");
                self.fling = Some(GestureOutcome::FlingClose);
                return true;
            }
        } else if self.session.is_tracking && !self.motion.is_fully_open() && self.motion.settle(vy, true) {
            log::debug!("reopen fling at {vy} px/s");
            self.fling = Some(GestureOutcome::FlingOpen);
            return true;
        }
        false
    }
}

struct HandleBarListener<'a> {
    motion: &'a mut PanelMotionController,
    dragging: &'a mut bool,
}

impl GestureListener for HandleBarListener<'_> {
    fn on_scroll(&mut self, first: &MotionEvent, current: &MotionEvent, _dx: f32, _dy: f32) -> bool {
        *self.dragging = true;
        let height = dragged_clip_height(self.motion.panel_height(), first, current);
        self.motion.drag_to(height);
        true
    }
}

struct Ignore;

impl GestureListener for Ignore {}

#[cfg(test)]
#[path = "tests/arbiter_tests.rs"]
mod tests;
