use super::*;
use crate::collaborators::PanelSurface;
use crate::config::BackgroundAlpha;
use crate::motion::PanelLayout;
use shade_animation::FlingTiming;
use shade_graphics::{Point, Rect, Size};

const HEIGHT: f32 = 800.0;
const FRAME_NANOS: u64 = 16_666_667;

struct NullSurface;

impl PanelSurface for NullSurface {
    fn set_clip_bounds(&mut self, _bounds: Rect) {}
    fn set_background_alpha(&mut self, _alpha: f32) {}
    fn set_handle_bar_translation(&mut self, _translation_y: f32) {}
    fn set_visible(&mut self, _visible: bool) {}
}

fn event(action: MotionAction, x: f32, y: f32, time_ms: i64) -> MotionEvent {
    MotionEvent::at_raw(action, Point::new(x, y), time_ms)
}

fn open_motion() -> PanelMotionController {
    let mut motion = PanelMotionController::new(
        Box::new(NullSurface),
        BackgroundAlpha::from_percentages(0, 100).unwrap(),
        PanelLayout::new(Size::new(400.0, HEIGHT)),
        FlingTiming::default(),
    );
    motion.show();
    motion.settle(0.0, true);
    let mut time = 0;
    while motion.on_frame(time).is_none() {
        time += FRAME_NANOS;
    }
    motion
}

fn arbiter_at_bottom() -> GestureArbiter {
    let mut arbiter = GestureArbiter::new(&PanelConfig::default());
    arbiter.on_scrolled(0.0, 0.0, false);
    arbiter
}

fn arbiter_with_threshold(settle_close_percentage: f32) -> GestureArbiter {
    let mut arbiter = GestureArbiter::new(&PanelConfig {
        settle_close_percentage,
        ..PanelConfig::default()
    });
    arbiter.on_scrolled(0.0, 0.0, false);
    arbiter
}

/// Delivers `event` to the glass pane and then the list, as the host does.
fn deliver(arbiter: &mut GestureArbiter, motion: &mut PanelMotionController, event: MotionEvent) -> bool {
    arbiter.on_glass_pane_touch(&event, motion);
    arbiter.on_list_touch(&event, motion)
}

/// Drags upward from `from_y` to `to_y` in 80 px steps, 16 ms apart.
/// Returns the time of the last move.
fn drag_up(
    arbiter: &mut GestureArbiter,
    motion: &mut PanelMotionController,
    x: f32,
    from_y: f32,
    to_y: f32,
) -> i64 {
    deliver(arbiter, motion, event(MotionAction::Down, x, from_y, 0));
    let mut y = from_y;
    let mut time = 0;
    while y > to_y {
        y = (y - 80.0).max(to_y);
        time += 16;
        deliver(arbiter, motion, event(MotionAction::Move, x, y, time));
    }
    time
}

#[test]
fn down_snapshots_bottom_and_arms() {
    let mut arbiter = arbiter_at_bottom();
    let mut motion = open_motion();

    let consumed = arbiter.on_glass_pane_touch(&event(MotionAction::Down, 200.0, 700.0, 0), &mut motion);
    assert!(!consumed);
    assert_eq!(arbiter.state(), ArbiterState::Armed);
    assert!(arbiter.scroll_state().at_bottom_at_touch_start);
    assert!(arbiter.session().is_active());
}

#[test]
fn down_away_from_bottom_stays_idle() {
    let mut arbiter = GestureArbiter::new(&PanelConfig::default());
    let mut motion = open_motion();

    arbiter.on_glass_pane_touch(&event(MotionAction::Down, 200.0, 700.0, 0), &mut motion);
    assert_eq!(arbiter.state(), ArbiterState::Idle);
    assert!(!arbiter.scroll_state().at_bottom_at_touch_start);
}

#[test]
fn drag_from_scrolled_list_never_moves_panel() {
    let mut arbiter = GestureArbiter::new(&PanelConfig::default());
    let mut motion = open_motion();

    let time = drag_up(&mut arbiter, &mut motion, 200.0, 700.0, 200.0);
    deliver(&mut arbiter, &mut motion, event(MotionAction::Up, 200.0, 200.0, time + 8));

    assert_eq!(arbiter.last_outcome(), Some(GestureOutcome::HandledByChild));
    assert_eq!(motion.clip_height(), HEIGHT);
    assert!(!motion.is_animating());
}

#[test]
fn upward_drag_tracks_the_finger() {
    let mut arbiter = arbiter_at_bottom();
    let mut motion = open_motion();

    drag_up(&mut arbiter, &mut motion, 200.0, 700.0, 220.0);
    assert_eq!(arbiter.state(), ArbiterState::Tracking);
    assert!(arbiter.session().is_tracking);
    assert!(arbiter.session().is_vertical_close_candidate);
    assert_eq!(motion.clip_height(), 320.0);
    assert_eq!(arbiter.session().displacement, 480.0);
}

#[test]
fn fast_release_flings_closed() {
    let mut arbiter = arbiter_at_bottom();
    let mut motion = open_motion();

    let time = drag_up(&mut arbiter, &mut motion, 200.0, 700.0, 220.0);
    let consumed = deliver(&mut arbiter, &mut motion, event(MotionAction::Up, 200.0, 220.0, time + 8));

    assert!(consumed);
    assert_eq!(arbiter.last_outcome(), Some(GestureOutcome::FlingClose));
    assert_eq!(motion.settling_to_open(), Some(false));
    assert_eq!(arbiter.state(), ArbiterState::Idle);
    assert!(!arbiter.scroll_state().at_bottom_at_touch_start);
}

#[test]
fn slow_release_below_threshold_settles_closed() {
    let mut arbiter = arbiter_at_bottom();
    let mut motion = open_motion();

    let time = drag_up(&mut arbiter, &mut motion, 200.0, 700.0, 220.0);
    // Finger rests before lifting, so there is no fling velocity.
    deliver(&mut arbiter, &mut motion, event(MotionAction::Up, 200.0, 220.0, time + 200));

    assert_eq!(arbiter.last_outcome(), Some(GestureOutcome::FlingClose));
    assert_eq!(motion.settling_to_open(), Some(false));
}

#[test]
fn slow_release_above_threshold_settles_open() {
    let mut arbiter = arbiter_at_bottom();
    let mut motion = open_motion();

    let time = drag_up(&mut arbiter, &mut motion, 200.0, 700.0, 540.0);
    assert_eq!(motion.clip_height(), 640.0);
    deliver(&mut arbiter, &mut motion, event(MotionAction::Up, 200.0, 540.0, time + 200));

    assert_eq!(arbiter.last_outcome(), Some(GestureOutcome::FlingOpen));
    assert_eq!(motion.settling_to_open(), Some(true));
}

#[test]
fn release_closes_once_dragged_past_a_low_threshold() {
    let mut arbiter = arbiter_with_threshold(0.3);
    let mut motion = open_motion();

    let time = drag_up(&mut arbiter, &mut motion, 200.0, 700.0, 220.0);
    assert_eq!(motion.clip_height(), 320.0);
    deliver(&mut arbiter, &mut motion, event(MotionAction::Up, 200.0, 220.0, time + 200));

    assert_eq!(arbiter.last_outcome(), Some(GestureOutcome::FlingClose));
    assert_eq!(motion.settling_to_open(), Some(false));
}

#[test]
fn release_reopens_short_of_a_high_threshold() {
    let mut arbiter = arbiter_with_threshold(0.7);
    let mut motion = open_motion();

    let time = drag_up(&mut arbiter, &mut motion, 200.0, 700.0, 380.0);
    assert_eq!(motion.clip_height(), 480.0);
    deliver(&mut arbiter, &mut motion, event(MotionAction::Up, 200.0, 380.0, time + 200));

    assert_eq!(arbiter.last_outcome(), Some(GestureOutcome::FlingOpen));
    assert_eq!(motion.settling_to_open(), Some(true));
}

#[test]
fn handle_bar_release_honours_configured_threshold() {
    for (threshold, expected, to_open) in [
        (0.3, GestureOutcome::FlingClose, false),
        (0.7, GestureOutcome::FlingOpen, true),
    ] {
        let mut arbiter = arbiter_with_threshold(threshold);
        let mut motion = open_motion();

        arbiter.on_handle_bar_touch(&event(MotionAction::Down, 200.0, 790.0, 0), &mut motion);
        arbiter.on_handle_bar_touch(&event(MotionAction::Move, 200.0, 390.0, 16), &mut motion);
        assert_eq!(motion.clip_height(), 400.0);
        arbiter.on_handle_bar_touch(&event(MotionAction::Up, 200.0, 390.0, 32), &mut motion);

        assert_eq!(arbiter.last_outcome(), Some(expected), "threshold {threshold}");
        assert_eq!(motion.settling_to_open(), Some(to_open));
    }
}

#[test]
fn card_swipe_keeps_panel_open() {
    let mut arbiter = arbiter_at_bottom();
    let mut motion = open_motion();

    deliver(&mut arbiter, &mut motion, event(MotionAction::Down, 100.0, 500.0, 0));
    deliver(&mut arbiter, &mut motion, event(MotionAction::Move, 220.0, 496.0, 16));
    assert!(arbiter.session().is_horizontal_card_swipe);
    assert!(!arbiter.scroll_state().at_bottom_at_touch_start);
    assert_eq!(arbiter.state(), ArbiterState::Idle);

    deliver(&mut arbiter, &mut motion, event(MotionAction::Up, 300.0, 496.0, 32));
    assert_eq!(arbiter.last_outcome(), Some(GestureOutcome::HandledByChild));
    assert_eq!(motion.clip_height(), HEIGHT);
    assert!(!motion.is_animating());
}

#[test]
fn sideways_drift_after_tracking_still_closes() {
    let mut arbiter = arbiter_at_bottom();
    let mut motion = open_motion();

    deliver(&mut arbiter, &mut motion, event(MotionAction::Down, 100.0, 700.0, 0));
    deliver(&mut arbiter, &mut motion, event(MotionAction::Move, 100.0, 500.0, 16));
    assert_eq!(arbiter.state(), ArbiterState::Tracking);
    deliver(&mut arbiter, &mut motion, event(MotionAction::Move, 200.0, 250.0, 32));
    assert!(arbiter.session().is_horizontal_card_swipe);
    assert!(arbiter.session().is_tracking);
    assert_eq!(motion.clip_height(), 350.0);

    deliver(&mut arbiter, &mut motion, event(MotionAction::Up, 200.0, 250.0, 300));
    assert_eq!(arbiter.last_outcome(), Some(GestureOutcome::FlingClose));
}

#[test]
fn scrolling_away_from_bottom_revokes_close() {
    let mut arbiter = arbiter_at_bottom();
    let mut motion = open_motion();

    deliver(&mut arbiter, &mut motion, event(MotionAction::Down, 200.0, 700.0, 0));
    arbiter.on_scrolled(0.0, -40.0, true);
    assert_eq!(arbiter.state(), ArbiterState::Idle);
    assert!(!arbiter.session().is_vertical_close_candidate);

    deliver(&mut arbiter, &mut motion, event(MotionAction::Move, 200.0, 400.0, 16));
    deliver(&mut arbiter, &mut motion, event(MotionAction::Up, 200.0, 400.0, 32));
    assert_eq!(motion.clip_height(), HEIGHT);
    assert!(!motion.is_animating());
}

#[test]
fn cancel_mid_tracking_goes_idle_without_settle() {
    let mut arbiter = arbiter_at_bottom();
    let mut motion = open_motion();

    drag_up(&mut arbiter, &mut motion, 200.0, 700.0, 380.0);
    assert_eq!(arbiter.state(), ArbiterState::Tracking);
    let clip = motion.clip_height();

    deliver(&mut arbiter, &mut motion, event(MotionAction::Cancel, 200.0, 380.0, 100));
    assert_eq!(arbiter.state(), ArbiterState::Idle);
    assert_eq!(arbiter.last_outcome(), Some(GestureOutcome::Cancelled));
    assert!(!motion.is_animating());
    assert_eq!(motion.clip_height(), clip);
}

#[test]
fn move_without_down_is_ignored() {
    let mut arbiter = arbiter_at_bottom();
    let mut motion = open_motion();

    let consumed = arbiter.on_list_touch(&event(MotionAction::Move, 200.0, 300.0, 16), &mut motion);
    assert!(!consumed);
    assert_eq!(arbiter.state(), ArbiterState::Idle);
    assert_eq!(motion.clip_height(), HEIGHT);
}

#[test]
fn list_down_alone_starts_a_gesture() {
    let mut arbiter = arbiter_at_bottom();
    let mut motion = open_motion();

    arbiter.on_list_touch(&event(MotionAction::Down, 200.0, 700.0, 0), &mut motion);
    assert_eq!(arbiter.state(), ArbiterState::Armed);
    assert!(arbiter.session().is_list_engaged());
}

#[test]
fn glass_pane_up_without_list_clears_snapshot() {
    let mut arbiter = arbiter_at_bottom();
    let mut motion = open_motion();

    arbiter.on_glass_pane_touch(&event(MotionAction::Down, 200.0, 700.0, 0), &mut motion);
    arbiter.on_glass_pane_touch(&event(MotionAction::Up, 200.0, 700.0, 50), &mut motion);
    assert!(!arbiter.scroll_state().at_bottom_at_touch_start);
    assert_eq!(arbiter.state(), ArbiterState::Idle);
    assert_eq!(arbiter.last_outcome(), Some(GestureOutcome::NoMotion));
}

#[test]
fn glass_pane_up_defers_to_list_up() {
    let mut arbiter = arbiter_at_bottom();
    let mut motion = open_motion();

    let time = drag_up(&mut arbiter, &mut motion, 200.0, 700.0, 220.0);
    let up = event(MotionAction::Up, 200.0, 220.0, time + 8);
    arbiter.on_glass_pane_touch(&up, &mut motion);
    assert!(arbiter.scroll_state().at_bottom_at_touch_start);

    arbiter.on_list_touch(&up, &mut motion);
    assert_eq!(arbiter.last_outcome(), Some(GestureOutcome::FlingClose));
    assert!(!arbiter.scroll_state().at_bottom_at_touch_start);
}

#[test]
fn handle_bar_drag_clips_by_displacement() {
    let mut arbiter = GestureArbiter::new(&PanelConfig::default());
    let mut motion = open_motion();

    assert!(arbiter.on_handle_bar_touch(&event(MotionAction::Down, 200.0, 500.0, 0), &mut motion));
    assert_eq!(arbiter.state(), ArbiterState::Armed);
    assert!(arbiter.on_handle_bar_touch(&event(MotionAction::Move, 200.0, 200.0, 16), &mut motion));
    assert_eq!(arbiter.state(), ArbiterState::Tracking);
    assert_eq!(motion.clip_height(), 500.0);
}

#[test]
fn handle_bar_release_low_closes() {
    let mut arbiter = GestureArbiter::new(&PanelConfig::default());
    let mut motion = open_motion();

    arbiter.on_handle_bar_touch(&event(MotionAction::Down, 200.0, 790.0, 0), &mut motion);
    arbiter.on_handle_bar_touch(&event(MotionAction::Move, 200.0, 200.0, 16), &mut motion);
    arbiter.on_handle_bar_touch(&event(MotionAction::Up, 200.0, 200.0, 32), &mut motion);
    assert_eq!(arbiter.last_outcome(), Some(GestureOutcome::FlingClose));
    assert_eq!(motion.settling_to_open(), Some(false));
    assert_eq!(arbiter.state(), ArbiterState::Idle);
}

#[test]
fn handle_bar_release_high_restores_open() {
    let mut arbiter = GestureArbiter::new(&PanelConfig::default());
    let mut motion = open_motion();

    arbiter.on_handle_bar_touch(&event(MotionAction::Down, 200.0, 790.0, 0), &mut motion);
    arbiter.on_handle_bar_touch(&event(MotionAction::Move, 200.0, 690.0, 16), &mut motion);
    arbiter.on_handle_bar_touch(&event(MotionAction::Up, 200.0, 690.0, 32), &mut motion);
    assert_eq!(arbiter.last_outcome(), Some(GestureOutcome::FlingOpen));
    assert_eq!(motion.settling_to_open(), Some(true));
}

#[test]
fn handle_bar_tap_does_not_move_panel() {
    let mut arbiter = GestureArbiter::new(&PanelConfig::default());
    let mut motion = open_motion();

    arbiter.on_handle_bar_touch(&event(MotionAction::Down, 200.0, 790.0, 0), &mut motion);
    arbiter.on_handle_bar_touch(&event(MotionAction::Up, 200.0, 791.0, 40), &mut motion);
    assert_eq!(arbiter.last_outcome(), Some(GestureOutcome::NoMotion));
    assert!(!motion.is_animating());
}

#[test]
fn reset_keeps_scroll_position() {
    let mut arbiter = arbiter_at_bottom();
    let mut motion = open_motion();

    drag_up(&mut arbiter, &mut motion, 200.0, 700.0, 500.0);
    arbiter.reset_session();
    assert_eq!(arbiter.state(), ArbiterState::Idle);
    assert!(!arbiter.session().is_active());
    assert!(arbiter.scroll_state().at_bottom);
    assert!(!arbiter.scroll_state().at_bottom_at_touch_start);
}
