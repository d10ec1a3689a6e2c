//! Bottom-edge tracking for the notification list.

use crate::session::{GestureSession, ScrollState};

/// Applies one scroll callback from the list.
///
/// Reaching (or staying at) the bottom only sets `at_bottom`. Any scroll
/// that leaves the list able to scroll further down clears both close
/// latches, since eligibility established before the scroll no longer
/// describes where the list is.
pub fn track_scroll(scroll: &mut ScrollState, session: &mut GestureSession, can_scroll_down: bool) {
    if !can_scroll_down {
        if !scroll.at_bottom {
            log::trace!("notification list reached its bottom edge");
        }
        scroll.at_bottom = true;
        return;
    }

    if scroll.at_bottom_at_touch_start || session.is_vertical_close_candidate {
        log::debug!("list scrolled away from bottom; dropping close eligibility");
    }
    scroll.at_bottom = false;
    scroll.at_bottom_at_touch_start = false;
    session.is_vertical_close_candidate = false;
}
