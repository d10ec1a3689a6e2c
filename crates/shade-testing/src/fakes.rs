//! Recording fakes for the panel's collaborators.
//!
//! Each fake writes into a shared record that the test keeps a handle to,
//! so calls can be asserted after the panel has taken ownership of the fake.

use shade_graphics::Rect;
use shade_panel::{
    CommandRouter, NotificationList, PanelCollaborators, PanelSurface, ServiceError, StatusBarService,
    StatusBarState,
};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SurfaceRecord {
    pub clip_bounds: Vec<Rect>,
    pub background_alpha: Vec<f32>,
    pub handle_bar_translation: Vec<f32>,
    pub visibility: Vec<bool>,
}

impl SurfaceRecord {
    pub fn last_clip(&self) -> Option<Rect> {
        self.clip_bounds.last().copied()
    }

    pub fn last_alpha(&self) -> Option<f32> {
        self.background_alpha.last().copied()
    }
}

pub struct RecordingSurface {
    record: Rc<RefCell<SurfaceRecord>>,
}

impl PanelSurface for RecordingSurface {
    fn set_clip_bounds(&mut self, bounds: Rect) {
        self.record.borrow_mut().clip_bounds.push(bounds);
    }

    fn set_background_alpha(&mut self, alpha: f32) {
        self.record.borrow_mut().background_alpha.push(alpha);
    }

    fn set_handle_bar_translation(&mut self, translation_y: f32) {
        self.record.borrow_mut().handle_bar_translation.push(translation_y);
    }

    fn set_visible(&mut self, visible: bool) {
        self.record.borrow_mut().visibility.push(visible);
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListRecord {
    pub visibility_changes: Vec<bool>,
    pub scroll_to_top_calls: usize,
    pub mark_seen_calls: usize,
}

pub struct RecordingList {
    record: Rc<RefCell<ListRecord>>,
}

impl NotificationList for RecordingList {
    fn on_visibility_changed(&mut self, visible: bool) {
        self.record.borrow_mut().visibility_changes.push(visible);
    }

    fn scroll_to_top(&mut self) {
        self.record.borrow_mut().scroll_to_top_calls += 1;
    }

    fn mark_visible_as_seen(&mut self) {
        self.record.borrow_mut().mark_seen_calls += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarRecord {
    pub state: StatusBarState,
    /// When set, `clear_notification_effects` fails with this message.
    pub failure: Option<String>,
    pub clear_effects_calls: usize,
}

impl Default for StatusBarRecord {
    fn default() -> Self {
        Self {
            state: StatusBarState::Shade,
            failure: None,
            clear_effects_calls: 0,
        }
    }
}

pub struct FakeStatusBar {
    record: Rc<RefCell<StatusBarRecord>>,
}

impl StatusBarService for FakeStatusBar {
    fn state(&self) -> StatusBarState {
        self.record.borrow().state
    }

    fn clear_notification_effects(&mut self) -> Result<(), ServiceError> {
        let mut record = self.record.borrow_mut();
        record.clear_effects_calls += 1;
        match &record.failure {
            Some(message) => Err(ServiceError::Remote(message.clone())),
            None => Ok(()),
        }
    }
}

pub struct FakeCommandRouter {
    enabled: Rc<Cell<bool>>,
}

impl CommandRouter for FakeCommandRouter {
    fn panels_enabled(&self) -> bool {
        self.enabled.get()
    }
}

/// Handles to every fake handed to a panel.
#[derive(Clone)]
pub struct Recorder {
    surface: Rc<RefCell<SurfaceRecord>>,
    list: Rc<RefCell<ListRecord>>,
    status_bar: Rc<RefCell<StatusBarRecord>>,
    panels_enabled: Rc<Cell<bool>>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            surface: Rc::default(),
            list: Rc::default(),
            status_bar: Rc::default(),
            panels_enabled: Rc::new(Cell::new(true)),
        }
    }

    /// Fresh fakes backed by this recorder.
    pub fn collaborators(&self) -> PanelCollaborators {
        PanelCollaborators {
            surface: Box::new(RecordingSurface {
                record: Rc::clone(&self.surface),
            }),
            list: Box::new(RecordingList {
                record: Rc::clone(&self.list),
            }),
            status_bar: Box::new(FakeStatusBar {
                record: Rc::clone(&self.status_bar),
            }),
            commands: Box::new(FakeCommandRouter {
                enabled: Rc::clone(&self.panels_enabled),
            }),
        }
    }

    pub fn surface(&self) -> Ref<'_, SurfaceRecord> {
        self.surface.borrow()
    }

    pub fn list(&self) -> Ref<'_, ListRecord> {
        self.list.borrow()
    }

    pub fn status_bar(&self) -> Ref<'_, StatusBarRecord> {
        self.status_bar.borrow()
    }

    pub fn set_panels_enabled(&self, enabled: bool) {
        self.panels_enabled.set(enabled);
    }

    pub fn set_status_bar_state(&self, state: StatusBarState) {
        self.status_bar.borrow_mut().state = state;
    }

    pub fn fail_clear_effects(&self, message: impl Into<String>) {
        self.status_bar.borrow_mut().failure = Some(message.into());
    }

    /// Forgets every call recorded so far; configured behaviour is kept.
    pub fn clear(&self) {
        *self.surface.borrow_mut() = SurfaceRecord::default();
        *self.list.borrow_mut() = ListRecord::default();
        self.status_bar.borrow_mut().clear_effects_calls = 0;
    }
}
