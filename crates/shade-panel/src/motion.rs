//! Panel clip/alpha tracking and settle animations.

use crate::collaborators::PanelSurface;
use crate::config::BackgroundAlpha;
use shade_animation::{FlingTiming, PanelAnimation};
use shade_graphics::{Rect, Size};

/// Laid-out geometry of the panel, reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelLayout {
    pub size: Size,
    pub handle_bar_height: f32,
    pub handle_bar_bottom_margin: f32,
}

impl PanelLayout {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_handle_bar(mut self, height: f32, bottom_margin: f32) -> Self {
        self.handle_bar_height = height;
        self.handle_bar_bottom_margin = bottom_margin;
        self
    }
}

/// Terminal state reached by a settle animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleEnd {
    Opened,
    Closed,
}

#[derive(Debug, Clone)]
struct Settle {
    animation: PanelAnimation,
    to_open: bool,
}

pub struct PanelMotionController {
    surface: Box<dyn PanelSurface>,
    alpha: BackgroundAlpha,
    layout: PanelLayout,
    timing: FlingTiming,
    clip_height: f32,
    background_alpha: f32,
    expanded: bool,
    visible: bool,
    settle: Option<Settle>,
}

impl PanelMotionController {
    pub fn new(
        surface: Box<dyn PanelSurface>,
        alpha: BackgroundAlpha,
        layout: PanelLayout,
        timing: FlingTiming,
    ) -> Self {
        Self {
            surface,
            alpha,
            layout,
            timing,
            clip_height: 0.0,
            background_alpha: alpha.initial(),
            expanded: false,
            visible: false,
            settle: None,
        }
    }

    pub fn layout(&self) -> PanelLayout {
        self.layout
    }

    /// Applies a new layout. A fully open panel stays fully open.
    pub fn set_layout(&mut self, layout: PanelLayout) {
        let was_fully_open = self.is_fully_open();
        self.layout = layout;
        if self.visible {
            let height = if was_fully_open {
                self.panel_height()
            } else {
                self.clip_height
            };
            self.set_clip_and_alpha(height);
        }
    }

    pub fn panel_height(&self) -> f32 {
        self.layout.size.height
    }

    pub fn clip_height(&self) -> f32 {
        self.clip_height
    }

    pub fn background_alpha(&self) -> f32 {
        self.background_alpha
    }

    /// How far the top of the panel has been pulled up from full height, as
    /// a fraction of the panel height. 0.0 when fully open.
    pub fn percentage_from_bottom(&self) -> f32 {
        let panel_height = self.panel_height();
        if panel_height > 0.0 {
            1.0 - self.clip_height / panel_height
        } else {
            0.0
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_animating(&self) -> bool {
        self.settle.is_some()
    }

    /// Direction of the running settle, if any.
    pub fn settling_to_open(&self) -> Option<bool> {
        self.settle.as_ref().map(|settle| settle.to_open)
    }

    pub fn is_fully_open(&self) -> bool {
        self.visible && (self.clip_height - self.panel_height()).abs() < f32::EPSILON
    }

    /// Background alpha for a panel clipped to `height`.
    pub fn background_alpha_for(&self, height: f32) -> f32 {
        self.alpha.at(height, self.panel_height())
    }

    /// Clips the panel to `height` and updates the background alpha and the
    /// handle bar position to match.
    pub fn set_clip_and_alpha(&mut self, height: f32) {
        let panel_height = self.panel_height();
        let height = height.clamp(0.0, panel_height.max(0.0));
        self.clip_height = height;

        let bounds = Rect::from_size(self.layout.size).clipped_to_height(height);
        self.surface.set_clip_bounds(bounds);
        self.surface.set_handle_bar_translation(
            height - self.layout.handle_bar_height - self.layout.handle_bar_bottom_margin,
        );

        if panel_height > 0.0 {
            self.background_alpha = self.alpha.at(height, panel_height);
            self.surface.set_background_alpha(self.background_alpha);
        }
    }

    /// Moves the panel edge under the finger. Interrupts a running settle.
    pub fn drag_to(&mut self, height: f32) {
        if let Some(settle) = self.settle.take() {
            log::debug!(
                "drag interrupted settle toward {}",
                if settle.to_open { "open" } else { "closed" }
            );
        }
        self.set_clip_and_alpha(height);
    }

    /// Makes a hidden panel visible, fully clipped, and marks it expanded.
    pub fn show(&mut self) {
        if !self.visible {
            self.visible = true;
            self.surface.set_visible(true);
            self.set_clip_and_alpha(0.0);
        }
        self.expanded = true;
    }

    /// Starts animating toward fully open or fully closed. `velocity_hint`
    /// (px/sec) only sets the initial rate of the animation.
    ///
    /// Returns `false` when there is nothing to animate: the panel is
    /// hidden, or already fully open and asked to open.
    pub fn settle(&mut self, velocity_hint: f32, to_open: bool) -> bool {
        if !self.visible {
            return false;
        }
        if to_open && self.settle.is_none() && self.is_fully_open() {
            return false;
        }

        let target = if to_open { self.panel_height() } else { 0.0 };
        let spec = self
            .timing
            .spec_for(self.clip_height, target, velocity_hint, self.panel_height());
        log::debug!(
            "settling panel {} from {} over {}ms",
            if to_open { "open" } else { "closed" },
            self.clip_height,
            spec.duration_millis
        );
        self.settle = Some(Settle {
            animation: PanelAnimation::new(self.clip_height, target, spec),
            to_open,
        });
        true
    }

    /// Advances the running settle. Returns the terminal state on the
    /// frame the animation completes.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> Option<SettleEnd> {
        let settle = self.settle.as_mut()?;
        let frame = settle.animation.on_frame(frame_time_nanos);
        let to_open = settle.to_open;
        self.set_clip_and_alpha(frame.value);

        if !frame.finished {
            return None;
        }

        self.settle = None;
        if to_open {
            self.expanded = true;
            Some(SettleEnd::Opened)
        } else {
            self.expanded = false;
            self.visible = false;
            self.surface.set_visible(false);
            Some(SettleEnd::Closed)
        }
    }
}
