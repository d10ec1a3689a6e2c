//! Panel configuration.
//!
//! Values are resolved once when the panel is built. Every field has a
//! default so an empty TOML document yields a usable panel.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use shade_foundation::gesture_constants::{SWIPE_MAX_OFF_PATH, SWIPE_THRESHOLD_VELOCITY, TOUCH_SLOP};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Background alpha of a fully clipped panel, in percent.
    #[serde(default = "default_initial_alpha")]
    pub initial_background_alpha_percent: i32,
    /// Background alpha of a fully open panel, in percent. Raised to the
    /// initial value when configured lower.
    #[serde(default = "default_final_alpha")]
    pub final_background_alpha_percent: i32,
    /// Sideways travel, in px, that turns a list gesture into a card swipe.
    #[serde(default = "default_swipe_max_off_path")]
    pub swipe_max_off_path: f32,
    /// Fraction of the panel height a released drag must have pulled the
    /// panel up by, beyond which the panel closes.
    #[serde(default = "default_settle_close_percentage")]
    pub settle_close_percentage: f32,
    /// Minimum vertical release speed, in px/sec, for a close fling.
    #[serde(default = "default_swipe_threshold_velocity")]
    pub swipe_threshold_velocity: f32,
    #[serde(default = "default_touch_slop")]
    pub touch_slop: f32,
    /// Longest settle animation, for a full-height travel.
    #[serde(default = "default_fling_max_duration_millis")]
    pub fling_max_duration_millis: u64,
}

fn default_initial_alpha() -> i32 {
    0
}

fn default_final_alpha() -> i32 {
    100
}

fn default_swipe_max_off_path() -> f32 {
    SWIPE_MAX_OFF_PATH
}

fn default_settle_close_percentage() -> f32 {
    0.5
}

fn default_swipe_threshold_velocity() -> f32 {
    SWIPE_THRESHOLD_VELOCITY
}

fn default_touch_slop() -> f32 {
    TOUCH_SLOP
}

fn default_fling_max_duration_millis() -> u64 {
    500
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            initial_background_alpha_percent: default_initial_alpha(),
            final_background_alpha_percent: default_final_alpha(),
            swipe_max_off_path: default_swipe_max_off_path(),
            settle_close_percentage: default_settle_close_percentage(),
            swipe_threshold_velocity: default_swipe_threshold_velocity(),
            touch_slop: default_touch_slop(),
            fling_max_duration_millis: default_fling_max_duration_millis(),
        }
    }
}

impl PanelConfig {
    /// Parses and validates a TOML resource.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: PanelConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        BackgroundAlpha::from_percentages(
            self.initial_background_alpha_percent,
            self.final_background_alpha_percent,
        )?;
        if !(0.0..=1.0).contains(&self.settle_close_percentage) {
            return Err(ConfigError::SettlePercentageOutOfRange(
                self.settle_close_percentage,
            ));
        }
        for (name, value) in [
            ("swipe_max_off_path", self.swipe_max_off_path),
            ("swipe_threshold_velocity", self.swipe_threshold_velocity),
            ("touch_slop", self.touch_slop),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositiveThreshold { name, value });
            }
        }
        Ok(())
    }

    pub fn background_alpha(&self) -> Result<BackgroundAlpha, ConfigError> {
        BackgroundAlpha::from_percentages(
            self.initial_background_alpha_percent,
            self.final_background_alpha_percent,
        )
    }
}

/// Linear map from visible panel height to background alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundAlpha {
    initial: f32,
    diff: f32,
}

impl BackgroundAlpha {
    pub fn from_percentages(initial_percent: i32, final_percent: i32) -> Result<Self, ConfigError> {
        if !(0..=100).contains(&initial_percent) {
            return Err(ConfigError::InitialAlphaOutOfRange(initial_percent));
        }
        if !(0..=100).contains(&final_percent) {
            return Err(ConfigError::FinalAlphaOutOfRange(final_percent));
        }
        let initial = initial_percent as f32 / 100.0;
        let final_alpha = (final_percent as f32 / 100.0).max(initial);
        Ok(Self {
            initial,
            diff: final_alpha - initial,
        })
    }

    pub fn initial(&self) -> f32 {
        self.initial
    }

    pub fn final_alpha(&self) -> f32 {
        self.initial + self.diff
    }

    /// Alpha for `height` visible pixels of a `panel_height` tall panel.
    pub fn at(&self, height: f32, panel_height: f32) -> f32 {
        if panel_height <= 0.0 {
            return self.initial;
        }
        (self.initial + height / panel_height * self.diff).clamp(self.initial, self.final_alpha())
    }
}
