//! Gesture tuning parameters.
//!
//! Every browser and device the editor shipped on wanted slightly different
//! numbers. Rather than separate handler code per device, the host picks a
//! [`DeviceProfile`] (or overrides individual values) and hands the resulting
//! [`GestureConfig`] to the recognizer.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_LONG_PRESS_MS, DEFAULT_TAP_MAX_MS, LENIENT_LONG_PRESS_MS, MOUSE_MOVE_THRESHOLD_PX, TOUCH_MOVE_THRESHOLD_PX,
};
use crate::error::GestureError;

/// Timing and distance thresholds for classifying an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Stationary hold time before a press becomes a long-press.
    pub long_press_ms: u64,
    /// Per-axis displacement that turns a press into a drag.
    pub move_threshold_px: f64,
    /// Presses shorter than this (and not moved) are taps.
    pub tap_max_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        DeviceProfile::Touch.config()
    }
}

impl GestureConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// - `GESTURE_LONG_PRESS_MS`: default 500
    /// - `GESTURE_MOVE_THRESHOLD_PX`: default 10
    /// - `GESTURE_TAP_MAX_MS`: default 300
    ///
    /// Unparseable values fall back to the default. The result is validated.
    pub fn from_env() -> Result<Self, GestureError> {
        Self::default().with_env_overrides()
    }

    /// Like [`GestureConfig::from_env`], but unset variables keep the values in `self`.
    pub fn with_env_overrides(self) -> Result<Self, GestureError> {
        let config = Self {
            long_press_ms: env_parse("GESTURE_LONG_PRESS_MS", self.long_press_ms),
            move_threshold_px: env_parse("GESTURE_MOVE_THRESHOLD_PX", self.move_threshold_px),
            tap_max_ms: env_parse("GESTURE_TAP_MAX_MS", self.tap_max_ms),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that would make classification meaningless.
    pub fn validate(&self) -> Result<(), GestureError> {
        if self.long_press_ms == 0 {
            return Err(GestureError::InvalidConfig("long_press_ms must be positive".into()));
        }
        if self.tap_max_ms == 0 {
            return Err(GestureError::InvalidConfig("tap_max_ms must be positive".into()));
        }
        if !self.move_threshold_px.is_finite() || self.move_threshold_px <= 0.0 {
            return Err(GestureError::InvalidConfig(format!(
                "move_threshold_px must be a positive number, got {}",
                self.move_threshold_px
            )));
        }
        if self.tap_max_ms > self.long_press_ms {
            return Err(GestureError::InvalidConfig(format!(
                "tap_max_ms ({}) exceeds long_press_ms ({})",
                self.tap_max_ms, self.long_press_ms
            )));
        }
        Ok(())
    }
}

/// Preset tuning per input class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceProfile {
    /// Mouse or pen: precise, so a tighter drag slop.
    Mouse,
    /// Ordinary touch screens.
    #[default]
    Touch,
    /// Touch browsers that deliver late or coalesced touch events; a longer
    /// hold keeps scroll attempts from reading as long-presses.
    LenientTouch,
}

impl DeviceProfile {
    #[must_use]
    pub fn config(self) -> GestureConfig {
        match self {
            Self::Mouse => GestureConfig {
                long_press_ms: DEFAULT_LONG_PRESS_MS,
                move_threshold_px: MOUSE_MOVE_THRESHOLD_PX,
                tap_max_ms: DEFAULT_TAP_MAX_MS,
            },
            Self::Touch => GestureConfig {
                long_press_ms: DEFAULT_LONG_PRESS_MS,
                move_threshold_px: TOUCH_MOVE_THRESHOLD_PX,
                tap_max_ms: DEFAULT_TAP_MAX_MS,
            },
            Self::LenientTouch => GestureConfig {
                long_press_ms: LENIENT_LONG_PRESS_MS,
                move_threshold_px: TOUCH_MOVE_THRESHOLD_PX,
                tap_max_ms: DEFAULT_TAP_MAX_MS,
            },
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
