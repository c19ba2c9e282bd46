//! Shared numeric constants for the gestures crate.

// ── Gesture timing ──────────────────────────────────────────────

/// How long a stationary press must be held before it becomes a long-press.
pub const DEFAULT_LONG_PRESS_MS: u64 = 500;

/// Longest press that still counts as a tap.
pub const DEFAULT_TAP_MAX_MS: u64 = 300;

/// Long-press duration for the lenient touch preset.
pub const LENIENT_LONG_PRESS_MS: u64 = 1000;

// ── Gesture distance ────────────────────────────────────────────

/// Per-axis slop in CSS pixels before a touch press turns into a drag.
pub const TOUCH_MOVE_THRESHOLD_PX: f64 = 10.0;

/// Per-axis slop in CSS pixels for mouse input, which jitters less.
pub const MOUSE_MOVE_THRESHOLD_PX: f64 = 5.0;

// ── Template elements ───────────────────────────────────────────

/// Where newly added elements land, measured from the template's top-left corner.
pub const NEW_ELEMENT_OFFSET_PX: f64 = 50.0;

/// Smallest width or height an element may be resized to.
pub const MIN_ELEMENT_SIZE_PX: f64 = 50.0;

/// Font size for new text elements.
pub const DEFAULT_FONT_SIZE_PX: f64 = 14.0;

/// Box size given to a new text element before the host measures it.
pub const DEFAULT_TEXT_WIDTH_PX: f64 = 160.0;
pub const DEFAULT_TEXT_HEIGHT_PX: f64 = 24.0;

/// Placeholder content for a freshly added text element.
pub const DEFAULT_TEXT_CONTENT: &str = "Double-tap to edit";
