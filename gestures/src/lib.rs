//! Gesture recognition and editor model for the print-template canvas.
//!
//! The browser host wires raw pointer/touch events into this crate and gets
//! back one classification per interaction: a tap selects an element, a
//! long-press opens its edit panel, and a drag translates it across the
//! template. Camera scanning, printing, and persistence stay with the host;
//! this crate only sees them through narrow traits and serde types.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`recognizer`] | Tap / long-press / drag state machine |
//! | [`session`] | Per-contact interaction bookkeeping |
//! | [`timer`] | Cancelable long-press deadlines |
//! | [`contacts`] | Per-contact routing and multi-touch cancellation |
//! | [`driver`] | Tokio task owning a recognizer and its timer |
//! | [`editor`] | Host-side reactions: select, edit, move, resize |
//! | [`doc`] | Template elements and the in-memory element store |
//! | [`scan`] | Camera/OCR collaborator interface |
//! | [`config`] | Gesture tuning and device presets |
//! | [`geometry`] | Points, deltas, sizes, and clamping |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants (thresholds, default sizes) |

pub mod config;
pub mod consts;
pub mod contacts;
pub mod doc;
pub mod driver;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod recognizer;
pub mod scan;
pub mod session;
pub mod timer;

pub use config::{DeviceProfile, GestureConfig};
pub use error::GestureError;
pub use recognizer::{Gesture, GestureRecognizer};
