//! Error types for gesture recognition and the editor model.

use crate::doc::ElementId;

/// Error returned by the recognizer and the contact gate.
///
/// None of these are fatal. The host logs and drops the offending event; the
/// recognizer has already reset itself to idle by the time it returns one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GestureError {
    /// The event does not fit the current session state (duplicate down,
    /// event for an unknown contact, or a stale timer).
    #[error("invalid gesture state: {0}")]
    InvalidState(&'static str),
    /// A configuration value failed validation.
    #[error("invalid gesture config: {0}")]
    InvalidConfig(String),
}

/// Error surfaced by the camera/OCR collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// The user or the browser refused camera access.
    #[error("camera permission denied")]
    PermissionDenied,
    /// No usable camera, or the recognition engine failed to load.
    #[error("capture device unavailable: {0}")]
    DeviceUnavailable(String),
    /// Recognition finished but produced no text.
    #[error("no text recognized")]
    NoText,
}

/// Error returned by editor operations that name an element.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditorError {
    #[error("unknown element: {0}")]
    UnknownElement(ElementId),
    #[error("element {0} is not a text element")]
    NotText(ElementId),
    #[error("element {0} is not an image element")]
    NotImage(ElementId),
    #[error(transparent)]
    Scan(#[from] ScanError),
}
