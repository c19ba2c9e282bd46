//! Camera/OCR collaborator interface.
//!
//! The host owns the camera stream and the recognition engine. The editor
//! only needs "give me the text you found, or tell me why you couldn't".

#[cfg(test)]
#[path = "scan_test.rs"]
mod scan_test;

use std::future::Future;

use crate::error::ScanError;

/// Captures a frame and runs text recognition on it.
pub trait TextScanner {
    /// Resolve to the recognized text, or to the reason there is none.
    fn scan(&mut self) -> impl Future<Output = Result<String, ScanError>>;
}

/// Trim recognizer output and reject blank results.
pub fn normalize_scanned_text(raw: &str) -> Result<String, ScanError> {
    let lines: Vec<&str> = raw.lines().map(str::trim_end).collect();
    let text = lines.join("\n");
    let text = text.trim();
    if text.is_empty() {
        return Err(ScanError::NoText);
    }
    Ok(text.to_string())
}
