//! Typed classification of inbound socket frames.
//!
//! DESIGN
//! ======
//! The wire keys every frame by a free-form kind string; this module turns
//! the kinds the UI reacts to into a closed union so dispatch code gets
//! real payload shapes instead of ad-hoc string splitting.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use frames::Frame;

/// Frame kind the server uses to report an unrecoverable failure.
pub const FATAL_ERROR_KIND: &str = "fatal_error";
/// Frame kind the server uses to report a finished file conversion.
pub const CONVERT_FILE_KIND: &str = "convert_file";

/// Result payload of a `convert_file` frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvertFileResult {
    /// Whether the conversion of this file succeeded.
    pub success: bool,
    /// Where the converted file was written, on success.
    #[serde(default)]
    pub output_path: Option<String>,
    /// Human-readable failure description, on failure.
    #[serde(default)]
    pub error: Option<String>,
}

/// An inbound frame, classified by kind.
///
/// The special-cased kinds drive UI side effects; everything else is an
/// opaque named value consumed by the get/set broker.
#[derive(Clone, Debug, PartialEq)]
pub enum ServerMessage {
    /// Unrecoverable server failure; the session is over.
    FatalError(String),
    /// A background file conversion finished.
    ConvertFile(ConvertFileResult),
    /// Any other named value.
    Value { kind: String, payload: Value },
}

impl ServerMessage {
    /// Classify a decoded frame.
    ///
    /// Unparseable special-case payloads fall through to
    /// [`ServerMessage::Value`] rather than being dropped, so the broker
    /// still resolves waiters for those kinds.
    #[must_use]
    pub fn from_frame(frame: &Frame) -> Self {
        match frame.kind.as_str() {
            FATAL_ERROR_KIND => {
                let message = frame
                    .payload
                    .as_str()
                    .map_or_else(|| frame.payload.to_string(), str::to_owned);
                Self::FatalError(message)
            }
            CONVERT_FILE_KIND => {
                match serde_json::from_value::<ConvertFileResult>(frame.payload.clone()) {
                    Ok(result) => Self::ConvertFile(result),
                    Err(_) => Self::passthrough(frame),
                }
            }
            _ => Self::passthrough(frame),
        }
    }

    fn passthrough(frame: &Frame) -> Self {
        Self::Value { kind: frame.kind.clone(), payload: frame.payload.clone() }
    }
}
