//! Shared frame model and text codec for the realtime socket transport.
//!
//! This crate owns the wire representation used on the persistent socket
//! between the browser UI and the local conversion server: one text frame
//! per message, a kind tag and a JSON payload joined by a single colon.
//! Payloads intentionally stay flexible (`serde_json::Value`) so the
//! client can broker arbitrary named values without a schema per kind.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error returned by [`decode_frame`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text has no `:` separator between kind and payload.
    #[error("frame has no ':' separator between kind and payload")]
    MissingSeparator,
    /// The payload section is not valid JSON.
    #[error("failed to parse frame payload as JSON: {0}")]
    Payload(#[from] serde_json::Error),
}

/// A single message on the socket wire protocol.
///
/// Wire form is `"<kind>:<json>"`. The kind must not contain a colon;
/// the payload JSON may, since decoding splits at the first colon only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Message kind tag, e.g. `"convert_file"`.
    pub kind: String,
    /// Arbitrary JSON payload.
    pub payload: Value,
}

impl Frame {
    /// Build a frame from a kind tag and payload.
    #[must_use]
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self { kind: kind.into(), payload }
    }
}

/// Encode a payload-less request: the bare kind string, no colon.
#[must_use]
pub fn encode_request(kind: &str) -> String {
    kind.to_owned()
}

/// Encode a frame into its text wire form.
#[must_use]
pub fn encode_frame(frame: &Frame) -> String {
    // Serializing a `serde_json::Value` cannot fail; object keys are
    // always strings.
    let payload = serde_json::to_string(&frame.payload).unwrap_or_else(|_| Value::Null.to_string());
    format!("{}:{payload}", frame.kind)
}

/// Decode a text frame, splitting at the first colon only.
///
/// # Errors
///
/// Returns [`CodecError::MissingSeparator`] for text without a colon and
/// [`CodecError::Payload`] when the payload section is not valid JSON.
pub fn decode_frame(text: &str) -> Result<Frame, CodecError> {
    let (kind, payload) = text.split_once(':').ok_or(CodecError::MissingSeparator)?;
    let payload = serde_json::from_str(payload)?;
    Ok(Frame { kind: kind.to_owned(), payload })
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
