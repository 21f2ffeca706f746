//! Socket-session state: connection lifecycle and fatal server errors.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Session-wide state for the single socket connection.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Current socket connection lifecycle state.
    pub connection_status: ConnectionStatus,
    /// Message of the fatal server error, if one occurred. A set value is
    /// terminal for the session; the UI switches to a blocking error
    /// screen.
    pub fatal_error: Option<String>,
}

impl SessionState {
    /// Record an unrecoverable server failure, overwriting any earlier one.
    pub fn record_fatal_error(&mut self, message: &str) {
        self.fatal_error = Some(message.to_owned());
    }

    /// Whether a fatal server error has been reported.
    #[must_use]
    pub fn fatal_error_occurred(&self) -> bool {
        self.fatal_error.is_some()
    }
}

/// Socket connection status.
///
/// There is no path back from [`ClosedWithError`](Self::ClosedWithError);
/// the connection is opened once per page load and never retried.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// The websocket handshake is in flight (initial state).
    #[default]
    Connecting,
    /// The socket is open and usable.
    Open,
    /// The transport failed; terminal for this page session.
    ClosedWithError,
}
