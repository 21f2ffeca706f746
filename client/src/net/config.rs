//! Socket endpoint configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Port the local conversion server listens on.
pub const SOCKET_PORT: u16 = 38926;

/// Endpoint configuration for the socket connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocketConfig {
    /// Full websocket URL, e.g. `ws://localhost:38926`.
    pub url: String,
}

impl Default for SocketConfig {
    fn default() -> Self {
        Self::for_host("localhost")
    }
}

impl SocketConfig {
    /// Config pointing at the conversion server on the given host.
    #[must_use]
    pub fn for_host(host: &str) -> Self {
        Self { url: format!("ws://{host}:{SOCKET_PORT}") }
    }

    /// Derive the host from the current browser location, falling back to
    /// `localhost` when unavailable. The server listens on the fixed local
    /// port regardless of the port the page itself was served from.
    #[cfg(feature = "csr")]
    #[must_use]
    pub fn from_browser_location() -> Self {
        let host = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "localhost".to_owned());
        Self::for_host(&host)
    }
}
