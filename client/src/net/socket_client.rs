//! WebSocket client for the conversion server.
//!
//! The socket client owns the single connection for the page session:
//! connect, classify and dispatch inbound frames, and carry outbound
//! frames from the get/set broker. There is no reconnect; a transport
//! failure leaves the session in a terminal error state.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "csr")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Transport and parse failures are handled at this boundary and turned
//! into state updates and logging; `get`/`set` callers never see an error,
//! they resolve with the next matching payload or not at all.

#[cfg(test)]
#[path = "socket_client_test.rs"]
mod socket_client_test;

use futures::channel::mpsc;
use serde_json::Value;

use crate::net::pending::PendingRegistry;

#[cfg(feature = "csr")]
use crate::net::config::SocketConfig;
#[cfg(feature = "csr")]
use crate::net::types::ServerMessage;
#[cfg(feature = "csr")]
use crate::state::conversion::ConversionState;
#[cfg(feature = "csr")]
use crate::state::session::{ConnectionStatus, SessionState};
#[cfg(feature = "csr")]
use crate::state::ui::{ERROR_BANNER_VISIBLE_MS, UiState};
#[cfg(feature = "csr")]
use leptos::prelude::Update;

/// Owned handle to the page's socket session: the outbound sender plus
/// the pending-request registry. Cloning shares both.
///
/// A default handle is disconnected: sends are dropped and requests never
/// resolve, mirroring a dead connection.
#[derive(Clone, Default)]
pub struct SocketClient {
    tx: Option<mpsc::UnboundedSender<String>>,
    pending: PendingRegistry,
}

impl SocketClient {
    /// Handle wired to a live outbound channel and registry.
    #[cfg(any(test, feature = "csr"))]
    fn connected(tx: mpsc::UnboundedSender<String>, pending: PendingRegistry) -> Self {
        Self { tx: Some(tx), pending }
    }

    /// Send a raw text frame.
    ///
    /// Returns `false` when there is no usable connection; the frame is
    /// dropped, not queued.
    pub fn send_raw(&self, text: String) -> bool {
        match &self.tx {
            Some(tx) => tx.unbounded_send(text).is_ok(),
            None => false,
        }
    }

    /// Request the named value and await the next frame carrying it.
    ///
    /// Resolves with the first payload of `kind` that arrives strictly
    /// after the request was issued. Returns `None` only if the session
    /// is torn down while waiting; on a dead connection the future simply
    /// never resolves.
    pub async fn get(&self, kind: &str) -> Option<Value> {
        let rx = self.pending.register(kind);
        self.send_raw(frames::encode_request(kind));
        rx.await.ok()
    }

    /// Push the named value and await the server's echo under the same
    /// kind. Same resolution rules as [`get`](Self::get).
    pub async fn set(&self, kind: &str, payload: Value) -> Option<Value> {
        let rx = self.pending.register(kind);
        self.send_raw(frames::encode_frame(&frames::Frame::new(kind, payload)));
        rx.await.ok()
    }
}

/// Spawn the socket client lifecycle as a local async task and return the
/// broker handle for UI code.
///
/// The connection is opened once per page session and never reopened; see
/// [`ConnectionStatus::ClosedWithError`].
#[cfg(feature = "csr")]
pub fn spawn_socket_client(
    config: SocketConfig,
    session: leptos::prelude::RwSignal<SessionState>,
    conversion: leptos::prelude::RwSignal<ConversionState>,
    ui: leptos::prelude::RwSignal<UiState>,
) -> SocketClient {
    let (tx, rx) = mpsc::unbounded::<String>();
    let pending = PendingRegistry::default();
    let client = SocketClient::connected(tx, pending.clone());

    leptos::task::spawn_local(socket_client_loop(config, session, conversion, ui, pending, rx));

    client
}

/// Single-connection lifecycle: connect, pump frames, die on error.
#[cfg(feature = "csr")]
async fn socket_client_loop(
    config: SocketConfig,
    session: leptos::prelude::RwSignal<SessionState>,
    conversion: leptos::prelude::RwSignal<ConversionState>,
    ui: leptos::prelude::RwSignal<UiState>,
    pending: PendingRegistry,
    rx: mpsc::UnboundedReceiver<String>,
) {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    session.update(|s| s.connection_status = ConnectionStatus::Connecting);
    leptos::logging::log!("connecting to {}", config.url);

    let ws = match WebSocket::open(&config.url) {
        Ok(ws) => ws,
        Err(e) => {
            leptos::logging::warn!("socket connect failed: {e}");
            session.update(|s| s.connection_status = ConnectionStatus::ClosedWithError);
            return;
        }
    };
    let (mut ws_write, mut ws_read) = ws.split();

    session.update(|s| s.connection_status = ConnectionStatus::Open);
    leptos::logging::log!("socket connected");

    // Forward outgoing frames from the broker channel to the WS.
    let mut rx = rx;
    let send_task = async {
        use futures::SinkExt;
        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode and dispatch incoming frames.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    dispatch_message(&text, session, conversion, ui, &pending);
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("socket recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run both tasks; when either finishes, the connection is done for good.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    session.update(|s| s.connection_status = ConnectionStatus::ClosedWithError);
    leptos::logging::warn!("socket closed; the conversion server is unreachable until reload");
}

/// Decode one inbound frame and route it.
///
/// Special-cased kinds update UI state first; every decoded frame then
/// resolves pending get/set waiters for its kind. Malformed frames are
/// logged and skipped, leaving the connection intact.
#[cfg(feature = "csr")]
fn dispatch_message(
    text: &str,
    session: leptos::prelude::RwSignal<SessionState>,
    conversion: leptos::prelude::RwSignal<ConversionState>,
    ui: leptos::prelude::RwSignal<UiState>,
    pending: &PendingRegistry,
) {
    let frame = match frames::decode_frame(text) {
        Ok(frame) => frame,
        Err(e) => {
            leptos::logging::warn!("malformed frame: {e}");
            return;
        }
    };

    match ServerMessage::from_frame(&frame) {
        ServerMessage::FatalError(message) => {
            leptos::logging::warn!("fatal server error: {message}");
            session.update(|s| s.record_fatal_error(&message));
        }
        ServerMessage::ConvertFile(result) => {
            conversion.update(|c| c.record_result(&result));
            if result.success {
                leptos::logging::log!(
                    "file converted successfully: {}",
                    result.output_path.as_deref().unwrap_or("<unknown>")
                );
            } else {
                let error = result.error.as_deref().unwrap_or("unknown error");
                let mut seq = 0;
                let message = format!("Error converting file: {error}");
                ui.update(|u| seq = u.show_error_banner(message));
                schedule_banner_dismiss(ui, seq);
            }
        }
        ServerMessage::Value { .. } => {}
    }

    pending.resolve(&frame.kind, &frame.payload);
}

/// Hide the banner once its display window elapses, unless a newer banner
/// has taken its place in the meantime.
#[cfg(feature = "csr")]
fn schedule_banner_dismiss(ui: leptos::prelude::RwSignal<UiState>, seq: u64) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(ERROR_BANNER_VISIBLE_MS)).await;
        ui.update(|u| u.dismiss_error_banner(seq));
    });
}
