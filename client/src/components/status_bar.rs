//! Bottom status bar showing connection status and conversion progress.

use leptos::prelude::*;

use crate::state::conversion::ConversionState;
use crate::state::session::{ConnectionStatus, SessionState};

/// Status bar at the bottom of the page.
///
/// Shows the connection indicator, the conversion status line, and the
/// running success/failure counts.
#[component]
pub fn StatusBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let conversion = expect_context::<RwSignal<ConversionState>>();

    let status_class = move || match session.get().connection_status {
        ConnectionStatus::Open => "status-bar__dot status-bar__dot--open",
        ConnectionStatus::Connecting => "status-bar__dot status-bar__dot--connecting",
        ConnectionStatus::ClosedWithError => "status-bar__dot status-bar__dot--error",
    };

    let status_label = move || match session.get().connection_status {
        ConnectionStatus::Open => "Connected",
        ConnectionStatus::Connecting => "Connecting...",
        ConnectionStatus::ClosedWithError => "Connection error",
    };

    let status_message = move || conversion.get().status_message;
    let counts = move || {
        let c = conversion.get();
        format!("{} converted / {} failed", c.converted, c.failed)
    };

    view! {
        <div class="status-bar">
            <span class="status-bar__connection">
                <span class=status_class></span>
                {status_label}
            </span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__message">{status_message}</span>
            <span class="status-bar__spacer"></span>
            <span class="status-bar__counts">{counts}</span>
        </div>
    }
}
