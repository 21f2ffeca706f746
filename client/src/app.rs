//! Root application component and shared context wiring.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::conversion_panel::ConversionPanel;
use crate::components::error_banner::ErrorBanner;
use crate::components::fatal_error_screen::FatalErrorScreen;
use crate::components::status_bar::StatusBar;
use crate::net::socket_client::SocketClient;
use crate::state::conversion::ConversionState;
use crate::state::session::SessionState;
use crate::state::settings::SettingsState;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the shared state contexts, opens the socket session, and lays
/// out the single-screen conversion UI.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let settings = RwSignal::new(SettingsState::default());
    let conversion = RwSignal::new(ConversionState::default());
    let ui = RwSignal::new(UiState::default());
    let socket = RwSignal::new(SocketClient::default());

    provide_context(session);
    provide_context(settings);
    provide_context(conversion);
    provide_context(ui);
    provide_context(socket);

    #[cfg(feature = "csr")]
    {
        use crate::net::config::SocketConfig;
        use crate::net::socket_client::spawn_socket_client;

        let client = spawn_socket_client(SocketConfig::from_browser_location(), session, conversion, ui);
        socket.set(client.clone());

        // Ask the server for its voice catalog; the built-in list stays in
        // place if it never answers.
        leptos::task::spawn_local(async move {
            if let Some(value) = client.get("voices").await
                && let Ok(voices) = serde_json::from_value::<Vec<String>>(value)
                && !voices.is_empty()
            {
                settings.update(|s| s.available_voices = voices);
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/voice-changer.css"/>
        <Title text="Batch Voice Changer"/>

        <ErrorBanner/>
        <FatalErrorScreen/>
        <main class="workspace">
            <h1>"Batch Voice Changer"</h1>
            <ConversionPanel/>
            <StatusBar/>
        </main>
    }
}
