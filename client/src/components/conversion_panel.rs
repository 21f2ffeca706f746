//! Conversion controls: voice, quality, input folder, and the Convert
//! button.

use leptos::prelude::*;

use crate::net::socket_client::SocketClient;
use crate::state::conversion::ConversionState;
use crate::state::settings::{Quality, SettingsState};

/// Settings form driving the batch conversion run.
///
/// Every settings change is pushed to the server immediately via `set`;
/// the Convert button starts a run with the settings current at click
/// time.
#[component]
pub fn ConversionPanel() -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let conversion = expect_context::<RwSignal<ConversionState>>();
    let socket = expect_context::<RwSignal<SocketClient>>();

    let push_setting = move |kind: &'static str, value: serde_json::Value| {
        let client = socket.get_untracked();
        leptos::task::spawn_local(async move {
            let _ = client.set(kind, value).await;
        });
    };

    let on_voice_change = move |ev| {
        let voice = event_target_value(&ev);
        settings.update(|s| s.voice = voice.clone());
        push_setting("voice", serde_json::json!(voice));
    };

    let on_quality_change = move |ev| {
        let label = event_target_value(&ev);
        let Some(quality) = Quality::from_label(&label) else {
            return;
        };
        settings.update(|s| s.quality = quality);
        push_setting("quality", serde_json::json!(quality.label()));
    };

    let on_folder_change = move |ev| {
        let folder = event_target_value(&ev);
        settings.update(|s| {
            s.input_folder = if folder.is_empty() { None } else { Some(folder.clone()) };
        });
        push_setting("input_folder", serde_json::json!(folder));
    };

    let on_convert = move |_| {
        let s = settings.get_untracked();
        let Some(input_folder) = s.input_folder else {
            return;
        };
        conversion.update(ConversionState::begin_run);
        let client = socket.get_untracked();
        leptos::task::spawn_local(async move {
            // The server echoes start_conversion once the whole batch is
            // done; per-file results stream in as convert_file frames.
            let _ = client
                .set(
                    "start_conversion",
                    serde_json::json!({
                        "voice": s.voice,
                        "quality": s.quality.label(),
                        "input_folder": input_folder,
                    }),
                )
                .await;
            conversion.update(ConversionState::finish_run);
        });
    };

    let can_convert = move || {
        let s = settings.get();
        !conversion.get().running && s.input_folder.as_deref().is_some_and(|f| !f.trim().is_empty())
    };

    view! {
        <div class="conversion-panel">
            <label class="conversion-panel__field">
                "Voice:"
                <select on:change=on_voice_change prop:value=move || settings.get().voice>
                    {move || {
                        settings
                            .get()
                            .available_voices
                            .iter()
                            .map(|voice| view! { <option value=voice.clone()>{voice.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>

            <label class="conversion-panel__field">
                "Quality (Latency):"
                <select on:change=on_quality_change prop:value=move || settings.get().quality.label()>
                    {Quality::ALL
                        .into_iter()
                        .map(|q| view! { <option value=q.label()>{q.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <label class="conversion-panel__field">
                "Input Folder:"
                <input
                    type="text"
                    placeholder="/path/to/audio"
                    prop:value=move || settings.get().input_folder.unwrap_or_default()
                    on:change=on_folder_change
                />
            </label>

            <button class="btn btn--primary" on:click=on_convert disabled=move || !can_convert()>
                "Convert"
            </button>
        </div>
    }
}
