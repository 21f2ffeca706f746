//! Transient error banner for per-file conversion failures.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Auto-dismissing banner; the dismissal timer is armed by the socket
/// client when it puts a message here.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let banner_class = move || {
        if ui.get().error_banner.is_some() {
            "error-banner"
        } else {
            "error-banner error-banner--hidden"
        }
    };
    let banner_text = move || ui.get().error_banner.unwrap_or_default();

    view! { <div class=banner_class>{banner_text}</div> }
}
