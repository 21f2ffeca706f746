//! Blocking overlay shown after a fatal server error.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Full-page overlay; rendered only once the session reports a fatal
/// error, and never dismissed — the session is over.
#[component]
pub fn FatalErrorScreen() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        {move || {
            session.get().fatal_error.map(|message| {
                view! {
                    <div class="fatal-error">
                        <h1>"Something went wrong"</h1>
                        <p class="fatal-error__message">{message}</p>
                        <p class="fatal-error__hint">
                            "Restart the conversion server, then reload this page."
                        </p>
                    </div>
                }
            })
        }}
    }
}
