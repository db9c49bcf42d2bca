//! Dismissible notice banner fed by [`UiState`].

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Banner shown while `UiState::notice` holds a message, e.g. after the
/// navigation guard denies access.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.with(|state| state.notice.is_some())>
            <div class="notice-banner" role="alert">
                <span class="notice-banner__text">
                    {move || ui.with(|state| state.notice.clone().unwrap_or_default())}
                </span>
                <button
                    class="notice-banner__dismiss"
                    on:click=move |_| ui.update(UiState::dismiss)
                >
                    "\u{00d7}"
                </button>
            </div>
        </Show>
    }
}
