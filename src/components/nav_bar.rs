//! Top navigation bar with links and the session widget.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::state::session::{Identity, SessionState};

/// Navigation bar — page links on the left, the current user (or a login
/// link) on the right.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let display_name = move || session.with(|state| state.current().display_name().to_owned());
    let logged_in = move || {
        session.with(|state| !matches!(state.current(), Identity::Unauthenticated))
    };
    let is_admin = move || session.with(|state| state.current().has_role("admin"));

    let on_logout = Callback::new(move |()| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            session.update(|state| state.set(Identity::Unauthenticated));
            navigate("/", NavigateOptions::default());
        });
    });

    view! {
        <nav class="nav-bar">
            <A href="/" attr:class="nav-bar__brand">"Gallery"</A>
            <A href="/gallery" attr:class="nav-bar__link">"Pictures"</A>
            <Show when=is_admin>
                <A href="/admin/dashboard" attr:class="nav-bar__link">"Admin"</A>
            </Show>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__user">{display_name}</span>
            <Show
                when=logged_in
                fallback=|| view! { <A href="/login" attr:class="nav-bar__link">"Log in"</A> }
            >
                <button class="nav-bar__logout" on:click=move |_| on_logout.run(())>
                    "Log out"
                </button>
            </Show>
        </nav>
    }
}
