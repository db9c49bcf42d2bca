//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

/// Home page — short blurb and a link into the gallery.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Gallery"</h1>
            <p>"Browse and share pictures."</p>
            <A href="/gallery" attr:class="btn btn--primary">
                "Open the gallery"
            </A>
        </div>
    }
}
