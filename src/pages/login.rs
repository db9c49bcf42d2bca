//! Login page with the account/password form.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
#[cfg(feature = "hydrate")]
use leptos_router::{hooks::use_navigate, NavigateOptions};

#[cfg(feature = "hydrate")]
use crate::state::session::Identity;
use crate::state::session::SessionState;

/// Login page — on success stores the returned account in the session and
/// navigates to the `redirect` query parameter (or home).
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let account = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let submit = Callback::new(move |_| {
        let account_value = account.get();
        let password_value = password.get();
        if account_value.trim().is_empty() || password_value.is_empty() {
            error.set(Some("Enter an account and a password.".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let target = query
                .with_untracked(|q| q.get("redirect"))
                .unwrap_or_else(|| "/".to_owned());
            leptos::task::spawn_local(async move {
                match crate::net::api::login(account_value.trim(), &password_value).await {
                    Ok(logged_in) => {
                        session.update(|state| state.set(Identity::Authenticated(logged_in)));
                        navigate(&target, NavigateOptions::default());
                    }
                    Err(message) => error.set(Some(message)),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &query, account_value, password_value);
        }
    });

    view! {
        <div class="login-page">
            <h1>"Log in"</h1>
            <Show when=move || error.with(Option::is_some)>
                <p class="login-page__error" role="alert">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
            <label class="login-page__label">
                "Account"
                <input
                    class="login-page__input"
                    type="text"
                    prop:value=move || account.get()
                    on:input=move |ev| account.set(event_target_value(&ev))
                />
            </label>
            <label class="login-page__label">
                "Password"
                <input
                    class="login-page__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                "Log in"
            </button>
        </div>
    }
}
