//! Admin dashboard, reachable only through the navigation guard.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Admin dashboard — account list for user management.
///
/// The navigation guard has already verified the admin role before this
/// page renders; the page itself only reads.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let users = LocalResource::new(|| crate::net::api::fetch_users());

    let admin_name = move || session.with(|state| state.current().display_name().to_owned());

    view! {
        <div class="admin-page">
            <h1>"Administration"</h1>
            <p class="admin-page__greeting">{move || format!("Signed in as {}", admin_name())}</p>
            <Suspense fallback=move || view! { <p>"Loading accounts..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|list| {
                            view! {
                                <table class="admin-page__table">
                                    <thead>
                                        <tr>
                                            <th>"ID"</th>
                                            <th>"Name"</th>
                                            <th>"Role"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|account| {
                                                view! {
                                                    <tr>
                                                        <td>{account.id.map_or_else(String::new, |id| id.to_string())}</td>
                                                        <td>{account.user_name}</td>
                                                        <td>{account.role.unwrap_or_default()}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
