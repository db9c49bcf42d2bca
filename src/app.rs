//! Root application component with routing, context providers, and the
//! navigation guard wiring.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
    NavigateOptions, StaticSegment,
};

use crate::components::{nav_bar::NavBar, notice_banner::NoticeBanner};
use crate::pages::{
    admin::AdminDashboardPage, gallery::GalleryPage, home::HomePage, login::LoginPage,
};
use crate::routing::{guard_navigation, GuardDecision, GuardPolicy, NavigationRequest, SessionGate};
use crate::state::{session::SessionState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing
/// behind the navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(session);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/gallery-client.css"/>
        <Title text="Gallery"/>

        <Router>
            <NavigationGuard>
                <NavBar/>
                <NoticeBanner/>
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("gallery") view=GalleryPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route
                            path=(StaticSegment("admin"), StaticSegment("dashboard"))
                            view=AdminDashboardPage
                        />
                    </Routes>
                </main>
            </NavigationGuard>
        </Router>
    }
}

/// Runs the guard on every route transition.
///
/// The very first transition suspends on the session gate until the
/// backend probe answers (or times out); later transitions read the store
/// synchronously. A denied transition posts a notice and replaces the
/// target with the login route carrying the original path.
#[component]
fn NavigationGuard(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let navigate = use_navigate();

    let gate = Rc::new(SessionGate::new());
    let policy = GuardPolicy::default();
    let previous = RefCell::new(String::from("/"));

    Effect::new(move || {
        let pathname = location.pathname.get();
        let search = location.search.get();
        let to = if search.is_empty() {
            pathname
        } else {
            format!("{pathname}?{search}")
        };
        let from = previous.replace(to.clone());
        let request = NavigationRequest { to, from };

        let gate = gate.clone();
        let policy = policy.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let decision = guard_navigation(
                &policy,
                &gate,
                move || async move {
                    let fetched = crate::net::api::fetch_login_user().await;
                    session.update(|state| state.apply_fetch(fetched));
                },
                move || session.with_untracked(|state| state.current().clone()),
                &request,
            )
            .await;

            if let GuardDecision::Redirect(target) = decision {
                #[cfg(feature = "hydrate")]
                log::warn!("access denied: {} requires the admin role", request.to);
                ui.update(|state| state.notify("You need administrator access for that page."));
                navigate(&target, NavigateOptions { replace: true, ..Default::default() });
            }
        });
    });

    children()
}
