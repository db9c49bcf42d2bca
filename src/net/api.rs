//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, bounded by
//! [`FETCH_TIMEOUT_MS`]. Server-side (SSR): stubs returning
//! `None`/empty/error since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a failed or
//! timed-out call degrades to "not logged in" / "nothing to show" without
//! crashing the page. A `40100` envelope on any non-probe endpoint means
//! the session expired mid-use; [`intercept_session_expiry`] then sends
//! the whole client back to the login page with a return parameter.

#![allow(clippy::unused_async)]

use super::types::{Account, Picture, CODE_NOT_LOGGED_IN};

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Upper bound for a single backend call.
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

/// Endpoint probed to learn who the current session belongs to.
pub const SESSION_PROBE_URL: &str = "/api/user/get/login";

/// Login page path the expiry interceptor redirects to.
pub const LOGIN_PATH: &str = "/login";

/// Fetch the account bound to the current session cookie.
///
/// Returns `None` when there is no session, the backend is unreachable,
/// the call times out, or on the server. Never an error: navigation must
/// stay usable while the backend is down.
pub async fn fetch_login_user() -> Option<Account> {
    #[cfg(feature = "hydrate")]
    {
        get_envelope::<Account>(SESSION_PROBE_URL).await?.into_data()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log in with account + password via `POST /api/user/login`.
///
/// # Errors
///
/// Returns the backend's message (or a transport description) when the
/// credentials are rejected or the call fails.
pub async fn login(account: &str, password: &str) -> Result<Account, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{ApiResponse, CODE_OK};

        let body = serde_json::json!({
            "userAccount": account,
            "userPassword": password,
        });
        let resp = gloo_net::http::Request::post("/api/user/login")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("login failed: {}", resp.status()));
        }
        let envelope: ApiResponse<Account> = resp.json().await.map_err(|e| e.to_string())?;
        intercept_session_expiry(envelope.code, "/api/user/login");
        if envelope.code == CODE_OK {
            envelope.data.ok_or_else(|| "empty login response".to_owned())
        } else {
            Err(envelope.message.unwrap_or_else(|| "login failed".to_owned()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (account, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/user/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/user/logout").send().await;
    }
}

/// Fetch the public picture list for the gallery page.
pub async fn fetch_pictures() -> Vec<Picture> {
    #[cfg(feature = "hydrate")]
    {
        get_list::<Picture>("/api/picture/list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch all accounts for the admin dashboard.
pub async fn fetch_users() -> Vec<Account> {
    #[cfg(feature = "hydrate")]
    {
        get_list::<Account>("/api/user/list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Whether a `40100` envelope observed on `request_url` while the client
/// is at `current_path` should bounce the client to the login page.
///
/// The session probe is exempt (its "no session" answer is an expected
/// outcome, not an expiry), as is the login page itself.
pub fn session_expiry_redirect(code: i32, request_url: &str, current_path: &str) -> bool {
    code == CODE_NOT_LOGGED_IN
        && !request_url.contains(SESSION_PROBE_URL)
        && !current_path.starts_with(LOGIN_PATH)
}

/// GET `url` and decode the response envelope, `None` on any failure.
#[cfg(feature = "hydrate")]
async fn get_envelope<T: serde::de::DeserializeOwned>(
    url: &str,
) -> Option<super::types::ApiResponse<T>> {
    use super::types::ApiResponse;
    use futures::FutureExt;

    let send = gloo_net::http::Request::get(url).send().fuse();
    let timeout = gloo_timers::future::TimeoutFuture::new(FETCH_TIMEOUT_MS).fuse();
    futures::pin_mut!(send, timeout);

    let resp = futures::select! {
        r = send => r.ok()?,
        _ = timeout => return None,
    };
    if !resp.ok() {
        return None;
    }
    resp.json::<ApiResponse<T>>().await.ok()
}

/// GET a list endpoint, running the envelope through the expiry
/// interceptor. Failures degrade to an empty list.
#[cfg(feature = "hydrate")]
async fn get_list<T: serde::de::DeserializeOwned>(url: &str) -> Vec<T> {
    let Some(envelope) = get_envelope::<Vec<T>>(url).await else {
        return Vec::new();
    };
    intercept_session_expiry(envelope.code, url);
    envelope.into_data().unwrap_or_default()
}

/// Apply [`session_expiry_redirect`] to the live browser location.
#[cfg(feature = "hydrate")]
fn intercept_session_expiry(code: i32, request_url: &str) {
    let Some(window) = web_sys::window() else { return };
    let location = window.location();
    let current_path = location.pathname().unwrap_or_default();
    if !session_expiry_redirect(code, request_url, &current_path) {
        return;
    }
    let href = location.href().unwrap_or_default();
    log::warn!("session expired, redirecting to login");
    let _ = location.set_href(&format!("{LOGIN_PATH}?redirect={href}"));
}
