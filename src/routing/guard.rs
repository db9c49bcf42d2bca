#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::future::Future;

use crate::state::session::Identity;

use super::gate::SessionGate;

/// One route transition, as seen by the guard. Transient — lives for a
/// single evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Full target path, query included.
    pub to: String,
    /// Path the navigation originated from.
    pub from: String,
}

/// Outcome of one guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Replace the navigation target with the login route; the original
    /// target rides along in the `redirect` query parameter.
    Redirect(String),
}

/// Authorization policy: which path prefix is privileged, which role it
/// requires, and where to send everyone else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardPolicy {
    pub protected_prefix: String,
    pub required_role: String,
    pub login_path: String,
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self {
            protected_prefix: "/admin".to_owned(),
            required_role: "admin".to_owned(),
            login_path: "/login".to_owned(),
        }
    }
}

impl GuardPolicy {
    /// Decide a single navigation against the live identity.
    ///
    /// Anything outside the protected prefix is allowed regardless of
    /// identity. Inside it, only an authenticated identity with the
    /// required role passes; everything else (guest, wrong role, missing
    /// role) is sent to the login route.
    pub fn evaluate(&self, request: &NavigationRequest, identity: &Identity) -> GuardDecision {
        if !request.to.starts_with(&self.protected_prefix) {
            return GuardDecision::Allow;
        }
        if identity.has_role(&self.required_role) {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect(self.login_redirect(&request.to))
        }
    }

    /// Login route carrying `to` verbatim as the return parameter.
    pub fn login_redirect(&self, to: &str) -> String {
        format!("{}?redirect={}", self.login_path, to)
    }
}

/// Per-navigation guard algorithm.
///
/// The first navigation suspends on `gate` until `fetch` has populated the
/// session store; all later navigations read the store synchronously. The
/// predicate therefore never runs against a not-yet-populated identity on
/// first load.
pub async fn guard_navigation<F, Fut, R>(
    policy: &GuardPolicy,
    gate: &SessionGate,
    fetch: F,
    read_identity: R,
    request: &NavigationRequest,
) -> GuardDecision
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()> + 'static,
    R: Fn() -> Identity,
{
    gate.ensure_ready(fetch).await;
    policy.evaluate(request, &read_identity())
}
