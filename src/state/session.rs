#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Account;

/// Display name used while no one is signed in.
pub const GUEST_NAME: &str = "not logged in";

/// The principal a session resolves to.
///
/// Pattern-match instead of probing optional fields: an
/// `Authenticated` account may still lack a role, which simply never
/// matches a required one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Identity {
    #[default]
    Unauthenticated,
    Authenticated(Account),
}

impl Identity {
    /// Name to show in the nav bar.
    pub fn display_name(&self) -> &str {
        match self {
            Identity::Unauthenticated => GUEST_NAME,
            Identity::Authenticated(account) => &account.user_name,
        }
    }

    /// Whether this identity carries exactly the given role.
    pub fn has_role(&self, role: &str) -> bool {
        match self {
            Identity::Unauthenticated => false,
            Identity::Authenticated(account) => account.role.as_deref() == Some(role),
        }
    }
}

/// Session state holding the single live [`Identity`].
///
/// The field is private on purpose: the identity is only ever replaced
/// wholesale via [`SessionState::set`] or [`SessionState::apply_fetch`],
/// never mutated field-by-field from outside.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    identity: Identity,
}

impl SessionState {
    /// The live identity. Synchronous, no side effects.
    pub fn current(&self) -> &Identity {
        &self.identity
    }

    /// Wholesale overwrite, used by explicit login/logout actions.
    pub fn set(&mut self, identity: Identity) {
        self.identity = identity;
    }

    /// Apply the outcome of a session probe.
    ///
    /// `None` (provider failure, timeout, or no session) leaves the
    /// current value untouched so navigation stays usable while the
    /// backend is unavailable.
    pub fn apply_fetch(&mut self, fetched: Option<Account>) {
        if let Some(account) = fetched {
            self.identity = Identity::Authenticated(account);
        }
    }
}
