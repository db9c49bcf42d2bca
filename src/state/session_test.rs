use super::*;

fn admin() -> Account {
    Account {
        user_name: "a".to_owned(),
        id: Some(1),
        role: Some("admin".to_owned()),
    }
}

// =============================================================
// Identity
// =============================================================

#[test]
fn default_identity_is_unauthenticated_placeholder() {
    let identity = Identity::default();
    assert_eq!(identity, Identity::Unauthenticated);
    assert_eq!(identity.display_name(), GUEST_NAME);
}

#[test]
fn has_role_matches_exact_role_only() {
    assert!(Identity::Authenticated(admin()).has_role("admin"));
    assert!(!Identity::Authenticated(admin()).has_role("editor"));
    assert!(!Identity::Unauthenticated.has_role("admin"));
}

#[test]
fn has_role_is_false_when_role_is_absent() {
    let account = Account {
        user_name: "b".to_owned(),
        id: None,
        role: None,
    };
    assert!(!Identity::Authenticated(account).has_role("admin"));
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn reads_are_idempotent_without_intervening_writes() {
    let state = SessionState::default();
    assert_eq!(state.current(), state.current());
    assert_eq!(*state.current(), Identity::Unauthenticated);
}

#[test]
fn set_overwrites_wholesale() {
    let mut state = SessionState::default();
    state.set(Identity::Authenticated(admin()));
    assert_eq!(state.current().display_name(), "a");

    state.set(Identity::Unauthenticated);
    assert_eq!(*state.current(), Identity::Unauthenticated);
}

#[test]
fn apply_fetch_with_account_authenticates() {
    let mut state = SessionState::default();
    state.apply_fetch(Some(admin()));
    assert!(state.current().has_role("admin"));
}

#[test]
fn apply_fetch_failure_keeps_placeholder() {
    let mut state = SessionState::default();
    state.apply_fetch(None);
    assert_eq!(*state.current(), Identity::Unauthenticated);
}

#[test]
fn apply_fetch_failure_keeps_existing_login() {
    let mut state = SessionState::default();
    state.set(Identity::Authenticated(admin()));
    state.apply_fetch(None);
    assert!(state.current().has_role("admin"));
}
