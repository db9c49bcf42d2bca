use super::*;

// =============================================================
// ApiResponse envelope
// =============================================================

#[test]
fn envelope_success_yields_data() {
    let envelope: ApiResponse<Account> = serde_json::from_value(serde_json::json!({
        "code": 0,
        "data": { "userName": "a", "id": 1, "userRole": "admin" }
    }))
    .expect("envelope");

    let account = envelope.into_data().expect("data");
    assert_eq!(account.user_name, "a");
    assert_eq!(account.id, Some(1));
    assert_eq!(account.role.as_deref(), Some("admin"));
}

#[test]
fn envelope_error_code_discards_data() {
    let envelope: ApiResponse<Account> = serde_json::from_value(serde_json::json!({
        "code": 40100,
        "data": { "userName": "stale" },
        "message": "not logged in"
    }))
    .expect("envelope");

    assert_eq!(envelope.code, CODE_NOT_LOGGED_IN);
    assert!(envelope.into_data().is_none());
}

#[test]
fn bare_error_envelope_decodes_without_data_or_message() {
    // `data` and `message` keys absent entirely; must not require the
    // payload type to implement Default.
    let envelope: ApiResponse<Account> =
        serde_json::from_value(serde_json::json!({ "code": 40100 })).expect("envelope");
    assert_eq!(envelope.code, CODE_NOT_LOGGED_IN);
    assert!(envelope.data.is_none());
    assert!(envelope.message.is_none());
}

#[test]
fn envelope_success_without_data_is_none() {
    let envelope: ApiResponse<Account> =
        serde_json::from_value(serde_json::json!({ "code": 0 })).expect("envelope");
    assert!(envelope.into_data().is_none());
}

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn account_tolerates_missing_optional_fields() {
    let account: Account =
        serde_json::from_value(serde_json::json!({ "userName": "b" })).expect("account");
    assert_eq!(account.user_name, "b");
    assert!(account.id.is_none());
    assert!(account.role.is_none());
}

#[test]
fn picture_tolerates_missing_introduction() {
    let picture: Picture = serde_json::from_value(serde_json::json!({
        "id": 7,
        "name": "sunset",
        "url": "/img/7.jpg"
    }))
    .expect("picture");
    assert_eq!(picture.name, "sunset");
    assert!(picture.introduction.is_none());
}
