use super::*;
use crate::state::test_support::{NOW, mint};
use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

fn admin_payload(exp: i64) -> serde_json::Value {
    serde_json::json!({ "id": "u1", "name": "Ada", "role": "admin", "exp": exp })
}

#[test]
fn empty_token_is_absent() {
    assert_eq!(inspect_token("", NOW), TokenStatus::Empty);
    assert_eq!(inspect_token("   ", NOW), TokenStatus::Empty);
    assert_eq!(decode_token("", NOW), None);
}

#[test]
fn garbage_token_is_malformed() {
    assert_eq!(inspect_token("not-a-token", NOW), TokenStatus::Malformed);
    assert_eq!(inspect_token("a.%%%.c", NOW), TokenStatus::Malformed);
    assert_eq!(inspect_token("a..c", NOW), TokenStatus::Malformed);
}

#[test]
fn non_json_payload_is_malformed() {
    let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("hello"));
    assert_eq!(inspect_token(&token, NOW), TokenStatus::Malformed);
}

#[test]
fn missing_required_claims_is_malformed() {
    let token = mint(&serde_json::json!({ "id": "u1", "name": "Ada", "role": "admin" }));
    assert_eq!(decode_token(&token, NOW), None);
    assert_eq!(inspect_token(&token, NOW), TokenStatus::Malformed);
}

#[test]
fn future_expiry_returns_payload_claims() {
    let token = mint(&admin_payload(NOW + 3600));
    let claims = decode_token(&token, NOW).expect("valid claims");
    assert_eq!(claims.id, "u1");
    assert_eq!(claims.name, "Ada");
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(claims.exp, NOW + 3600);
    assert_eq!(claims.email, None);
}

#[test]
fn expiry_equal_to_now_is_expired() {
    let token = mint(&admin_payload(NOW));
    assert!(matches!(inspect_token(&token, NOW), TokenStatus::Expired(_)));
    assert_eq!(decode_token(&token, NOW), None);
}

#[test]
fn past_expiry_is_expired() {
    let token = mint(&admin_payload(NOW - 1));
    assert!(matches!(inspect_token(&token, NOW), TokenStatus::Expired(c) if c.id == "u1"));
}

#[test]
fn mongo_style_id_alias_is_accepted() {
    let token = mint(&serde_json::json!({
        "_id": "64f0c2", "name": "Wren", "role": "writer", "exp": NOW + 10, "category": "Sports"
    }));
    let claims = decode_token(&token, NOW).expect("valid claims");
    assert_eq!(claims.id, "64f0c2");
    assert_eq!(claims.role, Role::Writer);
    assert_eq!(claims.category.as_deref(), Some("Sports"));
}

#[test]
fn unknown_role_parses_as_other() {
    let token = mint(&serde_json::json!({ "id": "u9", "name": "Guest", "role": "editor", "exp": NOW + 10 }));
    assert_eq!(decode_token(&token, NOW).map(|c| c.role), Some(Role::Other));
}

#[test]
fn padded_standard_alphabet_payload_is_accepted() {
    let payload = admin_payload(NOW + 60).to_string();
    let token = format!("h.{}.s", STANDARD.encode(payload));
    assert_eq!(decode_token(&token, NOW).map(|c| c.name), Some("Ada".to_owned()));
}

#[test]
fn role_as_str_matches_wire_names() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Writer.as_str(), "writer");
}
