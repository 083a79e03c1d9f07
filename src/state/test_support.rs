//! Token minting helpers shared by state tests.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::session::{Session, SessionAction, reduce};

pub(crate) const NOW: i64 = 1_700_000_000;

pub(crate) fn fixed_now() -> i64 {
    NOW
}

/// Build an unsigned JWT-shaped token around `payload`.
pub(crate) fn mint(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

pub(crate) fn token_for(role: &str, exp: i64) -> String {
    mint(&serde_json::json!({ "id": format!("{role}-1"), "name": format!("{role} user"), "role": role, "exp": exp }))
}

/// Session signed in with `token`, as of `NOW`.
pub(crate) fn session_from(token: &str) -> Session {
    reduce(&Session::default(), SessionAction::LoginSuccess { token: token.to_owned() }, NOW)
}
