//! Bearer-token claims decoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API issues JWTs whose payload carries the user's identity, role, and
//! expiry. The dashboard never verifies signatures (the server does that on
//! every request); it only reads the payload to decide what to render.
//!
//! DESIGN
//! ======
//! Decoding is a validated parse into `Claims` and is pure: expiry is judged
//! against a caller-supplied `now`, and deleting a stale persisted token is
//! left to the session store.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

/// Permission level carried in the token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Writer,
    /// Any role string the dashboard does not know about.
    #[serde(other)]
    Other,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Writer => "writer",
            Role::Other => "other",
        }
    }
}

/// Decoded token payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub role: Role,
    /// Expiry in seconds since the Unix epoch.
    pub exp: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Claims {
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp <= now_secs
    }
}

/// Outcome of inspecting a raw token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenStatus {
    Empty,
    Malformed,
    Expired(Claims),
    Valid(Claims),
}

impl TokenStatus {
    pub fn into_claims(self) -> Option<Claims> {
        match self {
            TokenStatus::Valid(claims) => Some(claims),
            _ => None,
        }
    }
}

/// Classify `token` without side effects.
pub fn inspect_token(token: &str, now_secs: i64) -> TokenStatus {
    let token = token.trim();
    if token.is_empty() {
        return TokenStatus::Empty;
    }
    let Some(claims) = parse_payload(token) else {
        return TokenStatus::Malformed;
    };
    if claims.is_expired(now_secs) {
        TokenStatus::Expired(claims)
    } else {
        TokenStatus::Valid(claims)
    }
}

/// Claims for a present, well-formed, unexpired token; `None` otherwise.
pub fn decode_token(token: &str, now_secs: i64) -> Option<Claims> {
    inspect_token(token, now_secs).into_claims()
}

fn parse_payload(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    if payload.is_empty() {
        return None;
    }
    // Accept padded and standard-alphabet encodings as well as base64url.
    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = URL_SAFE_NO_PAD.decode(normalized).ok()?;
    serde_json::from_slice(&bytes).ok()
}
