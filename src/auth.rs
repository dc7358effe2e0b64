//! Auth Token Handling
//!
//! JWT expiry checks plus localStorage persistence of the raw token.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::Utc;

/// localStorage key holding the raw JWT
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Is the stored token still usable? Empty, malformed and expired tokens
/// all count as signed out.
pub fn is_valid_jwt(jwt: &str) -> bool {
    valid_at(jwt, Utc::now().timestamp())
}

/// Expiry check against an explicit timestamp (unix seconds).
pub fn valid_at(jwt: &str, now: i64) -> bool {
    token_expiry(jwt).map(|exp| exp > now).unwrap_or(false)
}

/// Decode the `exp` claim from the token's payload segment. The signature
/// is not verified here; the backend rejects forged tokens.
fn token_expiry(jwt: &str) -> Option<i64> {
    let payload = jwt.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("exp")?.as_i64()
}

// ========================
// localStorage
// ========================

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

pub fn load_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_jwt(claims: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn test_unexpired_token_is_valid() {
        let jwt = make_jwt(json!({ "sub": "user@example.com", "exp": 2_000_000 }));
        assert!(valid_at(&jwt, 1_999_999));
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let jwt = make_jwt(json!({ "exp": 2_000_000 }));
        assert!(!valid_at(&jwt, 2_000_000));
        assert!(!valid_at(&jwt, 2_000_001));
    }

    #[test]
    fn test_empty_token_is_invalid() {
        assert!(!valid_at("", 0));
    }

    #[test]
    fn test_malformed_tokens_are_invalid() {
        assert!(!valid_at("not-a-jwt", 0));
        assert!(!valid_at("only.two", 0));
        let no_exp = make_jwt(json!({ "sub": "user@example.com" }));
        assert!(!valid_at(&no_exp, 0));
    }
}
