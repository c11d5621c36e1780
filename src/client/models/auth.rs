//! Authentication models and bearer-token decoding

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Credentials sent to the auth service
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from `POST /login`
///
/// The auth service also echoes profile fields, but only the token is
/// consumed; the profile of record comes from the employee service.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Bearer token with its decoded expiry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtToken {
    /// The raw token string
    pub token: String,

    /// Token expiration time
    pub expires_at: DateTime<Utc>,
}

/// Claims carried in the token payload.
///
/// The client decodes the payload but does not verify the signature; the
/// services do that on every call.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    /// Subject: the account email
    pub sub: String,

    /// Expiry, Unix seconds
    pub exp: i64,
}

impl TokenClaims {
    /// Decode the claims out of a `header.payload.signature` token.
    pub fn decode(token: &str) -> Result<Self, ApiError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(ApiError::InvalidToken);
        }

        let payload_bytes = base64_decode_url(parts[1]).map_err(|_| ApiError::InvalidToken)?;

        serde_json::from_slice(&payload_bytes).map_err(|_| ApiError::InvalidToken)
    }

    /// Expiry instant, if `exp` is a representable timestamp
    pub fn expires_at(&self) -> Result<DateTime<Utc>, ApiError> {
        DateTime::from_timestamp(self.exp, 0).ok_or(ApiError::InvalidToken)
    }

    /// True when `exp` is in the past
    pub fn is_expired(&self) -> bool {
        self.exp < Utc::now().timestamp()
    }
}

/// Decode base64url (URL-safe base64 without padding)
fn base64_decode_url(input: &str) -> Result<Vec<u8>, String> {
    use base64::{Engine as _, engine::general_purpose};

    let standard_b64 = input.replace('-', "+").replace('_', "/");

    let padding = match standard_b64.len() % 4 {
        0 => "",
        2 => "==",
        3 => "=",
        _ => return Err("Invalid base64url length".to_string()),
    };

    let padded = format!("{}{}", standard_b64, padding);

    general_purpose::STANDARD
        .decode(&padded)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
pub(crate) fn encode_token(sub: &str, exp: i64) -> String {
    use base64::{Engine as _, engine::general_purpose};

    let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = general_purpose::URL_SAFE_NO_PAD
        .encode(format!(r#"{{"sub":"{}","exp":{}}}"#, sub, exp));
    format!("{}.{}.sig", header, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_extracts_sub_and_exp() {
        let token = encode_token("a@b.com", 2_000_000_000);
        let claims = TokenClaims::decode(&token).unwrap();
        assert_eq!(claims.sub, "a@b.com");
        assert_eq!(claims.exp, 2_000_000_000);
    }

    #[test]
    fn decode_rejects_wrong_segment_count() {
        assert!(matches!(
            TokenClaims::decode("not-a-token"),
            Err(ApiError::InvalidToken)
        ));
        assert!(matches!(
            TokenClaims::decode("a.b"),
            Err(ApiError::InvalidToken)
        ));
    }

    #[test]
    fn decode_rejects_garbage_payload() {
        assert!(matches!(
            TokenClaims::decode("aGVhZGVy.!!!.c2ln"),
            Err(ApiError::InvalidToken)
        ));
    }

    #[test]
    fn expiry_in_the_past_is_expired() {
        let token = encode_token("a@b.com", Utc::now().timestamp() - 3600);
        let claims = TokenClaims::decode(&token).unwrap();
        assert!(claims.is_expired());
    }

    #[test]
    fn expiry_in_the_future_is_not_expired() {
        let token = encode_token("a@b.com", Utc::now().timestamp() + 3600);
        let claims = TokenClaims::decode(&token).unwrap();
        assert!(!claims.is_expired());
    }
}
