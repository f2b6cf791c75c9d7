// SPDX-License-Identifier: Apache-2.0

//! Session tokens: `payload.signature`, where payload is hex-encoded JSON
//! claims and signature is HMAC-SHA256 over the payload with the server
//! secret. Issued on login, checked for signature and expiry only.

use axum::http::HeaderMap;
use henhouse_model::{Role, User};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthClaims {
    pub user_id: i64,
    pub email: String,
    pub role: Role,
    pub exp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthError {
    Missing,
    Malformed,
    BadSignature,
    Expired,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "no token supplied"),
            Self::Malformed => write!(f, "token is malformed"),
            Self::BadSignature => write!(f, "token signature mismatch"),
            Self::Expired => write!(f, "token expired"),
        }
    }
}

impl std::error::Error for AuthError {}

pub struct TokenSigner {
    secret: String,
    ttl_secs: u64,
}

impl TokenSigner {
    #[must_use]
    pub fn new(secret: impl Into<String>, ttl_secs: u64) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs,
        }
    }

    fn signature(&self, payload: &str) -> Option<String> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.as_bytes()).ok()?;
        mac.update(payload.as_bytes());
        Some(hex::encode(mac.finalize().into_bytes()))
    }

    /// Mints a token for `user` expiring `ttl_secs` after `now_unix`.
    pub fn mint(&self, user: &User, now_unix: i64) -> Result<String, AuthError> {
        let claims = AuthClaims {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role,
            exp: now_unix + self.ttl_secs as i64,
        };
        let json = serde_json::to_vec(&claims).map_err(|_| AuthError::Malformed)?;
        let payload = hex::encode(json);
        let signature = self.signature(&payload).ok_or(AuthError::BadSignature)?;
        Ok(format!("{payload}.{signature}"))
    }

    pub fn verify(&self, token: &str, now_unix: i64) -> Result<AuthClaims, AuthError> {
        let (payload, signature) = token.split_once('.').ok_or(AuthError::Malformed)?;
        if self.signature(payload).as_deref() != Some(signature) {
            return Err(AuthError::BadSignature);
        }
        let json = hex::decode(payload).map_err(|_| AuthError::Malformed)?;
        let claims: AuthClaims =
            serde_json::from_slice(&json).map_err(|_| AuthError::Malformed)?;
        if claims.exp <= now_unix {
            return Err(AuthError::Expired);
        }
        Ok(claims)
    }
}

/// Token from the `auth-token` cookie when present, falling back to a
/// `Bearer` authorization header. Matches what the dashboard sends.
#[must_use]
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(raw) = headers.get("cookie").and_then(|v| v.to_str().ok()) {
        for part in raw.split(';') {
            if let Some((name, value)) = part.trim().split_once('=') {
                if name == "auth-token" && !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
