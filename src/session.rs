//! Sessions
//!
//! A session is the bearer token handed out at login plus the id of the user it belongs to.
//! The token's expiry is read from its own payload; nothing here verifies the signature,
//! the backend remains the authority on whether a token is valid.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::users::UserId;

/// Errors raised while reading a token's claims.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token is not three dot-separated segments.
    #[error("token is not a three-part JWT")]
    Malformed,

    /// The payload segment is not valid base64url.
    #[error("token payload is not valid base64url")]
    Encoding(#[from] base64::DecodeError),

    /// The payload does not hold the expected claims.
    #[error("token payload is not a valid claims object")]
    Claims(#[from] serde_json::Error),

    /// The expiry claim is outside the representable range.
    #[error("token expiry is out of range")]
    Expiry(#[from] jiff::Error),
}

/// Registered claims carried by the storefront's tokens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    /// Subject, the login email
    #[serde(default)]
    pub sub: String,

    /// Issued at, seconds since the epoch
    #[serde(default)]
    pub iat: i64,

    /// Expires at, seconds since the epoch
    pub exp: i64,
}

impl TokenClaims {
    /// The instant the token stops being accepted.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Expiry`] when `exp` is outside the supported range.
    pub fn expires_at(&self) -> Result<Timestamp, TokenError> {
        Ok(Timestamp::from_second(self.exp)?)
    }
}

/// Decode the payload segment of a JWT without checking its signature.
///
/// # Errors
///
/// Returns a [`TokenError`] when the token is not a JWT or its payload is not a claims object.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let mut segments = token.split('.');

    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;

    Ok(serde_json::from_slice(&bytes)?)
}

/// An authenticated session.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token
    pub token: String,

    /// Authenticated user
    pub user_id: UserId,
}

impl Session {
    /// Create a session from a freshly issued token.
    pub fn new(token: impl Into<String>, user_id: UserId) -> Self {
        Self {
            token: token.into(),
            user_id,
        }
    }

    /// Whether the token's own expiry claim has passed at `now`.
    ///
    /// A token whose claims cannot be read counts as expired.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        !decode_claims(&self.token)
            .and_then(|claims| claims.expires_at())
            .is_ok_and(|expires_at| expires_at >= now)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"**redacted**")
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Top-level view the client shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Login and registration forms.
    Unauthenticated,

    /// Search, product listing and cart.
    Storefront,
}

impl View {
    /// The view for the given session state.
    pub fn for_session(session: Option<&Session>) -> Self {
        if session.is_some() {
            Self::Storefront
        } else {
            Self::Unauthenticated
        }
    }
}
