//! Credential and token types
//!
//! Defines the login/password pair supplied by the caller, the token payload
//! returned by the credential endpoint, and the [`TokenSet`] the
//! [`TokenManager`](super::TokenManager) keeps as its single piece of state.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Login and password for the password grant
///
/// Immutable once handed to a token manager. `Debug` never prints the
/// password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    login: String,
    password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self { login: login.into(), password: password.into() }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Access token with metadata and its absolute expiry
///
/// The expiry travels with the token, so replacing the set replaces both at
/// once and no reader can pair a token with another round's expiry.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenSet {
    /// Bearer token for API requests
    pub access_token: String,

    /// Token type reported by the server (normally "Bearer")
    pub token_type: String,

    /// Lifetime in seconds as reported at issue time
    pub expires_in: i64,

    /// Absolute expiration instant (issue time + `expires_in`)
    pub expires_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before_policy: Option<i64>,
}

impl TokenSet {
    /// Bearer token issued now that lives for `expires_in` seconds
    #[must_use]
    pub fn new(access_token: impl Into<String>, expires_in: i64) -> Self {
        Self::issued_at(access_token, expires_in, Utc::now())
    }

    /// Bearer token with an explicit issue instant
    #[must_use]
    pub fn issued_at(
        access_token: impl Into<String>,
        expires_in: i64,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "Bearer".to_string(),
            expires_in,
            expires_at: expiry_after(issued_at, expires_in).unwrap_or(DateTime::<Utc>::MAX_UTC),
            refresh_token: None,
            id_token: None,
            session_state: None,
            scope: None,
            not_before_policy: None,
        }
    }

    /// Override the absolute expiry
    #[must_use]
    pub fn expiring_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Check if the token is expired or will expire within `margin_seconds`
    ///
    /// A token is usable only while `now + margin < expires_at`.
    #[must_use]
    pub fn is_expired(&self, margin_seconds: i64) -> bool {
        self.is_expired_at(Utc::now(), margin_seconds)
    }

    /// Same as [`is_expired`](Self::is_expired) against a fixed instant
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>, margin_seconds: i64) -> bool {
        match Duration::try_seconds(margin_seconds).and_then(|m| now.checked_add_signed(m)) {
            Some(deadline) => deadline >= self.expires_at,
            None => true,
        }
    }

    /// Seconds until expiration (negative once expired)
    #[must_use]
    pub fn seconds_until_expiry(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds()
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSet")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("expires_at", &self.expires_at)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

/// Token payload from the credential endpoint
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub expires_in: i64,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub session_state: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default, rename = "not-before-policy")]
    pub not_before_policy: Option<i64>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// `issued_at + expires_in`, or `None` when the lifetime is out of range
fn expiry_after(issued_at: DateTime<Utc>, expires_in: i64) -> Option<DateTime<Utc>> {
    Duration::try_seconds(expires_in).and_then(|lifetime| issued_at.checked_add_signed(lifetime))
}

impl TokenResponse {
    /// Convert into a [`TokenSet`] whose expiry is `issued_at + expires_in`
    ///
    /// Returns `None` when `expires_in` does not fit a calendar instant.
    #[must_use]
    pub fn into_token_set(self, issued_at: DateTime<Utc>) -> Option<TokenSet> {
        let expires_at = expiry_after(issued_at, self.expires_in)?;
        Some(TokenSet {
            access_token: self.access_token,
            token_type: self.token_type,
            expires_in: self.expires_in,
            expires_at,
            refresh_token: self.refresh_token,
            id_token: self.id_token,
            session_state: self.session_state,
            scope: self.scope,
            not_before_policy: self.not_before_policy,
        })
    }
}
