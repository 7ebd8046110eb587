//! Traits for credential exchange
//!
//! Abstracts the credential endpoint so the token manager can be tested with
//! mock implementations.

use async_trait::async_trait;

use super::client::AuthClientError;
use super::types::{Credentials, TokenSet};

/// Exchanges a login/password pair for a fresh token
#[async_trait]
pub trait CredentialExchange: Send + Sync {
    /// Perform one password-grant exchange
    ///
    /// # Errors
    /// Returns error if the request fails, the endpoint answers with a
    /// non-success status, or the token payload cannot be decoded
    async fn exchange_password(&self, credentials: &Credentials)
        -> Result<TokenSet, AuthClientError>;
}
