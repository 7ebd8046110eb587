//! Token manager
//!
//! Owns the credentials and the current [`TokenSet`]:
//! - Re-authenticates when no token exists or it is inside the refresh margin
//! - Serializes the check-and-swap so at most one exchange is in flight
//! - Runs every exchange inside the caller's [`RequestContext`]
//!
//! There is no background refresh loop; refresh happens lazily on the next
//! request that needs a token.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use super::client::AuthClientError;
use super::traits::CredentialExchange;
use super::types::{Credentials, TokenSet};
use crate::context::{ContextError, RequestContext};

/// Error type for token manager operations
#[derive(Debug)]
pub enum TokenManagerError {
    /// No credentials were supplied to this manager
    MissingCredentials,

    /// Credential exchange failed
    Exchange(AuthClientError),

    /// The request context stopped the exchange
    Context(ContextError),
}

impl std::fmt::Display for TokenManagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredentials => write!(f, "No credentials configured"),
            Self::Exchange(e) => write!(f, "Credential exchange failed: {e}"),
            Self::Context(e) => write!(f, "Credential exchange interrupted: {e}"),
        }
    }
}

impl std::error::Error for TokenManagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingCredentials => None,
            Self::Exchange(e) => Some(e),
            Self::Context(e) => Some(e),
        }
    }
}

impl From<AuthClientError> for TokenManagerError {
    fn from(err: AuthClientError) -> Self {
        Self::Exchange(err)
    }
}

impl From<ContextError> for TokenManagerError {
    fn from(err: ContextError) -> Self {
        Self::Context(err)
    }
}

/// Single-writer owner of the current token
///
/// The token lives behind a `tokio::sync::Mutex` that stays locked across the
/// whole check-and-exchange, so concurrent callers observing an expiring
/// token wait for one exchange instead of racing their own.
#[derive(Debug)]
pub struct TokenManager<C: CredentialExchange + 'static> {
    exchange: Arc<C>,
    credentials: Option<Credentials>,
    current: Mutex<Option<TokenSet>>,
    refresh_margin_seconds: i64,
}

impl<C: CredentialExchange + 'static> TokenManager<C> {
    /// Create a new token manager
    ///
    /// # Arguments
    /// * `exchange` - Credential exchange used to obtain tokens
    /// * `credentials` - Login/password pair; `None` makes every token
    ///   request fail with [`TokenManagerError::MissingCredentials`]
    /// * `refresh_margin_seconds` - Treat tokens as expired this many seconds
    ///   before their real expiry
    #[must_use]
    pub fn new(
        exchange: C,
        credentials: Option<Credentials>,
        refresh_margin_seconds: i64,
    ) -> Self {
        Self::with_shared_exchange(Arc::new(exchange), credentials, refresh_margin_seconds)
    }

    /// Same as [`new`](Self::new) with an exchange shared elsewhere
    #[must_use]
    pub fn with_shared_exchange(
        exchange: Arc<C>,
        credentials: Option<Credentials>,
        refresh_margin_seconds: i64,
    ) -> Self {
        Self { exchange, credentials, current: Mutex::new(None), refresh_margin_seconds }
    }

    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn refresh_margin_seconds(&self) -> i64 {
        self.refresh_margin_seconds
    }

    /// Return a usable token, authenticating first if needed
    ///
    /// Authenticates when no token exists or `now + margin >= expires_at`;
    /// otherwise returns the stored token without any network call.
    ///
    /// # Errors
    /// Returns error if:
    /// - No credentials were configured
    /// - The exchange fails (no retry)
    /// - The context is cancelled or its deadline passes during the exchange
    #[instrument(skip_all)]
    pub async fn ensure_valid(&self, ctx: &RequestContext) -> Result<TokenSet, TokenManagerError> {
        let credentials = self.credentials.as_ref().ok_or(TokenManagerError::MissingCredentials)?;

        let mut current = self.current.lock().await;
        match current.as_ref() {
            Some(token) if !token.is_expired(self.refresh_margin_seconds) => {
                return Ok(token.clone());
            }
            Some(token) => debug!(
                seconds_until_expiry = token.seconds_until_expiry(),
                "Token inside refresh margin, re-authenticating"
            ),
            None => debug!("No token yet, authenticating"),
        }

        let fresh = self.exchange(ctx, credentials).await?;
        *current = Some(fresh.clone());
        Ok(fresh)
    }

    /// Force a credential exchange and replace the current token
    ///
    /// # Errors
    /// Same as [`ensure_valid`](Self::ensure_valid). On failure the previous
    /// token is left untouched.
    #[instrument(skip_all)]
    pub async fn authenticate(&self, ctx: &RequestContext) -> Result<TokenSet, TokenManagerError> {
        let credentials = self.credentials.as_ref().ok_or(TokenManagerError::MissingCredentials)?;

        let mut current = self.current.lock().await;
        let fresh = self.exchange(ctx, credentials).await?;
        *current = Some(fresh.clone());
        Ok(fresh)
    }

    /// Replace the current token without an exchange
    pub async fn set_token(&self, token: TokenSet) {
        *self.current.lock().await = Some(token);
    }

    /// Current token, if any (no refresh)
    pub async fn current_token(&self) -> Option<TokenSet> {
        self.current.lock().await.clone()
    }

    /// Drop the current token; the next request re-authenticates
    pub async fn clear(&self) {
        *self.current.lock().await = None;
    }

    async fn exchange(
        &self,
        ctx: &RequestContext,
        credentials: &Credentials,
    ) -> Result<TokenSet, TokenManagerError> {
        let token = ctx.run(self.exchange.exchange_password(credentials)).await??;

        info!(
            login = credentials.login(),
            expires_in_secs = token.expires_in,
            "Authenticated"
        );

        Ok(token)
    }
}
