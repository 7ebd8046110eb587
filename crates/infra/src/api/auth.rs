//! Bearer token supply for the GraphQL transport
//!
//! The transport asks an [`AccessTokenProvider`] for a token before every
//! request. The production provider is the shared [`TokenManager`], which
//! re-authenticates with the configured credentials when the current token
//! is missing or about to expire.

use async_trait::async_trait;
use reqwest::Client;
use s21_common::auth::{
    CredentialExchange, Credentials, PasswordGrantClient, PasswordGrantConfig, TokenManager,
};
use s21_common::context::RequestContext;
use s21_domain::constants::{AUTH_CLIENT_ID, AUTH_TOKEN_PATH, TOKEN_REFRESH_MARGIN_SECS};
use s21_domain::{ClientConfig, ClientError};

use crate::errors::InfraError;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get a valid access token, refreshing it within `ctx` if needed
    async fn access_token(&self, ctx: &RequestContext) -> Result<String, ClientError>;
}

#[async_trait]
impl<C: CredentialExchange + 'static> AccessTokenProvider for TokenManager<C> {
    async fn access_token(&self, ctx: &RequestContext) -> Result<String, ClientError> {
        let token = self.ensure_valid(ctx).await.map_err(InfraError::from)?;
        Ok(token.access_token)
    }
}

/// Build the password-grant token manager described by `config`
///
/// Credentials are only attached when both login and password are set; a
/// manager without them fails every refresh with a configuration error.
pub fn token_manager_from_config(
    config: &ClientConfig,
    http: Client,
) -> Result<TokenManager<PasswordGrantClient>, ClientError> {
    let grant = PasswordGrantConfig::new(&config.auth_url, AUTH_TOKEN_PATH, AUTH_CLIENT_ID)
        .map_err(InfraError::from)?;

    let credentials = match (config.login.as_deref(), config.password.as_deref()) {
        (Some(login), Some(password)) if !login.is_empty() => {
            Some(Credentials::new(login, password))
        }
        _ => None,
    };

    Ok(TokenManager::new(
        PasswordGrantClient::new(grant, http),
        credentials,
        TOKEN_REFRESH_MARGIN_SECS,
    ))
}
