//! Top-level client
//!
//! Wires the shared token manager, the GraphQL transport and the review-slot
//! projector from one [`ClientConfig`].

use std::sync::Arc;
use std::time::Duration;

use s21_common::auth::{PasswordGrantClient, TokenManager, TokenSet};
use s21_common::context::RequestContext;
use s21_domain::{ClientConfig, Result};
use tracing::info;

use crate::api::{token_manager_from_config, GraphQlClient};
use crate::errors::InfraError;
use crate::http::HttpClient;
use crate::integrations::ReviewSlotProjector;

/// Authenticated School 21 client
#[derive(Clone)]
pub struct S21Client {
    tokens: Arc<TokenManager<PasswordGrantClient>>,
    graphql: GraphQlClient,
    reviews: ReviewSlotProjector,
}

impl S21Client {
    /// Create a client from `config` with a default HTTP client
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the HTTP client cannot be built or the
    /// auth URL is malformed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> S21ClientBuilder {
        S21ClientBuilder::default()
    }

    /// Authenticate now, replacing any current token
    pub async fn authenticate(&self, ctx: &RequestContext) -> Result<TokenSet> {
        Ok(self.tokens.authenticate(ctx).await.map_err(InfraError::from)?)
    }

    /// Install a token directly, bypassing the credential exchange
    pub async fn set_token(&self, token: TokenSet) {
        self.tokens.set_token(token).await;
    }

    pub async fn current_token(&self) -> Option<TokenSet> {
        self.tokens.current_token().await
    }

    /// The GraphQL transport, for running operations directly
    pub fn graphql(&self) -> &GraphQlClient {
        &self.graphql
    }

    /// Review-slot scheduling
    pub fn reviews(&self) -> &ReviewSlotProjector {
        &self.reviews
    }
}

/// Builder for [`S21Client`]
#[derive(Default)]
pub struct S21ClientBuilder {
    config: Option<ClientConfig>,
    http_client: Option<reqwest::Client>,
}

impl S21ClientBuilder {
    /// Set the client configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a caller-supplied reqwest client for both auth and GraphQL calls
    ///
    /// The configured timeout is not applied to a custom client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the HTTP client cannot be built or the
    /// auth URL is malformed.
    pub fn build(self) -> Result<S21Client> {
        let config = self.config.unwrap_or_default();

        let http = match self.http_client {
            Some(client) => HttpClient::from_reqwest(client),
            None => HttpClient::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .user_agent(concat!("s21-client/", env!("CARGO_PKG_VERSION")))
                .build()?,
        };

        let tokens = Arc::new(token_manager_from_config(&config, http.inner().clone())?);
        if !tokens.has_credentials() {
            info!("No credentials configured; requests will fail until they are supplied");
        }

        let graphql = GraphQlClient::new(&config, http, tokens.clone());
        let reviews = ReviewSlotProjector::new(graphql.clone());

        Ok(S21Client { tokens, graphql, reviews })
    }
}

impl std::fmt::Debug for S21Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S21Client").field("endpoint", &self.graphql.endpoint()).finish()
    }
}
