//! Password-grant client for the realm token endpoint
//!
//! Posts a form-encoded `client_id`/`username`/`password`/`grant_type`
//! body and decodes the token payload. No retries.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use super::traits::CredentialExchange;
use super::types::{Credentials, TokenResponse, TokenSet};

const PASSWORD_GRANT_TYPE: &str = "password";

/// Error type for credential exchange
#[derive(Debug)]
pub enum AuthClientError {
    /// HTTP request failed before a response arrived
    RequestFailed(reqwest::Error),

    /// Endpoint answered with a non-success status
    Rejected { status: u16, body: String },

    /// Failed to parse the token payload
    ParseError(String),

    /// Invalid configuration
    ConfigError(String),
}

impl std::fmt::Display for AuthClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequestFailed(e) => write!(f, "HTTP request failed: {e}"),
            Self::Rejected { status, body } if body.is_empty() => {
                write!(f, "Authentication rejected with status {status}: (empty response body)")
            }
            Self::Rejected { status, body } => {
                write!(f, "Authentication rejected with status {status}: {body}")
            }
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for AuthClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RequestFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AuthClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed(err)
    }
}

/// Token endpoint location and client identifier
#[derive(Debug, Clone)]
pub struct PasswordGrantConfig {
    token_url: Url,
    client_id: String,
}

impl PasswordGrantConfig {
    /// Build from an auth server base URL and the realm token path
    ///
    /// The path is appended to the base verbatim, so a base with its own path
    /// prefix (e.g. behind a proxy) keeps it.
    ///
    /// # Errors
    /// Returns `ConfigError` if the combined URL does not parse
    pub fn new(
        auth_base_url: &str,
        token_path: &str,
        client_id: impl Into<String>,
    ) -> Result<Self, AuthClientError> {
        let raw = format!("{}{}", auth_base_url.trim_end_matches('/'), token_path);
        let token_url = Url::parse(&raw)
            .map_err(|e| AuthClientError::ConfigError(format!("invalid token URL {raw}: {e}")))?;

        Ok(Self { token_url, client_id: client_id.into() })
    }

    pub fn token_url(&self) -> &Url {
        &self.token_url
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

/// Password-grant credential exchange over HTTP
#[derive(Debug, Clone)]
pub struct PasswordGrantClient {
    config: PasswordGrantConfig,
    client: Client,
}

impl PasswordGrantClient {
    /// Create a client that sends requests through `client`
    ///
    /// Timeouts and proxy settings come from the supplied `reqwest::Client`.
    #[must_use]
    pub fn new(config: PasswordGrantConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &PasswordGrantConfig {
        &self.config
    }

    /// Exchange a login/password pair for tokens
    ///
    /// # Errors
    /// Returns error if:
    /// - The request fails (`RequestFailed`)
    /// - The endpoint answers with anything other than 200 (`Rejected`,
    ///   carrying the status and raw body, which may be empty)
    /// - The payload is not a token response (`ParseError`)
    pub async fn exchange_password(
        &self,
        credentials: &Credentials,
    ) -> Result<TokenSet, AuthClientError> {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("username", credentials.login()),
            ("password", credentials.password()),
            ("grant_type", PASSWORD_GRANT_TYPE),
        ];

        debug!(url = %self.config.token_url, login = credentials.login(), "Requesting token");

        let response =
            self.client.post(self.config.token_url.clone()).form(&params).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(AuthClientError::Rejected { status: status.as_u16(), body });
        }

        let token_response: TokenResponse =
            serde_json::from_str(&body).map_err(|e| AuthClientError::ParseError(e.to_string()))?;

        let expires_in = token_response.expires_in;
        token_response.into_token_set(Utc::now()).ok_or_else(|| {
            AuthClientError::ParseError(format!("expires_in {expires_in} is out of range"))
        })
    }
}

#[async_trait]
impl CredentialExchange for PasswordGrantClient {
    async fn exchange_password(
        &self,
        credentials: &Credentials,
    ) -> Result<TokenSet, AuthClientError> {
        self.exchange_password(credentials).await
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for auth::client.
    use super::*;

    const TOKEN_PATH: &str = "/auth/realms/EduPowerKeycloak/protocol/openid-connect/token";

    #[test]
    fn token_url_joins_base_and_path() {
        let config =
            PasswordGrantConfig::new("https://auth.21-school.ru/", TOKEN_PATH, "s21-open-api")
                .unwrap();

        assert_eq!(
            config.token_url().as_str(),
            "https://auth.21-school.ru/auth/realms/EduPowerKeycloak/protocol/openid-connect/token"
        );
        assert_eq!(config.client_id(), "s21-open-api");
    }

    #[test]
    fn token_url_keeps_base_path_prefix() {
        let config =
            PasswordGrantConfig::new("http://localhost:8080/proxy", TOKEN_PATH, "client").unwrap();
        assert!(config.token_url().path().starts_with("/proxy/auth/realms/"));
    }

    #[test]
    fn invalid_base_url_is_config_error() {
        let result = PasswordGrantConfig::new("not a url", TOKEN_PATH, "client");
        assert!(matches!(result, Err(AuthClientError::ConfigError(_))));
    }

    #[test]
    fn rejected_error_calls_out_empty_body() {
        let err = AuthClientError::Rejected { status: 401, body: String::new() };
        assert_eq!(
            err.to_string(),
            "Authentication rejected with status 401: (empty response body)"
        );
    }
}
