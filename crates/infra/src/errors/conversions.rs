//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use s21_common::auth::{AuthClientError, TokenManagerError};
use s21_common::context::ContextError;
use s21_domain::ClientError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ClientError);

impl From<InfraError> for ClientError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ClientError> for InfraError {
    fn from(value: ClientError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoClientError {
    fn into_client(self) -> ClientError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ClientError */
/* -------------------------------------------------------------------------- */

impl IntoClientError for HttpError {
    fn into_client(self) -> ClientError {
        if self.is_timeout() {
            return ClientError::Transport(format!("HTTP request timed out: {self}"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return ClientError::Transport(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return ClientError::Config(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() || self.is_body() {
            return ClientError::Transport(format!("failed to read response body: {self}"));
        }

        ClientError::Transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_client())
    }
}

/* -------------------------------------------------------------------------- */
/* ContextError → ClientError */
/* -------------------------------------------------------------------------- */

impl IntoClientError for ContextError {
    fn into_client(self) -> ClientError {
        match self {
            ContextError::Cancelled => ClientError::Cancelled,
            ContextError::DeadlineExceeded(budget) => ClientError::Timeout(budget),
        }
    }
}

impl From<ContextError> for InfraError {
    fn from(value: ContextError) -> Self {
        InfraError(value.into_client())
    }
}

/* -------------------------------------------------------------------------- */
/* AuthClientError / TokenManagerError → ClientError */
/* -------------------------------------------------------------------------- */

impl IntoClientError for AuthClientError {
    fn into_client(self) -> ClientError {
        match self {
            AuthClientError::Rejected { status, body } => ClientError::Auth { status, body },
            AuthClientError::RequestFailed(err) => err.into_client(),
            AuthClientError::ParseError(message) => {
                ClientError::Decode(format!("token response: {message}"))
            }
            AuthClientError::ConfigError(message) => ClientError::Config(message),
        }
    }
}

impl From<AuthClientError> for InfraError {
    fn from(value: AuthClientError) -> Self {
        InfraError(value.into_client())
    }
}

impl IntoClientError for TokenManagerError {
    fn into_client(self) -> ClientError {
        match self {
            TokenManagerError::MissingCredentials => {
                ClientError::Config("no credentials configured; set login and password".into())
            }
            TokenManagerError::Exchange(err) => err.into_client(),
            TokenManagerError::Context(err) => err.into_client(),
        }
    }
}

impl From<TokenManagerError> for InfraError {
    fn from(value: TokenManagerError) -> Self {
        InfraError(value.into_client())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
