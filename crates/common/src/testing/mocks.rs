//! Mock implementations of common traits
//!
//! Provides mock objects for testing purposes.

// Allow missing error/panic docs for test mocks - they are designed to be simple
// and errors are clearly indicated by their return types
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::auth::{AuthClientError, CredentialExchange, Credentials, TokenSet};

/// Mock credential exchange for testing
///
/// Counts calls, records the logins it saw, and hands out numbered tokens
/// (`mock-token-1`, `mock-token-2`, ...) unless a fixed response or a failure
/// is configured. Clones share state.
///
/// # Examples
///
/// ```
/// use s21_common::auth::{Credentials, TokenManager};
/// use s21_common::context::RequestContext;
/// use s21_common::testing::MockCredentialExchange;
///
/// # async fn example() {
/// let exchange = MockCredentialExchange::new();
/// let manager = TokenManager::new(exchange.clone(), Some(Credentials::new("jdoe", "pw")), 60);
///
/// manager.ensure_valid(&RequestContext::new()).await.unwrap();
/// assert_eq!(exchange.call_count(), 1);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockCredentialExchange {
    calls: Arc<Mutex<usize>>,
    logins: Arc<Mutex<Vec<String>>>,
    response: Arc<Mutex<Option<TokenSet>>>,
    failure: Arc<Mutex<Option<(u16, String)>>>,
    lifetime_secs: i64,
}

impl MockCredentialExchange {
    /// Create a new mock issuing one-hour tokens.
    pub fn new() -> Self {
        Self::with_lifetime(3600)
    }

    /// Create a mock issuing tokens that live for `lifetime_secs`.
    pub fn with_lifetime(lifetime_secs: i64) -> Self {
        Self {
            calls: Arc::new(Mutex::new(0)),
            logins: Arc::new(Mutex::new(Vec::new())),
            response: Arc::new(Mutex::new(None)),
            failure: Arc::new(Mutex::new(None)),
            lifetime_secs,
        }
    }

    /// Always return `tokens` instead of numbered tokens.
    pub fn set_response(&self, tokens: TokenSet) {
        *self.response.lock().unwrap() = Some(tokens);
    }

    /// Reject every exchange with `status` and `body`; `None` clears it.
    pub fn set_rejection(&self, rejection: Option<(u16, &str)>) {
        *self.failure.lock().unwrap() = rejection.map(|(status, body)| (status, body.to_string()));
    }

    /// Number of exchanges attempted so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    /// Logins seen, in call order.
    #[must_use]
    pub fn logins(&self) -> Vec<String> {
        self.logins.lock().unwrap().clone()
    }

    /// Reset internal state.
    pub fn reset(&self) {
        *self.calls.lock().unwrap() = 0;
        self.logins.lock().unwrap().clear();
        *self.response.lock().unwrap() = None;
        *self.failure.lock().unwrap() = None;
    }
}

impl Default for MockCredentialExchange {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialExchange for MockCredentialExchange {
    async fn exchange_password(
        &self,
        credentials: &Credentials,
    ) -> Result<TokenSet, AuthClientError> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            *calls
        };
        self.logins.lock().unwrap().push(credentials.login().to_string());

        if let Some((status, body)) = self.failure.lock().unwrap().clone() {
            return Err(AuthClientError::Rejected { status, body });
        }

        if let Some(tokens) = self.response.lock().unwrap().clone() {
            return Ok(tokens);
        }

        Ok(TokenSet::new(format!("mock-token-{call}"), self.lifetime_secs))
    }
}
