//! Password-grant authentication and token lifecycle
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  TokenManager   │  Owns credentials + current TokenSet (mutex-guarded)
//! └────────┬────────┘
//!          │
//!          └──► CredentialExchange  (trait)
//!                    │
//!                    └──► PasswordGrantClient  (form POST to the realm token endpoint)
//! ```
//!
//! # Usage Example
//!
//! ```no_run
//! use s21_common::auth::{
//!     Credentials, PasswordGrantClient, PasswordGrantConfig, TokenManager,
//! };
//! use s21_common::context::RequestContext;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PasswordGrantConfig::new(
//!     "https://auth.21-school.ru",
//!     "/auth/realms/EduPowerKeycloak/protocol/openid-connect/token",
//!     "s21-open-api",
//! )?;
//! let exchange = PasswordGrantClient::new(config, reqwest::Client::new());
//! let manager = TokenManager::new(exchange, Some(Credentials::new("login", "password")), 60);
//!
//! let token = manager.ensure_valid(&RequestContext::new()).await?;
//! println!("token expires at {}", token.expires_at);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - **[`types`]**: `Credentials`, `TokenSet`, `TokenResponse`
//! - **[`client`]**: HTTP password-grant client
//! - **[`token_manager`]**: token lifecycle
//! - **[`traits`]**: `CredentialExchange` seam for mocks

pub mod client;
pub mod token_manager;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use client::{AuthClientError, PasswordGrantClient, PasswordGrantConfig};
pub use token_manager::{TokenManager, TokenManagerError};
pub use traits::CredentialExchange;
pub use types::{Credentials, TokenResponse, TokenSet};
