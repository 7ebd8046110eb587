//! Modular common utilities shared across the S21 client crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: wire timestamp formatting and parsing
//! - `runtime`: request context (deadline + cancellation), duration display
//! - `platform`: credential exchange and token lifecycle (auth)
//! - `test-utils`: mock credential exchange for downstream tests

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod time;

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod context;

// Platform tier
// -------------------------------------------------------------------
#[cfg(feature = "platform")]
pub mod auth;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", all(test, feature = "platform")))]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "platform")]
pub use auth::{
    AuthClientError, CredentialExchange, Credentials, PasswordGrantClient, TokenManager,
    TokenManagerError, TokenSet,
};
#[cfg(feature = "runtime")]
pub use context::{ContextError, RequestContext};
#[cfg(feature = "foundation")]
pub use time::{format_wire_millis, format_wire_seconds, parse_wire_timestamp};
