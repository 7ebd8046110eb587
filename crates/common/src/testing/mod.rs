//! Testing utilities and helpers
//!
//! - **[`mocks`]**: Mock implementations of common traits
//!
//! ## Usage
//!
//! ```rust
//! use s21_common::testing::MockCredentialExchange;
//!
//! let exchange = MockCredentialExchange::new();
//! exchange.set_rejection(Some((401, "invalid_grant")));
//! assert_eq!(exchange.call_count(), 0);
//! ```

pub mod mocks;

// Re-export commonly used items
pub use mocks::MockCredentialExchange;
