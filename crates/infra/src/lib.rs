//! # S21 Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client implementation
//! - The GraphQL transport and calendar operation catalog
//! - The School 21 review-slot integration
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `s21-core`
//! - Depends on `s21-common`, `s21-domain` and `s21-core`
//! - Contains all "impure" code (network, environment, files)

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use api::{GraphQlClient, GraphQlOperation};
pub use client::{S21Client, S21ClientBuilder};
pub use errors::InfraError;
pub use http::*;
pub use integrations::*;
