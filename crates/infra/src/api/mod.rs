//! GraphQL API access for the School 21 platform
//!
//! # Architecture
//!
//! - [`types`]: the generic request/response envelope and the
//!   [`GraphQlOperation`] trait every operation implements
//! - [`operations`]: the calendar operations used by review scheduling
//! - [`auth`]: bearer token supply (backed by the shared `TokenManager`)
//! - [`client`]: the transport that executes one operation per call
//!
//! Requests are sent once. There is no retry, caching or circuit breaking;
//! each failure is classified and returned to the caller.

pub mod auth;
pub mod client;
pub mod operations;
pub mod types;

pub use auth::{token_manager_from_config, AccessTokenProvider};
pub use client::GraphQlClient;
pub use types::{GraphQlOperation, GraphQlRequest, GraphQlResponse};
