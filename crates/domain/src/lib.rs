//! # S21 Domain
//!
//! Domain types and models for the School 21 platform client.
//!
//! This crate contains:
//! - Review slot/booking models and the calendar-event shapes they come from
//! - The client error taxonomy and `Result` alias
//! - Client configuration structures
//! - Endpoint and wire constants
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
