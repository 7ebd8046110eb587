//! # S21 Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Review-slot projection from calendar events
//! - Slot window validation applied before mutations
//! - Port interfaces (traits) implemented by infrastructure
//!
//! ## Architecture Principles
//! - Only depends on `s21-common` and `s21-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod review;

// Re-export specific items to avoid ambiguity
pub use review::ports::ReviewSlotProvider;
pub use review::projection::{
    available_slots, dedup_bookings, find_slot, project_booking, project_events, project_slot,
};
pub use review::validation::validate_slot_window;
