//! School 21 platform integration
//!
//! Adapters that implement core ports on top of the GraphQL transport.

pub mod review_slots;

pub use review_slots::ReviewSlotProjector;
