//! External service integrations

pub mod school;

pub use school::ReviewSlotProjector;
