//! Time utilities
//!
//! - **[`format`]**: wire timestamp formatting and parsing for the platform
//!   API (whole-second and millisecond precision, always UTC)
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use s21_common::time::{format_wire_millis, parse_wire_timestamp};
//!
//! let instant = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
//! let wire = format_wire_millis(&instant);
//! assert_eq!(wire, "2025-03-01T10:00:00.000Z");
//! assert_eq!(parse_wire_timestamp(&wire).unwrap(), instant);
//! ```

pub mod format;

// Re-export commonly used items
pub use format::{
    format_wire_millis, format_wire_seconds, parse_wire_timestamp, WIRE_MILLIS_FORMAT,
    WIRE_SECONDS_FORMAT,
};
