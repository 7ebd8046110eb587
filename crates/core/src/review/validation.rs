//! Slot window validation

use chrono::{DateTime, Utc};
use s21_domain::{ClientError, Result};

/// Reject windows where `end` is not strictly after `start`
///
/// Runs before add/update mutations so no request is sent for an empty or
/// inverted window.
///
/// # Errors
/// Returns `ClientError::Validation` when `end <= start`.
pub fn validate_slot_window(start: &DateTime<Utc>, end: &DateTime<Utc>) -> Result<()> {
    if end <= start {
        return Err(ClientError::Validation(format!(
            "slot end {} must be after start {}",
            end.to_rfc3339(),
            start.to_rfc3339()
        )));
    }
    Ok(())
}
