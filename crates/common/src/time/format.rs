//! Wire timestamp formatting
//!
//! The platform API takes two timestamp shapes depending on the operation:
//! whole-second UTC (`2025-03-01T10:00:00Z`) and millisecond-precision UTC
//! (`2025-03-01T10:00:00.000Z`). Responses may use either, so parsing accepts
//! any RFC 3339 string.

use chrono::{DateTime, ParseError, SecondsFormat, Utc};

/// `strftime` pattern of the whole-second wire format
pub const WIRE_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// `strftime` pattern of the millisecond wire format
pub const WIRE_MILLIS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Format an instant as whole-second UTC, truncating sub-second precision
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use s21_common::time::format_wire_seconds;
///
/// let instant = Utc.with_ymd_and_hms(2025, 3, 1, 10, 30, 5).unwrap();
/// assert_eq!(format_wire_seconds(&instant), "2025-03-01T10:30:05Z");
/// ```
pub fn format_wire_seconds(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format an instant as millisecond-precision UTC
///
/// Always emits exactly three fractional digits.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use s21_common::time::format_wire_millis;
///
/// let instant = Utc.with_ymd_and_hms(2025, 3, 1, 10, 30, 5).unwrap();
/// assert_eq!(format_wire_millis(&instant), "2025-03-01T10:30:05.000Z");
/// ```
pub fn format_wire_millis(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 timestamp from the wire and normalize it to UTC
///
/// # Errors
/// Returns the underlying [`ParseError`] when the input is not RFC 3339.
pub fn parse_wire_timestamp(raw: &str) -> Result<DateTime<Utc>, ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|parsed| parsed.with_timezone(&Utc))
}
