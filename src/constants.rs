//! Application constants for the recipe reporter
//!
//! This module contains the fixed lookup tables and patterns used for
//! parsing delivery windows, plus CLI-level defaults. Everything here is
//! immutable after process start.

// =============================================================================
// Weekday Names
// =============================================================================

/// Full English weekday names, indexed Sunday = 0 through Saturday = 6.
///
/// Delivery window parsing matches the weekday token against these names
/// case-sensitively; no abbreviations or localized spellings are accepted.
pub const WEEKDAY_NAMES: &[&str] = &[
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

// =============================================================================
// Delivery Window Pattern
// =============================================================================

/// Anchored pattern for the textual delivery window form
/// `<Weekday> <from> - <to>`, e.g. `Sunday 1PM - 3PM`.
///
/// Captures three groups: the weekday token and the two hour tokens. The
/// `(?i)` only affects the AM/PM suffixes; weekday validity is decided by the
/// [`WEEKDAY_NAMES`] lookup, not by the pattern.
pub const DELIVERY_WINDOW_PATTERN: &str =
    r"(?i)^(\w+)\s+(\d{1,2}(?:AM|PM))\s*-\s*(\d{1,2}(?:AM|PM))$";

// =============================================================================
// Hour Bounds
// =============================================================================

/// Exclusive upper bound for 24-hour clock values
pub const HOURS_PER_DAY: u8 = 24;

/// Inclusive upper bound for a 12-hour clock digit group
pub const MAX_CLOCK_DIGITS_12H: u8 = 12;

// =============================================================================
// CLI Defaults
// =============================================================================

/// Expected number of comma-separated parts in a
/// `--deliveries-by-postcode-and-time` value: postcode, from hour, to hour
pub const POSTCODE_TIME_QUERY_PARTS: usize = 3;
