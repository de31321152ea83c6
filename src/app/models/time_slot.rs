//! 12-hour clock values and weekday-scoped delivery windows
//!
//! This module implements the time vocabulary of the input format: hours are
//! written on a 12-hour "AM/PM" clock with no leading zeros or minutes
//! (`12AM`, `1AM`, ..., `11PM`), and a delivery window combines a full English
//! weekday name with an hour range, e.g. `Sunday 1PM - 3PM`.

use crate::constants::{
    DELIVERY_WINDOW_PATTERN, HOURS_PER_DAY, MAX_CLOCK_DIGITS_12H, WEEKDAY_NAMES,
};
use crate::{Error, Result};
use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Compiled pattern for the `<Weekday> <from> - <to>` window form
static WINDOW_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DELIVERY_WINDOW_PATTERN).expect("window pattern must compile"));

// =============================================================================
// Hour
// =============================================================================

/// An hour of the day on the 24-hour clock, in `[0, 23]`
///
/// The textual form is the 12-hour clock: `12AM` is hour 0, `12PM` is hour 12,
/// and every other value carries an `AM`/`PM` suffix with no leading zero.
/// Parsing also accepts bare 24-hour numerals (`0`..`23`), which the CLI uses
/// for hour bounds; formatting always produces the 12-hour form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hour(u8);

impl Hour {
    /// Create an hour from a 24-hour clock value
    pub fn new(value: u8) -> Result<Self> {
        if value >= HOURS_PER_DAY {
            return Err(Error::record_format(format!(
                "hour value {} out of range (expected 0-23)",
                value
            )));
        }
        Ok(Self(value))
    }

    /// The underlying 24-hour clock value
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl FromStr for Hour {
    type Err = Error;

    /// Parse an hour token, either 12-hour (`3PM`, case-insensitive suffix)
    /// or bare 24-hour (`15`).
    ///
    /// 12-hour digit groups must be in 1-12: `0AM` does not exist, only
    /// `12AM` denotes hour 0. Bare numerals must be below 24.
    fn from_str(s: &str) -> Result<Self> {
        let upper = s.to_uppercase();
        let (digits, meridiem) = if let Some(rest) = upper.strip_suffix("AM") {
            (rest, Some(Meridiem::Am))
        } else if let Some(rest) = upper.strip_suffix("PM") {
            (rest, Some(Meridiem::Pm))
        } else {
            (upper.as_str(), None)
        };

        let value: u8 = digits
            .parse()
            .map_err(|_| Error::record_format(format!("invalid hour token '{}'", s)))?;

        let hour = match meridiem {
            Some(meridiem) => {
                if value == 0 || value > MAX_CLOCK_DIGITS_12H {
                    return Err(Error::record_format(format!(
                        "invalid 12-hour value '{}' (expected 1-12 with AM/PM)",
                        s
                    )));
                }
                match (meridiem, value) {
                    (Meridiem::Am, 12) => 0,
                    (Meridiem::Am, v) => v,
                    (Meridiem::Pm, 12) => 12,
                    (Meridiem::Pm, v) => v + 12,
                }
            }
            None => {
                if value >= HOURS_PER_DAY {
                    return Err(Error::record_format(format!(
                        "invalid 24-hour value '{}' (expected 0-23)",
                        s
                    )));
                }
                value
            }
        };
        Ok(Self(hour))
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "12AM"),
            12 => write!(f, "12PM"),
            h if h < 12 => write!(f, "{}AM", h),
            h => write!(f, "{}PM", h - 12),
        }
    }
}

impl Serialize for Hour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

/// AM/PM suffix of a 12-hour clock token
enum Meridiem {
    Am,
    Pm,
}

// =============================================================================
// Weekday
// =============================================================================

/// Day of the week, named by its full English spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays in Sunday-first order, aligned with
    /// [`WEEKDAY_NAMES`](crate::constants::WEEKDAY_NAMES)
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// The full English name of this weekday
    pub fn name(&self) -> &'static str {
        WEEKDAY_NAMES[*self as usize]
    }
}

impl FromStr for Weekday {
    type Err = Error;

    /// Resolve a full English weekday name, case-sensitively
    fn from_str(s: &str) -> Result<Self> {
        WEEKDAY_NAMES
            .iter()
            .position(|name| *name == s)
            .map(|index| Weekday::ALL[index])
            .ok_or_else(|| Error::record_format(format!("unknown weekday '{}'", s)))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// DeliveryWindow
// =============================================================================

/// A weekly delivery time window: a weekday plus a from/to hour range
///
/// No `from <= to` ordering is enforced; the window carries whatever hour pair
/// the source supplied. Two windows are equal only if weekday and both hours
/// match, which is what makes "distinct windows per postcode" well-defined for
/// the busiest-postcode report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeliveryWindow {
    pub weekday: Weekday,
    pub from: Hour,
    pub to: Hour,
}

impl DeliveryWindow {
    pub fn new(weekday: Weekday, from: Hour, to: Hour) -> Self {
        Self { weekday, from, to }
    }

    /// Whether this window lies fully within `outer`: same weekday, and the
    /// hour range of `self` contained in the hour range of `outer`
    pub fn contained_in(&self, outer: &DeliveryWindow) -> bool {
        self.weekday == outer.weekday && self.from >= outer.from && self.to <= outer.to
    }
}

impl FromStr for DeliveryWindow {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let captures = WINDOW_PATTERN
            .captures(s)
            .ok_or_else(|| Error::record_format(format!("malformed delivery window '{}'", s)))?;

        let weekday: Weekday = captures[1].parse()?;
        let from: Hour = captures[2].parse()?;
        let to: Hour = captures[3].parse()?;
        Ok(Self { weekday, from, to })
    }
}

impl fmt::Display for DeliveryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.weekday, self.from, self.to)
    }
}

impl Serialize for DeliveryWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DeliveryWindow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
