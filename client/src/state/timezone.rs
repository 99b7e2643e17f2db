//! Display timezones and the slot label formatter.
//!
//! DESIGN
//! ======
//! The picker offers a fixed set of zones. Each option carries the value used
//! by the `<select>` element, a human label, and the IANA zone used for
//! formatting. `IST` is not an IANA identifier, so it resolves to
//! `Asia/Kolkata`; this keeps formatting infallible once a `Timezone` exists.

#[cfg(test)]
#[path = "timezone_test.rs"]
mod timezone_test;

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use super::slots::SlotOffset;

/// Errors raised when resolving a timezone identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimezoneError {
    #[error("unsupported timezone identifier: {0}")]
    Unsupported(String),
}

/// Timezones offered by the selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Timezone {
    #[default]
    Utc,
    NewYork,
    India,
}

impl Timezone {
    /// All options in selector order.
    pub const ALL: [Timezone; 3] = [Timezone::Utc, Timezone::NewYork, Timezone::India];

    /// Value attribute of the `<option>` element.
    pub fn value(self) -> &'static str {
        match self {
            Timezone::Utc => "UTC",
            Timezone::NewYork => "America/New_York",
            Timezone::India => "IST",
        }
    }

    /// Visible text of the `<option>` element.
    pub fn label(self) -> &'static str {
        match self {
            Timezone::Utc => "UTC",
            Timezone::NewYork => "America/New_York",
            Timezone::India => "Indian Standard Time (IST)",
        }
    }

    /// IANA zone used when rendering labels.
    pub fn tz(self) -> Tz {
        match self {
            Timezone::Utc => Tz::UTC,
            Timezone::NewYork => Tz::America__New_York,
            Timezone::India => Tz::Asia__Kolkata,
        }
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Timezone {
    type Err = TimezoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timezone::ALL
            .into_iter()
            .find(|tz| tz.value() == s)
            .ok_or_else(|| TimezoneError::Unsupported(s.to_owned()))
    }
}

/// Format a slot as `hh:mm AM/PM` in `timezone`.
///
/// The offset is read as minutes past midnight UTC on `reference`, then
/// shifted into the target zone, so daylight saving follows the displayed week.
pub fn format_slot_label(slot: SlotOffset, timezone: Timezone, reference: NaiveDate) -> String {
    let (hour, minute) = slot.hour_minute();
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
    let instant = Utc.from_utc_datetime(&reference.and_time(time));
    instant.with_timezone(&timezone.tz()).format("%I:%M %p").to_string()
}
