//! Time and timestamp helpers.
//!
//! Availability windows are stored as minutes since midnight and exchanged
//! with clients as `"HH:MM"` strings.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// UTC timestamp used for ad creation times.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// A time of day encoded as minutes since midnight.
///
/// Well-formed input lands in `0..=1439`, but parsing is plain arithmetic
/// over the two components, so `"25:99"` is kept as `1599` rather than
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinuteOfDay(i32);

impl MinuteOfDay {
    #[must_use]
    pub fn from_minutes(minutes: i32) -> Self {
        Self(minutes)
    }

    #[must_use]
    pub fn minutes(self) -> i32 {
        self.0
    }

    /// Parse an `"HH:MM"` string as `hours * 60 + minutes`.
    ///
    /// An empty component counts as zero and anything after a second `:`
    /// is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimeOfDay`] when there is no `:`
    /// separator or a component is not an integer.
    pub fn parse_hour_string(value: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidTimeOfDay(value.to_owned());

        let mut parts = value.split(':');
        let hours = parts.next().and_then(component).ok_or_else(invalid)?;
        let minutes = parts.next().and_then(component).ok_or_else(invalid)?;

        hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(minutes))
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Render back to a zero-padded `"HH:MM"` string.
    #[must_use]
    pub fn to_hour_string(self) -> String {
        self.to_string()
    }
}

fn component(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0);
    }
    raw.parse().ok()
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0.div_euclid(60);
        let minutes = self.0.rem_euclid(60);
        write!(f, "{hours:02}:{minutes:02}")
    }
}

impl FromStr for MinuteOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hour_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_convert_hour_string_to_minutes() {
        assert_eq!(MinuteOfDay::parse_hour_string("08:00").unwrap().minutes(), 480);
        assert_eq!(MinuteOfDay::parse_hour_string("23:45").unwrap().minutes(), 1425);
        assert_eq!(MinuteOfDay::parse_hour_string("00:00").unwrap().minutes(), 0);
    }

    #[test]
    fn should_render_minutes_as_zero_padded_hour_string() {
        assert_eq!(MinuteOfDay::from_minutes(480).to_hour_string(), "08:00");
        assert_eq!(MinuteOfDay::from_minutes(1425).to_hour_string(), "23:45");
        assert_eq!(MinuteOfDay::from_minutes(5).to_hour_string(), "00:05");
    }

    #[test]
    fn should_roundtrip_every_valid_hour_string() {
        for hours in 0..24 {
            for minutes in 0..60 {
                let text = format!("{hours:02}:{minutes:02}");
                let parsed = MinuteOfDay::parse_hour_string(&text).unwrap();
                assert_eq!(parsed.to_hour_string(), text);
            }
        }
    }

    #[test]
    fn should_keep_out_of_range_components_as_plain_arithmetic() {
        let parsed = MinuteOfDay::parse_hour_string("25:99").unwrap();
        assert_eq!(parsed.minutes(), 25 * 60 + 99);
    }

    #[test]
    fn should_accept_single_digit_components() {
        assert_eq!(MinuteOfDay::parse_hour_string("9:5").unwrap().minutes(), 545);
    }

    #[test]
    fn should_treat_empty_component_as_zero() {
        assert_eq!(MinuteOfDay::parse_hour_string("10:").unwrap().minutes(), 600);
    }

    #[test]
    fn should_ignore_trailing_seconds_component() {
        assert_eq!(MinuteOfDay::parse_hour_string("12:30:45").unwrap().minutes(), 750);
    }

    #[test]
    fn should_reject_hour_string_without_separator() {
        let result = MinuteOfDay::parse_hour_string("9");
        assert_eq!(
            result,
            Err(ValidationError::InvalidTimeOfDay("9".to_string()))
        );
    }

    #[test]
    fn should_reject_non_numeric_component() {
        assert!(MinuteOfDay::parse_hour_string("nine:30").is_err());
        assert!(MinuteOfDay::parse_hour_string("09:3O").is_err());
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let json = serde_json::to_string(&MinuteOfDay::from_minutes(1080)).unwrap();
        assert_eq!(json, "1080");
    }
}
