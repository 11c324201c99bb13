//! Weekday availability and its comma-delimited storage encoding.

use std::fmt;

use serde::{Deserialize, Serialize};

const SEPARATOR: char = ',';

/// The days of the week an ad's author is available, as stored.
///
/// Clients submit small integers (`0` = Sunday … `6` = Saturday by
/// convention, not enforced). They are stored joined with `,` and read back
/// as string tokens without being re-parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekDays(String);

impl WeekDays {
    /// Encode a list of weekday numbers.
    #[must_use]
    pub fn from_days(days: &[i64]) -> Self {
        let encoded = days
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(&SEPARATOR.to_string());
        Self(encoded)
    }

    /// Wrap an already-encoded value read from storage.
    #[must_use]
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split the stored value back into tokens.
    ///
    /// An empty encoding yields a single empty token.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        self.0.split(SEPARATOR).map(str::to_owned).collect()
    }
}

impl fmt::Display for WeekDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
