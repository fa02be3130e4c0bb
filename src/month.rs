use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ScoringError;

/// A calendar month, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ScoringError> {
        if !(1..=12).contains(&month) {
            return Err(ScoringError::malformed(format!(
                "month {month} is outside 1..=12"
            )));
        }
        if !(0..=9999).contains(&year) {
            return Err(ScoringError::malformed(format!(
                "year {year} is outside 0000..=9999"
            )));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Calendar-month distance from `earlier` to `self`; negative when
    /// `earlier` is actually later.
    pub fn months_since(&self, earlier: YearMonth) -> i64 {
        self.ordinal() - earlier.ordinal()
    }

    fn ordinal(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }
}

impl FromStr for YearMonth {
    type Err = ScoringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let bytes = value.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);

        if !well_formed {
            return Err(ScoringError::malformed(format!(
                "'{value}' is not a YYYY-MM month"
            )));
        }

        let year = value[..4]
            .parse::<i32>()
            .map_err(|_| ScoringError::malformed(format!("'{value}' has an invalid year")))?;
        let month = value[5..]
            .parse::<u32>()
            .map_err(|_| ScoringError::malformed(format!("'{value}' has an invalid month")))?;

        Self::new(year, month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
