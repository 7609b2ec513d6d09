//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// `chrono` format string for the only accepted date layout.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts single-digit days and months, so the shape is checked first.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday regex is valid"));

/// A birthday written as `DD.MM.YYYY`.
///
/// Construction only checks the format and that the date exists on the
/// calendar (so `29.02.2023` is rejected, `29.02.2024` is not). Whether the
/// date lies in the past is a separate question answered by [`Birthday::is_valid`];
/// the owning record asks it before accepting the value.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.as_str(), "15.06.1990");
/// assert!(birthday.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the input is not two-digit day,
    /// two-digit month and four-digit year separated by dots, or if that date
    /// does not exist.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !BIRTHDAY_SHAPE.is_match(&raw) {
            return Err(ValidationError::InvalidDate(raw));
        }
        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidDate(raw)),
        }
    }

    /// Whether the birthday is strictly earlier than the current local time.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Local::now().naive_local())
    }

    /// Whether the birthday (taken at midnight) is strictly earlier than `now`.
    pub fn is_valid_at(&self, now: NaiveDateTime) -> bool {
        self.date.and_time(NaiveTime::default()) < now
    }

    /// The calendar date of birth.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date this birthday falls on in `year`.
    ///
    /// A 29 February birthday is celebrated on 1 March in non-leap years.
    /// Returns `None` only for years outside chrono's supported range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        self.date
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn into_inner(self) -> String {
        self.raw
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
