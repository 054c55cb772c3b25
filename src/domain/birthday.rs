//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only date format accepted or produced at the boundary.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono accepts single-digit days and short years, so the shape is checked first.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid date regex"));

/// A type-safe wrapper for birthdays.
///
/// The text form is always `DD.MM.YYYY` and must name a real Gregorian
/// date. The original text is kept so it round-trips verbatim.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("12.06.1990").unwrap();
/// assert_eq!(birthday.as_str(), "12.06.1990");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text has the wrong
    /// shape or names a date that does not exist (e.g. `31.02.2000`).
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();

        match Self::parse(&text) {
            Some(date) => Ok(Self { text, date }),
            None => Err(ValidationError::InvalidBirthday(text)),
        }
    }

    fn parse(text: &str) -> Option<NaiveDate> {
        if !DATE_SHAPE.is_match(text) {
            return None;
        }

        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .ok()
            .filter(|date| date.year() >= 1)
    }

    /// Get the birthday as `DD.MM.YYYY` text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get the calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The day this birthday falls on in `year`.
    ///
    /// A 29 February birthday is celebrated on 1 March in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day()).or_else(|| {
            if self.date.month() == 2 && self.date.day() == 29 {
                NaiveDate::from_ymd_opt(year, 3, 1)
            } else {
                None
            }
        })
    }
}

/// Format a date the way birthdays are exchanged.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// Serde support - serialize as string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.text.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
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
        write!(f, "{}", self.text)
    }
}
