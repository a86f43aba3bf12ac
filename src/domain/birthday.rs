//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// `strftime` pattern birthdays are written and parsed with.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern is a valid regex")
});

/// A birthday in `DD.MM.YYYY` form.
///
/// The validated (trimmed) text is what gets stored; the calendar date is
/// re-parsed from it whenever date arithmetic is needed.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::new(" 09.06.1990 ").unwrap();
/// assert_eq!(birthday.as_str(), "09.06.1990");
/// assert!(BirthdayDate::new("31.02.1990").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BirthdayDate(String);

impl BirthdayDate {
    /// Create a new BirthdayDate, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Leading and trailing whitespace is ignored
    /// - Two-digit day, two-digit month, four-digit year, separated by '.'
    /// - Must name a real calendar date
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the date is malformed.
    pub fn new(date: impl Into<String>) -> Result<Self, ValidationError> {
        let date = date.into();
        let trimmed = date.trim();

        if Self::parse(trimmed).is_none() {
            return Err(ValidationError::InvalidBirthday(date));
        }

        Ok(Self(trimmed.to_string()))
    }

    fn parse(date: &str) -> Option<NaiveDate> {
        if !BIRTHDAY_PATTERN.is_match(date) {
            return None;
        }
        NaiveDate::parse_from_str(date, BIRTHDAY_FORMAT).ok()
    }

    /// Get the birthday as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The calendar date of birth.
    pub fn date(&self) -> NaiveDate {
        // The constructor only stores strings that parse
        Self::parse(&self.0).expect("birthday validated to parse as DD.MM.YYYY")
    }

    /// Place this birthday's month and day onto `year`.
    ///
    /// A 29 February birthday lands on 28 February when `year` is not a leap
    /// year. Returns `None` only if `year` is outside chrono's range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        let date = self.date();
        NaiveDate::from_ymd_opt(year, date.month(), date.day()).or_else(|| {
            if date.month() == 2 && date.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

// Serde support - serialize as string
impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayDate::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = BirthdayDate::new("08.06.2000").unwrap();
        assert_eq!(birthday.as_str(), "08.06.2000");
        assert_eq!(birthday.date(), ymd(2000, 6, 8));
    }

    #[test]
    fn test_birthday_stores_trimmed_input() {
        let birthday = BirthdayDate::new("\t01.01.1985  ").unwrap();
        assert_eq!(birthday.as_str(), "01.01.1985");
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(BirthdayDate::new("").is_err());
        assert!(BirthdayDate::new("2000-06-08").is_err());
        assert!(BirthdayDate::new("8.6.2000").is_err());
        assert!(BirthdayDate::new("08/06/2000").is_err());
        assert!(BirthdayDate::new("08.06.00").is_err());
        assert!(BirthdayDate::new("32.01.2000").is_err());
        assert!(BirthdayDate::new("10.13.2000").is_err());
        assert!(BirthdayDate::new("29.02.2001").is_err());
        assert!(BirthdayDate::new("29.02.2000").is_ok());
    }

    #[test]
    fn test_birthday_error_carries_raw_input() {
        let err = BirthdayDate::new(" bad ").unwrap_err();
        assert_eq!(err, ValidationError::InvalidBirthday(" bad ".to_string()));
    }

    #[test]
    fn test_occurrence_in_year() {
        let birthday = BirthdayDate::new("09.06.1990").unwrap();
        assert_eq!(birthday.occurrence_in(2024), Some(ymd(2024, 6, 9)));
    }

    #[test]
    fn test_leap_day_falls_back_to_feb_28() {
        let birthday = BirthdayDate::new("29.02.1992").unwrap();
        assert_eq!(birthday.occurrence_in(2025), Some(ymd(2025, 2, 28)));
        assert_eq!(birthday.occurrence_in(2028), Some(ymd(2028, 2, 29)));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = BirthdayDate::new("09.06.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"09.06.1990\"");
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<BirthdayDate, _> = serde_json::from_str("\"1990-06-09\"");
        assert!(result.is_err());
    }
}
