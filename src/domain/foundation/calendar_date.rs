//! CalendarDate value object: a day on the calendar with no time of day.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

const ISO_FORMAT: &str = "%Y-%m-%d";

/// A calendar date serialized as `YYYY-MM-DD`.
///
/// Day arithmetic on this type is always whole calendar days, so the
/// time-of-day and timezone skew of timestamp subtraction cannot occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Wraps a chrono date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a date from year/month/day, rejecting impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "date",
                    format!("{year:04}-{month:02}-{day:02} is not a calendar date"),
                )
            })
    }

    /// Earliest year a parsed date may carry.
    pub const MIN_YEAR: i32 = 1900;
    /// Latest year a parsed date may carry.
    pub const MAX_YEAR: i32 = 9999;

    /// Parses a strict ISO `YYYY-MM-DD` string.
    ///
    /// Signed or extended years are rejected, as is any year outside
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn parse_iso(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if !is_iso_shaped(trimmed) {
            return Err(ValidationError::invalid_format(
                "date",
                format!("'{trimmed}' is not YYYY-MM-DD"),
            ));
        }

        let date = NaiveDate::parse_from_str(trimmed, ISO_FORMAT).map_err(|e| {
            ValidationError::invalid_format("date", format!("'{trimmed}' is not YYYY-MM-DD ({e})"))
        })?;

        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&date.year()) {
            return Err(ValidationError::out_of_range(
                "date",
                i64::from(Self::MIN_YEAR),
                i64::from(Self::MAX_YEAR),
                i64::from(date.year()),
            ));
        }
        Ok(Self(date))
    }

    /// Returns the inner chrono date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Signed number of whole days from `earlier` to `self`.
    pub fn days_since(&self, earlier: CalendarDate) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    /// Creates a new date by adding the specified number of days.
    ///
    /// Negative values subtract days. Saturates at the ends of chrono's
    /// date range instead of overflowing.
    pub fn plus_days(&self, days: i64) -> Self {
        let shifted = Duration::try_days(days).and_then(|delta| self.0.checked_add_signed(delta));
        match shifted {
            Some(date) => Self(date),
            None if days < 0 => Self(NaiveDate::MIN),
            None => Self(NaiveDate::MAX),
        }
    }

    /// Formats as `YYYY-MM-DD`.
    pub fn to_iso(&self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }

    /// Formats the way the assistant context reads dates (`DD/MM/YYYY`).
    pub fn to_display(&self) -> String {
        self.0.format("%d/%m/%Y").to_string()
    }
}

/// Exactly `DDDD-DD-DD` in ASCII digits.
fn is_iso_shaped(value: &str) -> bool {
    value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso())
    }
}

impl FromStr for CalendarDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_iso(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_iso()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse_iso(s).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        let d = date("2024-01-06");
        assert_eq!(d.to_iso(), "2024-01-06");
    }

    #[test]
    fn rejects_non_iso_input() {
        assert!(CalendarDate::parse_iso("06/01/2024").is_err());
        assert!(CalendarDate::parse_iso("2024-02-30").is_err());
        assert!(CalendarDate::parse_iso("today").is_err());
        assert!(CalendarDate::parse_iso("").is_err());
    }

    #[test]
    fn rejects_signed_and_extended_years() {
        assert!(CalendarDate::parse_iso("+262142-12-20").is_err());
        assert!(CalendarDate::parse_iso("-0001-01-01").is_err());
        assert!(CalendarDate::parse_iso("120240-01-01").is_err());
        assert!(CalendarDate::parse_iso("2024-1-6").is_err());
    }

    #[test]
    fn rejects_years_outside_band() {
        let err = CalendarDate::parse_iso("0999-01-01").unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { actual: 999, .. }));
        assert!(CalendarDate::parse_iso("1900-01-01").is_ok());
        assert!(CalendarDate::parse_iso("9999-12-31").is_ok());
    }

    #[test]
    fn plus_days_saturates_instead_of_panicking() {
        let far = date("9999-12-31");
        assert_eq!(far.plus_days(i64::MAX).as_naive(), NaiveDate::MAX);
        assert_eq!(far.plus_days(i64::MIN).as_naive(), NaiveDate::MIN);
        assert_eq!(far.plus_days(1), CalendarDate::from_ymd(10000, 1, 1).unwrap());
    }

    #[test]
    fn from_ymd_rejects_impossible_dates() {
        assert!(CalendarDate::from_ymd(2023, 2, 29).is_err());
        assert!(CalendarDate::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn days_since_is_signed() {
        assert_eq!(date("2024-01-06").days_since(date("2024-01-01")), 5);
        assert_eq!(date("2024-01-01").days_since(date("2024-01-06")), -5);
    }

    #[test]
    fn plus_days_crosses_month_and_leap_boundaries() {
        assert_eq!(date("2024-01-01").plus_days(28), date("2024-01-29"));
        assert_eq!(date("2024-02-28").plus_days(1), date("2024-02-29"));
        assert_eq!(date("2024-03-01").plus_days(-1), date("2024-02-29"));
    }

    #[test]
    fn serializes_as_plain_iso_string() {
        let json = serde_json::to_string(&date("2024-01-29")).unwrap();
        assert_eq!(json, "\"2024-01-29\"");
    }

    #[test]
    fn deserialization_rejects_garbage() {
        let result: Result<CalendarDate, _> = serde_json::from_str("\"not a date\"");
        assert!(result.is_err());
    }

    #[test]
    fn display_format_is_day_first() {
        assert_eq!(date("2024-01-06").to_display(), "06/01/2024");
    }
}
