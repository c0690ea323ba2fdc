use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// Timestamp without seconds or offset, e.g. `2025-01-17T23:51`
const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Timestamp without offset, e.g. `2025-01-17T23:51:30`
const SECOND_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Returned when a date string matches none of the accepted formats
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid date format: {input}")]
pub struct DateParseError {
    pub input: String,
}

/// Expense date value object, always stored in UTC
///
/// # Accepted formats
/// - RFC 3339 with an offset (`2025-01-17T23:51:00+02:00`), converted to UTC
/// - `YYYY-MM-DDTHH:MM`, seconds default to zero and the zone to UTC
/// - `YYYY-MM-DDTHH:MM:SS`, zone defaults to UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseDate(DateTime<Utc>);

impl ExpenseDate {
    /// Parses a date supplied by a client
    ///
    /// # Example
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use expense_tracker_api::domain::expense::ExpenseDate;
    ///
    /// let date = ExpenseDate::parse("2025-01-17T23:51").expect("valid date");
    /// assert_eq!(
    ///     date.into_inner(),
    ///     Utc.with_ymd_and_hms(2025, 1, 17, 23, 51, 0).unwrap()
    /// );
    /// ```
    pub fn parse(input: &str) -> Result<Self, DateParseError> {
        let trimmed = input.trim();

        if let Ok(date) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(date.with_timezone(&Utc)));
        }

        [MINUTE_FORMAT, SECOND_FORMAT]
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .map(|naive| Self(Utc.from_utc_datetime(&naive)))
            .ok_or_else(|| DateParseError {
                input: input.to_string(),
            })
    }

    /// Date used when a new expense is created without one
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_timestamp_defaults_seconds_and_zone() {
        let date = ExpenseDate::parse("2025-01-17T23:51").expect("valid date");

        assert_eq!(
            date.into_inner(),
            Utc.with_ymd_and_hms(2025, 1, 17, 23, 51, 0).unwrap()
        );
    }

    #[test]
    fn timestamp_with_seconds_and_no_zone_is_utc() {
        let date = ExpenseDate::parse("2025-01-17T23:51:42").expect("valid date");

        assert_eq!(
            date.into_inner(),
            Utc.with_ymd_and_hms(2025, 1, 17, 23, 51, 42).unwrap()
        );
    }

    #[test]
    fn rfc3339_utc_is_accepted() {
        let date = ExpenseDate::parse("2025-01-17T23:51:00Z").expect("valid date");

        assert_eq!(
            date.into_inner(),
            Utc.with_ymd_and_hms(2025, 1, 17, 23, 51, 0).unwrap()
        );
    }

    #[test]
    fn rfc3339_offset_is_converted_to_utc() {
        let date = ExpenseDate::parse("2025-01-18T01:51:00+02:00").expect("valid date");

        assert_eq!(
            date.into_inner(),
            Utc.with_ymd_and_hms(2025, 1, 17, 23, 51, 0).unwrap()
        );
    }

    #[test]
    fn out_of_range_components_are_rejected() {
        let error = ExpenseDate::parse("2025-13-99T99:99").unwrap_err();

        assert_eq!(error.input, "2025-13-99T99:99");
    }

    #[test]
    fn date_without_time_is_rejected() {
        assert!(ExpenseDate::parse("2025-01-17").is_err());
    }

    #[test]
    fn empty_string_is_rejected() {
        assert!(ExpenseDate::parse("").is_err());
    }

    #[test]
    fn error_message_names_input() {
        let error = ExpenseDate::parse("yesterday").unwrap_err();

        assert_eq!(error.to_string(), "Invalid date format: yesterday");
    }
}
