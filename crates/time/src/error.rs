//! Error types for the boreas-time crate.

/// Error type for all fallible operations in the boreas-time crate.
///
/// This enum covers validation failures for civil date and time-of-day
/// fields in the proleptic Gregorian calendar, plus parse failures for
/// `"HH:MM[:SS]"` time strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year for which the day is invalid (February length varies).
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when an hour value is outside the valid range 0..=23.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The invalid hour value that was provided.
        hour: u8,
    },

    /// Returned when a minute value is outside the valid range 0..=59.
    #[error("invalid minute: {minute} (must be 0..=59)")]
    InvalidMinute {
        /// The invalid minute value that was provided.
        minute: u8,
    },

    /// Returned when a second value is outside the valid range 0..=59.
    #[error("invalid second: {second} (must be 0..=59)")]
    InvalidSecond {
        /// The invalid second value that was provided.
        second: u8,
    },

    /// Returned when a time-of-day string cannot be parsed.
    #[error("cannot parse time of day '{input}': {reason}")]
    ParseTime {
        /// The string that failed to parse.
        input: String,
        /// Description of what was wrong with it.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_month() {
        let err = TimeError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn display_invalid_day() {
        let err = TimeError::InvalidDay {
            day: 29,
            month: 2,
            year: 1900,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for 1900-02 (max 28)");
    }

    #[test]
    fn display_invalid_hour() {
        let err = TimeError::InvalidHour { hour: 24 };
        assert_eq!(err.to_string(), "invalid hour: 24 (must be 0..=23)");
    }

    #[test]
    fn display_parse_time() {
        let err = TimeError::ParseTime {
            input: "25:00".to_string(),
            reason: "invalid hour: 25 (must be 0..=23)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot parse time of day '25:00': invalid hour: 25 (must be 0..=23)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<TimeError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<TimeError>();
    }
}
