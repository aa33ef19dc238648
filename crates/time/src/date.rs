//! Civil calendar date with derived day-of-week.

use std::fmt;

use crate::calendar::{day_of_week_from_days, days_from_unix_epoch, days_in_month};
use crate::error::TimeError;

/// A date in the proleptic Gregorian calendar.
///
/// Valid by construction: the month is 1..=12 and the day fits the month's
/// length for the given year (leap-aware). The day of week is derived, never
/// caller-supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
    day_of_week: u8,
}

impl PartialOrd for CivilDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CivilDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl CivilDate {
    /// Creates a new `CivilDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError`] if the month or day is out of range for the
    /// given year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidMonth { month });
        }
        let max_day = days_in_month(month, year);
        if !(1..=max_day).contains(&day) {
            return Err(TimeError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self::from_validated_ymd(year, month, day))
    }

    /// Builds a date from fields already known to be in range, deriving the
    /// day of week.
    pub(crate) fn from_validated_ymd(year: i32, month: u8, day: u8) -> Self {
        let days = days_from_unix_epoch(year, month, day);
        Self {
            year,
            month,
            day,
            day_of_week: day_of_week_from_days(days),
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the day of week (0 = Sunday .. 6 = Saturday).
    pub fn day_of_week(self) -> u8 {
        self.day_of_week
    }

    /// Returns the next calendar day, rolling over months and years.
    pub fn next(self) -> Self {
        if self.day < days_in_month(self.month, self.year) {
            Self::from_validated_ymd(self.year, self.month, self.day + 1)
        } else if self.month < 12 {
            Self::from_validated_ymd(self.year, self.month + 1, 1)
        } else {
            Self::from_validated_ymd(self.year + 1, 1, 1)
        }
    }

    /// Returns the previous calendar day, rolling back months and years.
    pub fn previous(self) -> Self {
        if self.day > 1 {
            Self::from_validated_ymd(self.year, self.month, self.day - 1)
        } else if self.month > 1 {
            let month = self.month - 1;
            Self::from_validated_ymd(self.year, month, days_in_month(month, self.year))
        } else {
            Self::from_validated_ymd(self.year - 1, 12, 31)
        }
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
