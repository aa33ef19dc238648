//! Civil date-time and conversions to and from epoch seconds.

use std::fmt;
use std::ops::{Add, Sub};

use crate::calendar::{days_from_unix_epoch, days_in_month, days_in_year, SECONDS_PER_DAY};
use crate::date::CivilDate;
use crate::error::TimeError;
use crate::time_of_day::TimeOfDay;

/// A civil date-time: calendar date plus time of day, second resolution.
///
/// The absolute-instant form is a signed count of seconds since
/// 1970-01-01T00:00:00 UTC. Conversions in both directions use the crate's
/// own calendar tables; they do not call into platform calendar APIs, so
/// pre-epoch and far-future instants behave uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime {
    date: CivilDate,
    time: TimeOfDay,
}

impl CivilDateTime {
    /// Combines an already validated date and time of day.
    pub fn new(date: CivilDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Creates a `CivilDateTime` from raw fields.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError`] if any field is out of range.
    pub fn from_fields(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, TimeError> {
        Ok(Self {
            date: CivilDate::new(year, month, day)?,
            time: TimeOfDay::new(hour, minute, second)?,
        })
    }

    /// Decomposes an absolute instant (seconds since the Unix epoch, UTC)
    /// into calendar fields.
    ///
    /// Whole years are scanned off first, then whole months, then the
    /// remaining days, hours, minutes, and seconds. Negative instants scan
    /// backwards from 1970.
    pub fn from_unix_utc(instant: i64) -> Self {
        let mut remaining_days = instant.div_euclid(SECONDS_PER_DAY);
        let second_of_day = instant.rem_euclid(SECONDS_PER_DAY) as u32;

        let mut year = 1970i32;
        if remaining_days >= 0 {
            loop {
                let len = i64::from(days_in_year(year));
                if remaining_days < len {
                    break;
                }
                remaining_days -= len;
                year += 1;
            }
        } else {
            while remaining_days < 0 {
                year -= 1;
                remaining_days += i64::from(days_in_year(year));
            }
        }

        let mut month = 1u8;
        loop {
            let len = i64::from(days_in_month(month, year));
            if remaining_days < len {
                break;
            }
            remaining_days -= len;
            month += 1;
        }
        let day = remaining_days as u8 + 1;

        Self {
            date: CivilDate::from_validated_ymd(year, month, day),
            time: TimeOfDay::from_second_of_day(second_of_day),
        }
    }

    /// Returns the absolute instant (seconds since the Unix epoch, UTC).
    ///
    /// Inverse of [`from_unix_utc`](Self::from_unix_utc). Total, because
    /// the fields are valid by construction.
    pub fn to_unix_utc(&self) -> i64 {
        let days = days_from_unix_epoch(self.date.year(), self.date.month(), self.date.day());
        days * SECONDS_PER_DAY + i64::from(self.time.second_of_day())
    }

    /// Returns the date component.
    pub fn date(&self) -> CivilDate {
        self.date
    }

    /// Returns the time-of-day component.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }
}

impl Add<i64> for CivilDateTime {
    type Output = Self;

    /// Offsets by a signed number of seconds, via the absolute-instant
    /// representation. Month, year, and leap-day rollover all fall out of
    /// the round trip; there is no direct field carrying.
    fn add(self, seconds: i64) -> Self {
        Self::from_unix_utc(self.to_unix_utc() + seconds)
    }
}

impl Sub<i64> for CivilDateTime {
    type Output = Self;

    fn sub(self, seconds: i64) -> Self {
        Self::from_unix_utc(self.to_unix_utc() - seconds)
    }
}

impl Sub for CivilDateTime {
    type Output = i64;

    /// Signed difference in seconds between two instants.
    fn sub(self, other: Self) -> i64 {
        self.to_unix_utc() - other.to_unix_utc()
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> CivilDateTime {
        CivilDateTime::from_fields(year, month, day, hour, minute, second).unwrap()
    }

    #[test]
    fn epoch_decomposes_to_1970() {
        let e = CivilDateTime::from_unix_utc(0);
        assert_eq!(e, dt(1970, 1, 1, 0, 0, 0));
        assert_eq!(e.date().day_of_week(), 4); // Thursday
        assert_eq!(e.to_unix_utc(), 0);
    }

    #[test]
    fn known_instant_2021_03_14() {
        let d = CivilDateTime::from_unix_utc(1_615_680_000);
        assert_eq!(d, dt(2021, 3, 14, 0, 0, 0));
        assert_eq!(d.to_unix_utc(), 1_615_680_000);
    }

    #[test]
    fn pre_epoch_instants() {
        assert_eq!(CivilDateTime::from_unix_utc(-1), dt(1969, 12, 31, 23, 59, 59));
        assert_eq!(dt(1969, 12, 31, 23, 59, 59).to_unix_utc(), -1);

        // One full (non-leap) year before the epoch.
        assert_eq!(CivilDateTime::from_unix_utc(-365 * 86_400), dt(1969, 1, 1, 0, 0, 0));
    }

    #[test]
    fn leap_day_decomposition() {
        // 2020-02-29T12:00:00Z
        let instant = 1_582_977_600;
        let d = CivilDateTime::from_unix_utc(instant);
        assert_eq!(d, dt(2020, 2, 29, 12, 0, 0));
        assert_eq!(d.to_unix_utc(), instant);
    }

    #[test]
    fn add_rolls_over_leap_day() {
        let before = dt(2020, 2, 28, 23, 59, 59);
        assert_eq!(before + 1, dt(2020, 2, 29, 0, 0, 0));
        assert_eq!(before + 1 + 86_400, dt(2020, 3, 1, 0, 0, 0));

        let non_leap = dt(2021, 2, 28, 23, 59, 59);
        assert_eq!(non_leap + 1, dt(2021, 3, 1, 0, 0, 0));
    }

    #[test]
    fn add_negative_and_sub() {
        let d = dt(2021, 1, 1, 0, 0, 0);
        assert_eq!(d + (-1), dt(2020, 12, 31, 23, 59, 59));
        assert_eq!(d - 1, dt(2020, 12, 31, 23, 59, 59));
    }

    #[test]
    fn difference_is_signed_seconds() {
        let a = dt(2021, 3, 14, 0, 0, 0);
        let b = dt(2021, 3, 13, 23, 0, 0);
        assert_eq!(a - b, 3_600);
        assert_eq!(b - a, -3_600);
        assert_eq!(a - a, 0);
    }

    #[test]
    fn offset_then_difference_recovers_offset() {
        let d = dt(1999, 12, 31, 23, 59, 30);
        for &s in &[0i64, 1, -1, 60, 86_400, -86_400, 31_536_000, -31_536_000] {
            assert_eq!((d + s) - d, s, "offset mismatch for s={s}");
        }
    }

    #[test]
    fn display_iso_like() {
        assert_eq!(dt(2021, 3, 14, 9, 5, 0).to_string(), "2021-03-14T09:05:00");
    }

    #[test]
    fn ordering_matches_instants() {
        let a = dt(2020, 12, 31, 23, 59, 59);
        let b = dt(2021, 1, 1, 0, 0, 0);
        assert!(a < b);
        assert!(a.to_unix_utc() < b.to_unix_utc());
    }
}
