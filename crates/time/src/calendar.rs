//! Leap-year rules and month-length tables for the proleptic Gregorian
//! calendar.
//!
//! The non-leap month lengths are a compile-time constant table; February
//! gains a day in leap years. The leap rule here is the full Gregorian one
//! (centuries are not leap unless divisible by 400), so 2000 is leap while
//! 1900 and 2100 are not.

/// Number of days in each month of a non-leap year
/// (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Seconds in one civil day.
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// The Unix epoch fell on a Thursday; day-of-week 0 is Sunday.
const EPOCH_DAY_OF_WEEK: i64 = 4;

/// Returns whether `year` is a leap year under the Gregorian rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month of the given year.
///
/// # Panics
///
/// Panics if `month` is not in 1..=12.
pub fn days_in_month(month: u8, year: i32) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Returns the number of days in the given year (365 or 366).
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Counts whole days from 1970-01-01 to the given (already validated)
/// calendar day. Negative for days before the epoch.
///
/// Whole years are accumulated first, then whole months, then days, the
/// same order the epoch decomposition walks them. The scan is linear in
/// years-from-epoch, which is fine for civil timestamps.
pub(crate) fn days_from_unix_epoch(year: i32, month: u8, day: u8) -> i64 {
    let mut days: i64 = 0;
    if year >= 1970 {
        for y in 1970..year {
            days += i64::from(days_in_year(y));
        }
    } else {
        for y in year..1970 {
            days -= i64::from(days_in_year(y));
        }
    }
    for m in 1..month {
        days += i64::from(days_in_month(m, year));
    }
    days + i64::from(day) - 1
}

/// Day of week (0 = Sunday .. 6 = Saturday) for a signed count of days
/// since 1970-01-01.
pub(crate) fn day_of_week_from_days(days: i64) -> u8 {
    (days + EPOCH_DAY_OF_WEEK).rem_euclid(7) as u8
}
