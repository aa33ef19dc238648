//! Time-of-day value type (hours, minutes, seconds since local midnight).

use std::fmt;
use std::str::FromStr;

use crate::error::TimeError;

/// A time of day with second resolution.
///
/// Valid by construction: hour 0..=23, minute and second 0..=59. Ordering
/// follows the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// 00:00:00.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Creates a new `TimeOfDay` from hour, minute, and second.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError`] if any field is out of range.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::InvalidHour { hour });
        }
        if minute > 59 {
            return Err(TimeError::InvalidMinute { minute });
        }
        if second > 59 {
            return Err(TimeError::InvalidSecond { second });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Creates a `TimeOfDay` from a count of seconds since midnight.
    ///
    /// Counts of a day or more wrap around, so any `u32` maps to a valid
    /// time of day.
    pub fn from_second_of_day(seconds: u32) -> Self {
        let s = seconds % 86_400;
        Self {
            hour: (s / 3_600) as u8,
            minute: (s / 60 % 60) as u8,
            second: (s % 60) as u8,
        }
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Returns the number of seconds since midnight (0..=86_399).
    pub fn second_of_day(self) -> u32 {
        u32::from(self.hour) * 3_600 + u32::from(self.minute) * 60 + u32::from(self.second)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    /// Parses `"HH:MM"` or `"HH:MM:SS"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason: String| TimeError::ParseTime {
            input: s.to_string(),
            reason,
        };

        let fields: Vec<&str> = s.split(':').collect();
        if fields.len() != 2 && fields.len() != 3 {
            return Err(parse_err("expected HH:MM or HH:MM:SS".to_string()));
        }

        let mut parts = [0u8; 3];
        for (i, field) in fields.iter().enumerate() {
            parts[i] = field
                .parse::<u8>()
                .map_err(|_| parse_err(format!("'{field}' is not a number in 0..=255")))?;
        }

        Self::new(parts[0], parts[1], parts[2]).map_err(|e| parse_err(e.to_string()))
    }
}
