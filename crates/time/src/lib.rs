//! # boreas-time
//!
//! Civil date-time values and epoch conversions for the Boreas weather map
//! display.
//!
//! ## Quick Start
//!
//! ```
//! use boreas_time::{CivilDateTime, TimeOfDay};
//!
//! // Decompose an absolute instant into civil fields.
//! let dt = CivilDateTime::from_unix_utc(1_615_680_000);
//! assert_eq!(dt.to_string(), "2021-03-14T00:00:00");
//!
//! // Arithmetic round-trips through the instant form, so rollover is exact.
//! let later = dt + 90 * 60;
//! assert_eq!(later - dt, 5_400);
//!
//! // Time of day parses from config-style strings.
//! let noon: TimeOfDay = "12:00".parse().unwrap();
//! assert_eq!(noon.second_of_day(), 43_200);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calendar` | Leap-year rule and month-length tables |
//! | `date` | Calendar date with derived day-of-week |
//! | `time_of_day` | Hours/minutes/seconds since local midnight |
//! | `date_time` | Date-time value and epoch conversions |
//! | `clock` | OS / deterministic "now" backends |
//! | `error` | Error types |
//!
//! Epoch conversions use the crate's own calendar tables rather than
//! platform APIs, so any `i64` instant decomposes the same way on every
//! host. The year scan is linear in distance from 1970, which is fine for
//! the civil timestamps this display works with.

mod calendar;
mod clock;
mod date;
mod date_time;
mod error;
mod time_of_day;

pub use calendar::{days_in_month, days_in_year, is_leap_year};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::CivilDate;
pub use date_time::CivilDateTime;
pub use error::TimeError;
pub use time_of_day::TimeOfDay;
