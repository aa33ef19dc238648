//! Clock backends: snapshot the current OS time as civil fields.
//!
//! The backends sit behind the [`Clock`] capability trait so that callers
//! pick one at configuration time instead of branching on the platform (or
//! on test vs. production) at every call site. Both backends emit the same
//! [`CivilDateTime`] value type and agree bit-for-bit on the UTC fields for
//! a given instant.

use chrono::{Datelike, Timelike};

use crate::date::CivilDate;
use crate::date_time::CivilDateTime;
use crate::time_of_day::TimeOfDay;

/// Source of "now" snapshots, decomposed into civil fields.
///
/// `now_local` reports whatever civil time the OS considers local; no
/// timezone offset is tracked or exposed. Each call produces an independent
/// value, so a `Clock` is freely shareable between readers.
pub trait Clock {
    /// Current time, decomposed as UTC.
    fn now_utc(&self) -> CivilDateTime;

    /// Current time, decomposed as the OS-local civil time.
    fn now_local(&self) -> CivilDateTime;
}

/// The OS-native backend, reading the system clock through chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> CivilDateTime {
        decompose(chrono::Utc::now().naive_utc())
    }

    fn now_local(&self) -> CivilDateTime {
        decompose(chrono::Local::now().naive_local())
    }
}

/// A deterministic backend pinned to one instant.
///
/// Used by tests and simulations where wall-clock reads would make runs
/// unreproducible. "Local" time is the pinned instant shifted by a fixed
/// offset, standing in for whatever the OS would report.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    /// The pinned instant, seconds since the Unix epoch.
    instant: i64,
    /// Offset added to the instant to produce the "local" reading.
    local_offset_seconds: i64,
}

impl FixedClock {
    /// Creates a fixed clock pinned to a UTC instant with a local offset.
    pub fn new(instant: i64, local_offset_seconds: i64) -> Self {
        Self {
            instant,
            local_offset_seconds,
        }
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> CivilDateTime {
        CivilDateTime::from_unix_utc(self.instant)
    }

    fn now_local(&self) -> CivilDateTime {
        CivilDateTime::from_unix_utc(self.instant + self.local_offset_seconds)
    }
}

/// Rebuilds chrono's broken-down fields as a [`CivilDateTime`].
///
/// The fields come straight from chrono; only the day-of-week is rederived
/// so that every `CivilDate` in the crate uses the same 0 = Sunday
/// convention regardless of backend.
fn decompose(dt: chrono::NaiveDateTime) -> CivilDateTime {
    let date = CivilDate::from_validated_ymd(dt.year(), dt.month() as u8, dt.day() as u8);
    let time = TimeOfDay::from_second_of_day(dt.num_seconds_from_midnight());
    CivilDateTime::new(date, time)
}
