use anyhow::Result;

use boreas_time::{CivilDateTime, Clock, SystemClock};

use crate::cli::TimeArgs;

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Convert an instant to civil fields, or snapshot the system clock.
pub fn run(args: TimeArgs) -> Result<()> {
    match args.unix {
        Some(instant) => {
            let instant = instant + args.offset.unwrap_or(0);
            let dt = CivilDateTime::from_unix_utc(instant);
            print_instant("utc", dt);
        }
        None => {
            let clock = SystemClock;
            let utc = clock.now_utc();
            let utc = match args.offset {
                Some(offset) => utc + offset,
                None => utc,
            };
            print_instant("utc", utc);
            if args.offset.is_none() {
                let local = clock.now_local();
                println!(
                    "local  {local} ({})",
                    WEEKDAYS[local.date().day_of_week() as usize]
                );
            }
        }
    }
    Ok(())
}

fn print_instant(label: &str, dt: CivilDateTime) {
    println!(
        "{label:<6} {dt} ({}, unix {})",
        WEEKDAYS[dt.date().day_of_week() as usize],
        dt.to_unix_utc()
    );
}
