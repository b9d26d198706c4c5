//! Materialization into `chrono::NaiveDate` with host-calendar rollover.

use chrono::{NaiveDate, TimeDelta};

use crate::error::{DateError, DateResult};

/// Builds a native date the way a lenient host calendar does: months outside
/// `1..=12` carry into the year, and days outside the month carry into the
/// neighbouring months (day 0 is the last day of the previous month).
pub fn rolled_date(year: i32, month: i32, day: i32) -> DateResult<NaiveDate> {
    let out_of_range = || DateError::OutOfRange { year, month, day };

    let months_from_january = i64::from(month) - 1;
    let carried_year = i64::from(year) + months_from_january.div_euclid(12);
    let carried_year = i32::try_from(carried_year).map_err(|_| out_of_range())?;
    // rem_euclid(12) is always in 0..12.
    let carried_month = (months_from_january.rem_euclid(12) + 1) as u32;

    let first = NaiveDate::from_ymd_opt(carried_year, carried_month, 1).ok_or_else(out_of_range)?;
    first
        .checked_add_signed(TimeDelta::days(i64::from(day) - 1))
        .ok_or_else(out_of_range)
}
