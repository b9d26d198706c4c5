//! Weekday offsets, week boundaries and ISO week numbers.

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

use plaindate_core::{DateError, DateResult, PlainDate};

pub const DAYS_PER_WEEK: u32 = 7;

const LAST_DAY_INDEX: u32 = DAYS_PER_WEEK - 1;

/// Weeks start on Sunday unless told otherwise.
pub const DEFAULT_FIRST_DAY: Weekday = Weekday::Sun;

/// Maps a week-start index (0 = Sunday .. 6 = Saturday) to its weekday.
///
/// # Errors
///
/// [`DateError::InvalidWeekStart`] for indices above 6.
pub fn first_day_from_index(index: u8) -> DateResult<Weekday> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        _ => Err(DateError::InvalidWeekStart(index)),
    }
}

/// Position of `given` within its week, `0..=6`, counted from `first_day`.
pub fn weekday(given: &PlainDate, first_day: Weekday) -> DateResult<u32> {
    let raw = given.to_native_date()?.weekday().num_days_from_sunday();
    Ok((raw + DAYS_PER_WEEK - first_day.num_days_from_sunday()) % DAYS_PER_WEEK)
}

/// The first day of the week containing `given`.
pub fn start_of_week(given: &PlainDate, first_day: Weekday) -> DateResult<PlainDate> {
    let offset = weekday(given, first_day)?;
    shifted(given, -i64::from(offset))
}

/// The last day of the week containing `given`.
pub fn end_of_week(given: &PlainDate, first_day: Weekday) -> DateResult<PlainDate> {
    let offset = LAST_DAY_INDEX - weekday(given, first_day)?;
    shifted(given, i64::from(offset))
}

/// ISO-8601 week number (1..=53) of `given`.
///
/// The week belongs to the year of its Thursday, so late-December days can be
/// in week 1 and early-January days in week 52 or 53.
pub fn week_number(given: &PlainDate) -> DateResult<u32> {
    let date = given.to_native_date()?;

    // Nearest Thursday; Sunday counts as day 7 here.
    let iso_day = i64::from(date.weekday().number_from_monday());
    let thursday = add_days(given, date, 4 - iso_day)?;

    let year_start =
        NaiveDate::from_ymd_opt(thursday.year(), 1, 1).ok_or_else(|| out_of_range(given))?;
    let days_into_year = thursday.signed_duration_since(year_start).num_days();

    // ceil((days + 1) / 7); days_into_year is never negative.
    Ok(((days_into_year + i64::from(DAYS_PER_WEEK)) / i64::from(DAYS_PER_WEEK)) as u32)
}

fn shifted(given: &PlainDate, days: i64) -> DateResult<PlainDate> {
    let date = given.to_native_date()?;
    add_days(given, date, days).map(PlainDate::from)
}

fn add_days(given: &PlainDate, date: NaiveDate, days: i64) -> DateResult<NaiveDate> {
    date.checked_add_signed(TimeDelta::days(days))
        .ok_or_else(|| out_of_range(given))
}

fn out_of_range(given: &PlainDate) -> DateError {
    DateError::OutOfRange {
        year: given.year(),
        month: given.month(),
        day: given.day().unwrap_or(1),
    }
}
