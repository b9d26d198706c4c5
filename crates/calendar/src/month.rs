//! First and last day of a month.

use plaindate_core::{DateError, DateResult, PlainDate, rolled_date};

/// The first day of `given`'s month.
pub fn start_of_month(given: &PlainDate) -> PlainDate {
    PlainDate::ymd(given.year(), given.month(), 1)
}

/// The last day of `given`'s month, found as day 0 of the following month.
///
/// # Errors
///
/// [`DateError::OutOfRange`] when that day cannot be represented.
pub fn end_of_month(given: &PlainDate) -> DateResult<PlainDate> {
    let next_month = given.month().checked_add(1).ok_or(DateError::OutOfRange {
        year: given.year(),
        month: given.month(),
        day: 0,
    })?;
    rolled_date(given.year(), next_month, 0).map(PlainDate::from)
}
