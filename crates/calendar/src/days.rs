//! Day differences.

use plaindate_core::{DateResult, PlainDate};

/// Number of days from `one` to `other`; negative when `other` is earlier.
///
/// Months count as their first day.
///
/// # Errors
///
/// Fails if either value cannot be materialized as a calendar date.
pub fn days_between(one: &PlainDate, other: &PlainDate) -> DateResult<i64> {
    let from = one.to_native_date()?;
    let to = other.to_native_date()?;
    Ok(to.signed_duration_since(from).num_days())
}
