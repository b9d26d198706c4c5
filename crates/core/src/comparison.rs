//! Ordering helpers over optional dates.
//!
//! All of these order by canonical key. The predicates take `Option`s so
//! that callers holding maybe-missing dates get `false` instead of having to
//! unwrap first.

use core::cmp::Ordering;

use crate::date::PlainDate;

/// Three-way comparison, suitable for `sort_by`.
pub fn compare(one: &PlainDate, other: &PlainDate) -> Ordering {
    one.key().cmp(&other.key())
}

/// Whether both dates are present and represent the same day or month.
pub fn is_equal(one: Option<&PlainDate>, other: Option<&PlainDate>) -> bool {
    matches!((one, other), (Some(one), Some(other)) if compare(one, other) == Ordering::Equal)
}

/// Whether both dates are present and `one` comes first.
pub fn is_before(one: Option<&PlainDate>, other: Option<&PlainDate>) -> bool {
    matches!((one, other), (Some(one), Some(other)) if compare(one, other) == Ordering::Less)
}

/// Whether both dates are present and `one` comes last.
pub fn is_after(one: Option<&PlainDate>, other: Option<&PlainDate>) -> bool {
    matches!((one, other), (Some(one), Some(other)) if compare(one, other) == Ordering::Greater)
}

/// Whether `date` lies between `start` and `end`, both inclusive.
///
/// `false` if any of the three is missing.
pub fn is_in_range(
    date: Option<&PlainDate>,
    start: Option<&PlainDate>,
    end: Option<&PlainDate>,
) -> bool {
    match (date, start, end) {
        (Some(date), Some(start), Some(end)) => date.is_within(start, end),
        _ => false,
    }
}
