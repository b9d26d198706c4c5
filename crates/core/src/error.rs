//! Date error model.

use thiserror::Error;

/// Result type used across the date crates.
pub type DateResult<T> = Result<T, DateError>;

/// Failure while building or materializing a `PlainDate`.
///
/// Out-of-range month or day numbers are not errors: they are encoded as
/// given and roll over when materialized. Only input that cannot be read at
/// all, or that leaves the representable calendar, ends up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// A date string did not start with `YYYY-MM` or `YYYY-MM-DD`.
    #[error("date pattern not matched: {input:?}")]
    Pattern { input: String },

    /// A bare year was given without a month.
    #[error("month missing for year {year:?}")]
    MissingMonth { year: String },

    /// A date component was not a base-10 integer.
    #[error("invalid {field}: {value:?}")]
    InvalidComponent { field: &'static str, value: String },

    /// A date component does not fit in 32 bits.
    #[error("{field} out of bounds: {value}")]
    ComponentOverflow { field: &'static str, value: i64 },

    /// The date cannot be represented as a native calendar date.
    #[error("date out of range: {year}-{month}-{day}")]
    OutOfRange { year: i32, month: i32, day: i32 },

    /// A first-day-of-week index outside `0..=6`.
    #[error("invalid week start index: {0} (must be 0..=6)")]
    InvalidWeekStart(u8),
}

impl DateError {
    pub fn pattern(input: impl Into<String>) -> Self {
        Self::Pattern {
            input: input.into(),
        }
    }

    pub fn invalid_component(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidComponent {
            field,
            value: value.into(),
        }
    }
}
