//! # plaindate-calendar
//!
//! Calendar arithmetic over [`PlainDate`] values: day differences, month and
//! week boundaries, weekday offsets and ISO-8601 week numbers.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::Weekday;
//! use plaindate_calendar::{days_between, end_of_month, start_of_week, week_number};
//! use plaindate_core::PlainDate;
//!
//! let may_18 = PlainDate::ymd(2018, 5, 18);
//! assert_eq!(days_between(&may_18, &PlainDate::ymd(2018, 5, 23)).unwrap(), 5);
//! assert_eq!(end_of_month(&PlainDate::ym(2020, 2)).unwrap(), PlainDate::ymd(2020, 2, 29));
//! assert_eq!(
//!     start_of_week(&PlainDate::ymd(2018, 5, 1), Weekday::Sun).unwrap(),
//!     PlainDate::ymd(2018, 4, 29)
//! );
//! assert_eq!(week_number(&PlainDate::ymd(2018, 12, 31)).unwrap(), 1);
//! ```
//!
//! Month values are anchored at their first day wherever a day is needed.
//! Every result is the interned instance from the global registry.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `days` | Signed day differences |
//! | `month` | First and last day of a month |
//! | `week` | Weekday offsets, week boundaries, ISO week numbers |
//! | `options` | Serializable week-start setting |

mod days;
mod month;
mod options;
mod week;

pub use days::days_between;
pub use month::{end_of_month, start_of_month};
pub use options::WeekOptions;
pub use week::{
    DAYS_PER_WEEK, DEFAULT_FIRST_DAY, end_of_week, first_day_from_index, start_of_week,
    week_number, weekday,
};

#[doc(no_inline)]
pub use plaindate_core::PlainDate;
