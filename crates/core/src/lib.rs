//! `plaindate-core`: the interned calendar day/month value type.
//!
//! This crate contains the value type, its input shapes, the identity
//! registry and the comparison helpers. Calendar arithmetic lives in
//! `plaindate-calendar`.
//!
//! ```
//! use plaindate_core::PlainDate;
//!
//! let day = PlainDate::new("2018-07-08T10:00:00+02:00").unwrap();
//! assert!(day.same_instance(&PlainDate::ymd(2018, 7, 8)));
//! assert_eq!(day.format("MM/DD/YY"), "07/08/18");
//! assert!(PlainDate::ym(2018, 7) < day);
//! ```

pub mod comparison;
pub mod date;
pub mod error;
pub mod input;
pub mod native;
mod parse;
pub mod registry;

pub use comparison::{compare, is_after, is_before, is_equal, is_in_range};
pub use date::{DEFAULT_FORMAT, PlainDate};
pub use error::{DateError, DateResult};
pub use input::{Component, DateFields, DateInput, DateShape};
pub use native::rolled_date;
pub use registry::DateRegistry;
