//! The canonical day-or-month value.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DateError, DateResult};
use crate::input::{DateFields, DateInput, DateShape};
use crate::native::rolled_date;
use crate::registry::DateRegistry;

/// Template used by [`PlainDate::format`] when callers have no preference.
pub const DEFAULT_FORMAT: &str = "YYYY-MM-DD";

/// Rendered for `DD` when the value is a month.
const MISSING_DAY: &str = "00";

#[derive(Debug)]
struct DateParts {
    fields: DateFields,
    key: i64,
}

/// An immutable calendar day, or a whole calendar month when it has no day.
///
/// Values are interned: every `PlainDate` with the same canonical key handed
/// out by one [`DateRegistry`] is the same instance, so cloning is cheap and
/// equality, ordering and hashing only look at the key. A month sorts before
/// the first day of that month.
///
/// There is no way to change a value once built:
///
/// ```compile_fail
/// let mut date = plaindate_core::PlainDate::ymd(2018, 8, 20);
/// date.year = 2019;
/// ```
#[derive(Clone)]
pub struct PlainDate {
    inner: Arc<DateParts>,
}

impl PlainDate {
    /// Builds or looks up the date described by `input` in the global registry.
    ///
    /// # Errors
    ///
    /// Fails when a string does not start with a `YYYY-MM[-DD]` date, or when
    /// a year/month/day component is not a base-10 integer. Out-of-range
    /// months and days are accepted as given.
    pub fn new(input: impl Into<DateInput>) -> DateResult<Self> {
        DateRegistry::global().date(input)
    }

    /// The day `year-month-day`.
    pub fn ymd(year: i32, month: i32, day: i32) -> Self {
        DateRegistry::global().intern(DateFields::new(year, month, Some(day)))
    }

    /// The month `year-month`.
    pub fn ym(year: i32, month: i32) -> Self {
        DateRegistry::global().intern(DateFields::new(year, month, None))
    }

    /// Today's date, in the local calendar.
    pub fn today() -> Self {
        Self::from(chrono::Local::now().date_naive())
    }

    pub fn from_shape(shape: &impl DateShape) -> Self {
        DateRegistry::global().intern(DateFields::from_shape(shape))
    }

    /// Parses the leading `YYYY-MM` or `YYYY-MM-DD` of `input`.
    pub fn parse(input: &str) -> DateResult<Self> {
        Self::new(DateInput::Text(input.to_owned()))
    }

    pub(crate) fn from_parts(fields: DateFields, key: i64) -> Self {
        Self {
            inner: Arc::new(DateParts { fields, key }),
        }
    }

    pub fn year(&self) -> i32 {
        self.inner.fields.year
    }

    pub fn month(&self) -> i32 {
        self.inner.fields.month
    }

    /// Day of month; `None` for a month value.
    pub fn day(&self) -> Option<i32> {
        self.inner.fields.day
    }

    /// `year * 10000 + month * 100 + day`, where a month counts as day 0.
    pub fn key(&self) -> i64 {
        self.inner.key
    }

    pub fn is_month(&self) -> bool {
        self.day().is_none()
    }

    pub fn fields(&self) -> DateFields {
        self.inner.fields
    }

    /// Whether both handles point at the very same interned instance.
    pub fn same_instance(&self, other: &PlainDate) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// The month this value belongs to.
    pub fn to_month(&self) -> PlainDate {
        if self.is_month() {
            return self.clone();
        }
        Self::ym(self.year(), self.month())
    }

    /// Inclusive range check against two bounds.
    pub fn is_within(&self, start: &PlainDate, end: &PlainDate) -> bool {
        (start.key()..=end.key()).contains(&self.key())
    }

    /// A native date for this value, with day 1 standing in for a month.
    ///
    /// Out-of-range months and days roll over into neighbouring months and
    /// years. Every call returns a new, independent value.
    ///
    /// # Errors
    ///
    /// [`DateError::OutOfRange`] when the result is outside what `chrono`
    /// can represent.
    pub fn to_native_date(&self) -> DateResult<NaiveDate> {
        rolled_date(self.year(), self.month(), self.day().unwrap_or(1))
    }

    /// Replaces the first `YYYY`, `YY`, `MM` and `DD` in `template`, in that
    /// order, with the full year, the last two digits of the year, and the
    /// zero-padded month and day. A month renders `DD` as `00`.
    pub fn format(&self, template: &str) -> String {
        let day = self
            .day()
            .map_or_else(|| MISSING_DAY.to_string(), two_digits);

        template
            .replacen("YYYY", &self.year().to_string(), 1)
            .replacen("YY", &two_digits(self.year()), 1)
            .replacen("MM", &two_digits(self.month()), 1)
            .replacen("DD", &day, 1)
    }
}

fn two_digits(number: i32) -> String {
    format!("{:02}", number.rem_euclid(100))
}

impl DateShape for PlainDate {
    fn year(&self) -> i32 {
        PlainDate::year(self)
    }

    fn month(&self) -> i32 {
        PlainDate::month(self)
    }

    fn day(&self) -> Option<i32> {
        PlainDate::day(self)
    }
}

impl From<NaiveDate> for PlainDate {
    fn from(value: NaiveDate) -> Self {
        use chrono::Datelike;

        // chrono months and days are one-based and never exceed 31.
        Self::ymd(value.year(), value.month() as i32, value.day() as i32)
    }
}

impl FromStr for PlainDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// `YYYY-MM-DD`, or `YYYY-MM` for a month.
impl fmt::Display for PlainDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())?;
        if let Some(day) = self.day() {
            write!(f, "-{day:02}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PlainDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlainDate({self})")
    }
}

impl PartialEq for PlainDate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for PlainDate {}

impl PartialOrd for PlainDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PlainDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for PlainDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Serialize for PlainDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PlainDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        PlainDate::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_its_components() {
        let day = PlainDate::ymd(2018, 5, 8);
        assert_eq!((day.year(), day.month(), day.day()), (2018, 5, Some(8)));
        assert!(!day.is_month());

        let month = PlainDate::ym(2018, 5);
        assert_eq!((month.year(), month.month(), month.day()), (2018, 5, None));
        assert!(month.is_month());
    }

    #[test]
    fn display_is_iso_like() {
        assert_eq!(PlainDate::ymd(2018, 7, 8).to_string(), "2018-07-08");
        assert_eq!(PlainDate::ym(2018, 7).to_string(), "2018-07");
        assert_eq!(PlainDate::ymd(987, 1, 2).to_string(), "0987-01-02");
        assert_eq!(PlainDate::ymd(40_000, 1, 2).to_string(), "40000-01-02");
    }

    #[test]
    fn format_substitutes_tokens() {
        let date = PlainDate::ymd(2018, 7, 8);
        assert_eq!(date.format("MM/DD/YY"), "07/08/18");
        assert_eq!(date.format(DEFAULT_FORMAT), "2018-07-08");
        assert_eq!(date.format("DD.MM.YYYY"), "08.07.2018");
        assert_eq!(date.format("no tokens"), "no tokens");
        assert_eq!(PlainDate::ymd(2005, 12, 31).format("YY"), "05");
    }

    #[test]
    fn format_uses_placeholder_for_missing_day() {
        assert_eq!(PlainDate::ym(2018, 7).format(DEFAULT_FORMAT), "2018-07-00");
        assert_eq!(PlainDate::ym(2018, 7).format("MM/YYYY"), "07/2018");
    }

    #[test]
    fn native_date_translates_components() {
        let native = PlainDate::ymd(2018, 4, 13).to_native_date().unwrap();
        assert_eq!(native, NaiveDate::from_ymd_opt(2018, 4, 13).unwrap());
    }

    #[test]
    fn native_date_of_month_is_its_first_day() {
        assert_eq!(
            PlainDate::ym(2018, 4).to_native_date().unwrap(),
            PlainDate::ymd(2018, 4, 1).to_native_date().unwrap()
        );
    }

    #[test]
    fn native_dates_are_independent_values() {
        let date = PlainDate::ymd(2018, 4, 13);
        let mut first = date.to_native_date().unwrap();
        let second = date.to_native_date().unwrap();
        assert_eq!(first, second);

        first = first.succ_opt().unwrap();
        assert_ne!(first, second);
        assert_eq!(date.to_native_date().unwrap(), second);
    }

    #[test]
    fn out_of_range_components_are_kept() {
        let date = PlainDate::ymd(2018, 13, 40);
        assert_eq!((date.month(), date.day()), (13, Some(40)));
        assert_eq!(date.key(), 20_181_340);
        assert_eq!(
            date.to_native_date().unwrap(),
            NaiveDate::from_ymd_opt(2019, 2, 9).unwrap()
        );
    }

    #[test]
    fn month_sorts_before_its_first_day() {
        let month = PlainDate::ym(2018, 5);
        let first = PlainDate::ymd(2018, 5, 1);
        assert!(month < first);
        assert_ne!(month, first);
        assert_eq!(first.to_month(), month);
        assert!(month.to_month().same_instance(&month));
    }

    #[test]
    fn is_within_is_inclusive() {
        let start = PlainDate::ymd(2018, 1, 1);
        let end = PlainDate::ymd(2018, 1, 31);
        assert!(start.is_within(&start, &end));
        assert!(end.is_within(&start, &end));
        assert!(PlainDate::ymd(2018, 1, 15).is_within(&start, &end));
        assert!(!PlainDate::ymd(2018, 2, 1).is_within(&start, &end));
        assert!(!PlainDate::ymd(2017, 12, 31).is_within(&start, &end));
    }

    #[test]
    fn serializes_as_string() {
        let date = PlainDate::ymd(2018, 7, 8);
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2018-07-08\"");
        let back: PlainDate = serde_json::from_str("\"2018-07-08\"").unwrap();
        assert!(back.same_instance(&date));
        assert!(serde_json::from_str::<PlainDate>("\"July 8\"").is_err());
    }

    #[test]
    fn debug_shows_the_date() {
        assert_eq!(format!("{:?}", PlainDate::ym(2018, 7)), "PlainDate(2018-07)");
    }
}
