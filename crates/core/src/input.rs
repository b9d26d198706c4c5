//! Input shapes accepted by the `PlainDate` factory.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::date::PlainDate;
use crate::error::{DateError, DateResult};
use crate::parse::{parse_date_prefix, parse_int};

/// Anything exposing a year, a month and an optional day.
///
/// Implement this for your own record types to hand them to
/// [`PlainDate::from_shape`].
pub trait DateShape {
    fn year(&self) -> i32;
    fn month(&self) -> i32;
    fn day(&self) -> Option<i32>;
}

/// Plain year/month/day record, the structural input shape.
///
/// Deserializes from `{"year": 2018, "month": 5, "day": 8}`; `day` may be
/// omitted for a month, and `date` is accepted as an alias for it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateFields {
    pub year: i32,
    pub month: i32,
    #[serde(default, alias = "date", skip_serializing_if = "Option::is_none")]
    pub day: Option<i32>,
}

impl DateFields {
    pub fn new(year: i32, month: i32, day: Option<i32>) -> Self {
        Self { year, month, day }
    }

    pub fn from_shape(shape: &impl DateShape) -> Self {
        Self::new(shape.year(), shape.month(), shape.day())
    }

    /// A day of zero cannot be told apart from a month in the canonical key,
    /// so it is dropped.
    pub(crate) fn normalized(self) -> Self {
        Self {
            day: self.day.filter(|&day| day != 0),
            ..self
        }
    }

    /// `year * 10000 + month * 100 + day`, with a missing day counting as 0.
    pub fn key(&self) -> i64 {
        i64::from(self.year) * 10_000 + i64::from(self.month) * 100 + i64::from(self.day.unwrap_or(0))
    }
}

impl DateShape for DateFields {
    fn year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> i32 {
        self.month
    }

    fn day(&self) -> Option<i32> {
        self.day
    }
}

/// A single year, month or day argument: a number or its decimal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Number(i64),
    Text(String),
}

impl Component {
    fn value(&self, field: &'static str) -> DateResult<i32> {
        match self {
            Component::Number(n) => {
                i32::try_from(*n).map_err(|_| DateError::ComponentOverflow { field, value: *n })
            }
            Component::Text(text) => parse_int(field, text),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, Component::Text(text) if text.trim().is_empty())
    }
}

macro_rules! impl_component_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Component {
                fn from(value: $t) -> Self {
                    Component::Number(i64::from(value))
                }
            }
        )*
    };
}

impl_component_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Component {
    fn from(value: &str) -> Self {
        Component::Text(value.to_owned())
    }
}

impl From<String> for Component {
    fn from(value: String) -> Self {
        Component::Text(value)
    }
}

/// Every input shape the factory understands, in precedence order.
#[derive(Debug, Clone)]
pub enum DateInput {
    /// An instance that is handed back unchanged.
    Existing(PlainDate),
    /// No input at all: today's local date.
    Today,
    /// A native date, read in local calendar terms.
    Native(NaiveDate),
    /// A structural year/month/day record.
    Fields(DateFields),
    /// An ISO-like string, `YYYY-MM[-DD]` followed by anything.
    Text(String),
    /// Separate year, month and optional day arguments.
    Parts {
        year: Component,
        month: Component,
        day: Option<Component>,
    },
}

pub(crate) enum Resolved {
    Existing(PlainDate),
    Fields(DateFields),
}

impl DateInput {
    pub(crate) fn resolve(self) -> DateResult<Resolved> {
        let fields = match self {
            DateInput::Existing(date) => return Ok(Resolved::Existing(date)),
            DateInput::Today => native_fields(Local::now().date_naive()),
            DateInput::Native(date) => native_fields(date),
            DateInput::Fields(fields) => fields,
            DateInput::Text(text) if text.is_empty() => native_fields(Local::now().date_naive()),
            DateInput::Text(text) if text.chars().count() > 4 => parse_date_prefix(&text)?,
            DateInput::Text(year) => return Err(DateError::MissingMonth { year }),
            DateInput::Parts { year, month, day } => {
                let day = match day {
                    Some(day) if !day.is_blank() => Some(day.value("day")?),
                    _ => None,
                };
                DateFields::new(year.value("year")?, month.value("month")?, day)
            }
        };
        Ok(Resolved::Fields(fields))
    }
}

fn native_fields(date: NaiveDate) -> DateFields {
    use chrono::Datelike;

    // chrono months and days are one-based and never exceed 31.
    DateFields::new(date.year(), date.month() as i32, Some(date.day() as i32))
}

impl From<PlainDate> for DateInput {
    fn from(value: PlainDate) -> Self {
        DateInput::Existing(value)
    }
}

impl From<&PlainDate> for DateInput {
    fn from(value: &PlainDate) -> Self {
        DateInput::Existing(value.clone())
    }
}

impl From<()> for DateInput {
    fn from(_: ()) -> Self {
        DateInput::Today
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(DateInput::Today, Into::into)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Native(value)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::Native(value.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(value: DateTime<Tz>) -> Self {
        DateInput::Native(value.with_timezone(&Local).date_naive())
    }
}

impl From<DateFields> for DateInput {
    fn from(value: DateFields) -> Self {
        DateInput::Fields(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl<Y, M> From<(Y, M)> for DateInput
where
    Y: Into<Component>,
    M: Into<Component>,
{
    fn from((year, month): (Y, M)) -> Self {
        DateInput::Parts {
            year: year.into(),
            month: month.into(),
            day: None,
        }
    }
}

impl<Y, M, D> From<(Y, M, D)> for DateInput
where
    Y: Into<Component>,
    M: Into<Component>,
    D: Into<Component>,
{
    fn from((year, month, day): (Y, M, D)) -> Self {
        DateInput::Parts {
            year: year.into(),
            month: month.into(),
            day: Some(day.into()),
        }
    }
}
