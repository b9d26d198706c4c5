//! Reading dates out of ISO-like strings.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DateError, DateResult};
use crate::input::DateFields;

/// `YYYY-MM` or `YYYY-MM-DD` at the start of the input. Years may be wider
/// than four digits; anything after the date (a time, an offset) is ignored.
static DATE_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4,})-([0-9]{1,2})(?:-([0-9]{1,2}))?").expect("invalid regex")
});

/// Extracts year, month and optional day from the leading date of `input`.
pub(crate) fn parse_date_prefix(input: &str) -> DateResult<DateFields> {
    let Some(captures) = DATE_PREFIX_RE.captures(input) else {
        tracing::debug!(input, "date pattern not matched");
        return Err(DateError::pattern(input));
    };

    let year = parse_int("year", &captures[1])?;
    let month = parse_int("month", &captures[2])?;
    let day = captures
        .get(3)
        .map(|m| parse_int("day", m.as_str()))
        .transpose()?;

    Ok(DateFields::new(year, month, day))
}

/// Parses a base-10 integer that has to fit a date component.
pub(crate) fn parse_int(field: &'static str, text: &str) -> DateResult<i32> {
    let wide: i64 = text
        .trim()
        .parse()
        .map_err(|_| DateError::invalid_component(field, text))?;
    i32::try_from(wide).map_err(|_| DateError::ComponentOverflow { field, value: wide })
}
