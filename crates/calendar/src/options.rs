//! Serializable week settings.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use plaindate_core::DateResult;

use crate::week::first_day_from_index;

/// Which day a week starts on, as an index (0 = Sunday .. 6 = Saturday).
///
/// Meant to be embedded in a caller's own configuration; missing fields fall
/// back to Sunday.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeekOptions {
    pub first_day_index: u8,
}

impl WeekOptions {
    pub fn first_day(&self) -> DateResult<Weekday> {
        first_day_from_index(self.first_day_index)
    }
}
