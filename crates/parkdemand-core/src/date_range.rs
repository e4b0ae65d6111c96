//! Look-ahead date range presets for the date-range dropdown.
//!
//! Presets are anchored on "today" in the selected location's timezone, so
//! they must be rebuilt on every render rather than cached.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::selection::Identified;

/// Preset selected when the session has no (or an unknown) date range.
pub const DEFAULT_DATE_RANGE_INDEX: usize = 2;

const PRESETS: [(&str, &str, i64); 3] = [
    ("next_7_days", "Next 7 days", 7),
    ("next_30_days", "Next 30 days", 30),
    ("next_90_days", "Next 90 days", 90),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRangeOption {
    pub id: &'static str,
    pub name: &'static str,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

impl Identified for DateRangeOption {
    fn id(&self) -> &str {
        self.id
    }
}

/// Calendar date of `now` as observed in `tz`.
#[must_use]
pub fn today_in(tz: Tz, now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// The three presets: `[today, today + N]` for N in 7, 30, 90 days.
#[must_use]
pub fn date_range_options(today: NaiveDate) -> Vec<DateRangeOption> {
    PRESETS
        .iter()
        .map(|&(id, name, days)| DateRangeOption {
            id,
            name,
            date_from: today,
            date_to: today + TimeDelta::days(days),
        })
        .collect()
}
