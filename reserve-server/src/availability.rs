//! 可预订时间网格
//!
//! Builds the slot-of-day list and the date horizon that every table gets
//! a private copy of when it is provisioned.
//!
//! ```text
//! work hours 09:00 ─ 17:00          today ─ today + 30
//!   09:00 09:30 … 16:30      ×        31 dates
//! ```

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Distance between two consecutive slots, in seconds
pub const SLOT_SECONDS: u32 = 30 * 60;

/// Number of bookable days, today included
pub const HORIZON_DAYS: usize = 31;

/// Slot values and horizon dates generated once per provisioning request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityGrid {
    pub free_times: Vec<NaiveTime>,
    pub reserve_dates: Vec<NaiveDate>,
}

impl AvailabilityGrid {
    /// Grid for a company open `[from, to)`, starting at `today`
    pub fn for_hours(from: NaiveTime, to: NaiveTime, today: NaiveDate) -> Self {
        Self {
            free_times: generate_slots(from, to),
            reserve_dates: generate_date_horizon(today, HORIZON_DAYS),
        }
    }

    /// Rows one table will own: slots plus dates
    pub fn rows_per_table(&self) -> usize {
        self.free_times.len() + self.reserve_dates.len()
    }
}

/// Half-hour slots from `start` (inclusive) up to `end` (exclusive).
///
/// The cursor keeps stepping and appending until it reaches or passes `end`,
/// then the last appended value is dropped. With `start >= end` only `start`
/// is appended, so the result is empty.
///
/// Works in seconds since midnight so the cursor never wraps past 24:00 and
/// seconds carried by either bound are kept.
pub fn generate_slots(start: NaiveTime, end: NaiveTime) -> Vec<NaiveTime> {
    let end_secs = end.num_seconds_from_midnight();
    let mut cursor = start.num_seconds_from_midnight();

    let mut seconds = vec![cursor];
    while cursor < end_secs {
        cursor += SLOT_SECONDS;
        seconds.push(cursor);
    }
    seconds.pop();

    seconds
        .into_iter()
        .filter_map(|secs| NaiveTime::from_num_seconds_from_midnight_opt(secs, 0))
        .collect()
}

/// `days` consecutive dates beginning with `today`
pub fn generate_date_horizon(today: NaiveDate, days: usize) -> Vec<NaiveDate> {
    today.iter_days().take(days).collect()
}
