//! Calendar-day turns

use super::Scheduler;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

/// One turn per calendar day in `tz`, rolling over at local midnight
///
/// The time zone is part of the scheduler: the same instant can belong to
/// different days for players in different zones.
#[derive(Debug, Clone)]
pub struct CalendarScheduler<Tz: TimeZone> {
    start: DateTime<Utc>,
    tz: Tz,
}

impl<Tz: TimeZone> CalendarScheduler<Tz> {
    /// Turn 0 is the local day containing `start`
    #[must_use]
    pub fn new(start: DateTime<Utc>, tz: Tz) -> Self {
        Self { start, tz }
    }

    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Whole local days from `first` to `second`
    fn day_diff(&self, first: DateTime<Utc>, second: DateTime<Utc>) -> i64 {
        let first = first.with_timezone(&self.tz).date_naive();
        let second = second.with_timezone(&self.tz).date_naive();
        second.signed_duration_since(first).num_days()
    }
}

impl<Tz: TimeZone> Scheduler for CalendarScheduler<Tz> {
    fn turn_index(&self, at: DateTime<Utc>) -> i64 {
        self.day_diff(self.start, at)
    }

    fn remaining_ttl(&self, at: DateTime<Utc>) -> TimeDelta {
        let local = at.with_timezone(&self.tz);
        let Some(midnight) = local
            .date_naive()
            .succ_opt()
            .and_then(|day| day.and_hms_opt(0, 0, 0))
        else {
            return TimeDelta::zero();
        };

        match self.tz.from_local_datetime(&midnight).earliest() {
            Some(next) => next.with_timezone(&Utc).signed_duration_since(at),
            // midnight skipped by a DST change
            None => midnight.signed_duration_since(local.naive_local()),
        }
    }
}
