//! Turn scheduling
//!
//! Maps wall-clock time to a turn index. Two strategies share one contract:
//! calendar days in a chosen time zone, and fixed-length buckets for
//! testing.

mod bucket;
mod calendar;

pub use bucket::BucketScheduler;
pub use calendar::CalendarScheduler;

use chrono::{DateTime, FixedOffset, Local, TimeDelta, Utc};

/// Unix time of turn 0, 2022-03-22T16:20:02Z
pub const EPOCH_START_SECS: i64 = 1_647_966_002;

/// Instant of turn 0
#[must_use]
pub fn epoch_start() -> DateTime<Utc> {
    DateTime::from_timestamp(EPOCH_START_SECS, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Maps instants to turns
///
/// Only [`Scheduler::turn_index`] and [`Scheduler::remaining_ttl`] are
/// strategy specific; freshness and streak continuity follow from the
/// index.
pub trait Scheduler {
    /// Whole periods elapsed since turn 0 (negative before it)
    fn turn_index(&self, at: DateTime<Utc>) -> i64;

    /// Time until the next period starts
    fn remaining_ttl(&self, at: DateTime<Utc>) -> TimeDelta;

    /// Whether state created at `state_date` still belongs to the period of `at`
    fn is_fresh(&self, state_date: DateTime<Utc>, at: DateTime<Utc>) -> bool {
        self.turn_index(state_date) == self.turn_index(at)
    }

    /// Whether `second` falls in the period right after the one of `first`
    fn is_in_preceding_period(&self, first: DateTime<Utc>, second: DateTime<Utc>) -> bool {
        self.turn_index(second) - self.turn_index(first) == 1
    }
}

/// Scheduler chosen at runtime
#[derive(Debug, Clone)]
pub enum TurnScheduler {
    /// Calendar days in the system time zone
    Local(CalendarScheduler<Local>),
    /// Calendar days at a fixed UTC offset
    Fixed(CalendarScheduler<FixedOffset>),
    Bucket(BucketScheduler),
}

impl TurnScheduler {
    /// Daily turns in the system time zone
    #[must_use]
    pub fn local(start: DateTime<Utc>) -> Self {
        Self::Local(CalendarScheduler::new(start, Local))
    }

    /// Daily turns at `offset_secs` east of UTC, `None` for an invalid offset
    #[must_use]
    pub fn fixed(start: DateTime<Utc>, offset_secs: i32) -> Option<Self> {
        FixedOffset::east_opt(offset_secs).map(|tz| Self::Fixed(CalendarScheduler::new(start, tz)))
    }

    /// Turns of `secs` seconds, `None` when `secs` is zero
    #[must_use]
    pub fn bucket(start: DateTime<Utc>, secs: u32) -> Option<Self> {
        BucketScheduler::new(start, TimeDelta::seconds(i64::from(secs))).map(Self::Bucket)
    }

    fn inner(&self) -> &dyn Scheduler {
        match self {
            Self::Local(s) => s,
            Self::Fixed(s) => s,
            Self::Bucket(s) => s,
        }
    }
}

impl Scheduler for TurnScheduler {
    fn turn_index(&self, at: DateTime<Utc>) -> i64 {
        self.inner().turn_index(at)
    }

    fn remaining_ttl(&self, at: DateTime<Utc>) -> TimeDelta {
        self.inner().remaining_ttl(at)
    }
}
