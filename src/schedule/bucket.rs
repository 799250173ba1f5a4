//! Fixed-length turns for testing and debugging

use super::Scheduler;
use chrono::{DateTime, TimeDelta, Utc};

/// Turns of a fixed length counted from `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketScheduler {
    start: DateTime<Utc>,
    bucket: TimeDelta,
}

impl BucketScheduler {
    /// Returns `None` unless `bucket` is at least one millisecond
    #[must_use]
    pub fn new(start: DateTime<Utc>, bucket: TimeDelta) -> Option<Self> {
        (bucket.num_milliseconds() > 0).then_some(Self { start, bucket })
    }

    #[must_use]
    pub fn bucket(&self) -> TimeDelta {
        self.bucket
    }
}

impl Scheduler for BucketScheduler {
    fn turn_index(&self, at: DateTime<Utc>) -> i64 {
        let elapsed = at.signed_duration_since(self.start).num_milliseconds();
        elapsed.div_euclid(self.bucket.num_milliseconds())
    }

    fn remaining_ttl(&self, at: DateTime<Utc>) -> TimeDelta {
        let next = self.turn_index(at) + 1;
        let boundary = self.start + TimeDelta::milliseconds(next * self.bucket.num_milliseconds());
        boundary.signed_duration_since(at)
    }
}
