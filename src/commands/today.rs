//! Where the clock stands in the turn schedule

use crate::schedule::Scheduler;
use chrono::{DateTime, TimeDelta, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodayInfo {
    pub turn_index: i64,
    /// Time until the next turn starts
    pub remaining: TimeDelta,
}

#[must_use]
pub fn today(scheduler: &impl Scheduler, now: DateTime<Utc>) -> TodayInfo {
    TodayInfo {
        turn_index: scheduler.turn_index(now),
        remaining: scheduler.remaining_ttl(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{TurnScheduler, epoch_start};

    #[test]
    fn bucket_schedule() {
        let scheduler = TurnScheduler::bucket(epoch_start(), 10).unwrap();
        let info = today(&scheduler, epoch_start() + TimeDelta::seconds(19));
        assert_eq!(info.turn_index, 1);
        assert_eq!(info.remaining, TimeDelta::seconds(1));
    }

    #[test]
    fn calendar_schedule() {
        let scheduler = TurnScheduler::fixed(epoch_start(), 3600).unwrap();
        let info = today(&scheduler, "2022-03-22T23:59:59Z".parse().unwrap());
        assert_eq!(info.turn_index, 1);
        assert_eq!(info.remaining, TimeDelta::seconds(82_801));
    }
}
