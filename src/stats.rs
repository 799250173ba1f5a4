//! Player statistics

use crate::game::{MAX_ROWS, TurnState};
use crate::schedule::Scheduler;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Running totals over every tallied turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub played: u32,
    pub won: u32,
    pub max_streak: u32,
    pub streak: u32,
    /// Wins by number of rows used, index 0 is a first-row win
    #[serde(default = "empty_distribution")]
    pub guess_distribution: Vec<u32>,
    #[serde(default)]
    pub last_win_at: Option<DateTime<Utc>>,
}

fn empty_distribution() -> Vec<u32> {
    vec![0; MAX_ROWS]
}

impl Default for StatsSnapshot {
    fn default() -> Self {
        Self {
            played: 0,
            won: 0,
            max_streak: 0,
            streak: 0,
            guess_distribution: empty_distribution(),
            last_win_at: None,
        }
    }
}

impl StatsSnapshot {
    /// Fold a turn into the statistics
    ///
    /// Returns an unchanged copy when the turn was already tallied, so
    /// reloading a finished turn never counts it twice. A win extends the
    /// streak only when the previous win was in the period right before the
    /// turn's; any loss resets it to zero.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{CharacterUnit, Word};
    /// use wordle_daily::game::TurnState;
    /// use wordle_daily::schedule::{TurnScheduler, epoch_start};
    /// use wordle_daily::stats::StatsSnapshot;
    /// use wordle_daily::wordlists::Validator;
    /// use wordle_daily::core::GameLocale;
    ///
    /// let scheduler = TurnScheduler::fixed(epoch_start(), 0).unwrap();
    /// let mut turn = TurnState::new(Word::new("crane").unwrap(), epoch_start());
    /// for c in "crane".chars() {
    ///     turn.insert_letter(CharacterUnit::single(c));
    /// }
    /// turn.submit(&Validator::loading(GameLocale::EnUs), false).unwrap();
    ///
    /// let stats = StatsSnapshot::default().update(&turn, &scheduler);
    /// assert_eq!((stats.played, stats.won, stats.streak), (1, 1, 1));
    /// assert_eq!(stats.guess_distribution, [1, 0, 0, 0, 0, 0]);
    /// ```
    #[must_use]
    #[instrument(level = "debug", skip_all, fields(turn_date = %turn.date()))]
    pub fn update(&self, turn: &TurnState, scheduler: &impl Scheduler) -> Self {
        if turn.is_tallied() {
            return self.clone();
        }

        let won = turn.is_won();
        let submitted = turn.submitted_count();
        let streakable = self
            .last_win_at
            .is_some_and(|last| scheduler.is_in_preceding_period(last, turn.date()));

        let streak = match (won, streakable) {
            (true, true) => self.streak + 1,
            (true, false) => 1,
            (false, _) => 0,
        };

        let mut guess_distribution = self.guess_distribution.clone();
        guess_distribution.resize(MAX_ROWS.max(guess_distribution.len()), 0);
        if won && submitted > 0 {
            guess_distribution[submitted - 1] += 1;
        }

        let next = Self {
            played: self.played + u32::from(submitted > 0),
            won: self.won + u32::from(won),
            max_streak: if won {
                self.max_streak.max(streak)
            } else {
                self.max_streak
            },
            streak,
            guess_distribution,
            last_win_at: if won { Some(turn.date()) } else { self.last_win_at },
        };
        debug!(won, streak = next.streak, played = next.played, "turn folded into stats");
        next
    }

    /// Fold `turn` in and mark it tallied
    ///
    /// Calling this again with the same turn changes nothing.
    #[must_use]
    pub fn tally(&self, turn: &mut TurnState, scheduler: &impl Scheduler) -> Self {
        let next = self.update(turn, scheduler);
        turn.mark_tallied();
        next
    }

    /// Share of played turns that were won, rounded down
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.played == 0 {
            0
        } else {
            self.won * 100 / self.played
        }
    }

    /// Index of the most common winning row, earliest on ties
    #[must_use]
    pub fn max_row(&self) -> usize {
        let max = self.guess_distribution.iter().copied().max().unwrap_or(0);
        self.guess_distribution
            .iter()
            .position(|&n| n == max)
            .unwrap_or(0)
    }
}
