//! Daily game session
//!
//! Ties a turn to storage: restores today's turn, saves after every
//! change, and folds finished or expired turns into the statistics once.

use crate::config::GameConfig;
use crate::core::{CharacterUnit, Feedback, GameLocale, WORD_LENGTH, canonical};
use crate::game::{Rejection, TurnState, TurnStatus};
use crate::output::display::{print_board, print_keyboard, print_share, print_stats};
use crate::persist::{load_stats, load_turn, save_stats, save_turn};
use crate::schedule::{Scheduler, TurnScheduler};
use crate::stats::StatsSnapshot;
use crate::storage::{KeyValueStore, StoreError};
use crate::wordlists::Validator;
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};
use unicode_normalization::UnicodeNormalization;

/// Title used in share snippets
pub const SHARE_TITLE: &str = "Wordle";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no answer list available for {0}")]
    NoAnswer(GameLocale),
    #[error("word lists are for {lists}, but the game is set to {config}")]
    LocaleMismatch { config: GameLocale, lists: GameLocale },
    #[error(transparent)]
    Rejected(#[from] Rejection),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Today's turn for one locale, backed by a store
pub struct Session<'a, S: KeyValueStore> {
    config: GameConfig,
    validator: Validator,
    scheduler: TurnScheduler,
    store: &'a S,
    turn: TurnState,
    stats: StatsSnapshot,
    turn_index: i64,
}

impl<'a, S: KeyValueStore> Session<'a, S> {
    /// Restore or start the turn that is current at `now`
    ///
    /// A stored turn from an earlier period is tallied before it is
    /// replaced, so abandoned turns still count as played.
    ///
    /// # Errors
    /// `LocaleMismatch` when the validator serves another locale, `NoAnswer`
    /// when a new turn is needed but the validator has no answers, or the
    /// store error.
    #[instrument(level = "debug", skip_all, fields(locale = %config.locale, %now))]
    pub fn open(
        config: GameConfig,
        validator: Validator,
        store: &'a S,
        now: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let locale = config.locale;
        if validator.locale() != locale {
            return Err(SessionError::LocaleMismatch {
                config: locale,
                lists: validator.locale(),
            });
        }
        let scheduler = config.turn_scheduler();
        let turn_index = scheduler.turn_index(now);
        let mut stats = load_stats(store)?.unwrap_or_default();

        let turn = match load_turn(store, locale)? {
            Some(turn) if scheduler.is_fresh(turn.date(), now) => {
                debug!(status = ?turn.status(), "restored today's turn");
                turn
            }
            stale => {
                if let Some(mut old) = stale.filter(|t| !t.is_tallied()) {
                    stats = stats.tally(&mut old, &scheduler);
                    save_stats(store, &stats)?;
                    info!(date = %old.date(), "tallied expired turn");
                }
                let expected = validator
                    .answer(turn_index)
                    .ok_or(SessionError::NoAnswer(locale))?;
                TurnState::new(expected, now)
            }
        };

        let mut session = Self {
            config,
            validator,
            scheduler,
            store,
            turn,
            stats,
            turn_index,
        };
        session.tally_if_finished()?;
        save_turn(store, locale, &session.turn)?;
        Ok(session)
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn stats(&self) -> &StatsSnapshot {
        &self.stats
    }

    #[must_use]
    pub fn turn_index(&self) -> i64 {
        self.turn_index
    }

    #[must_use]
    pub fn locale(&self) -> GameLocale {
        self.config.locale
    }

    #[must_use]
    pub fn scheduler(&self) -> &TurnScheduler {
        &self.scheduler
    }

    /// Replace the active row with `text` and submit it
    ///
    /// Letters outside the locale alphabet are skipped. Input longer than a
    /// word keeps its first five letters and is refused as not in the word
    /// list, counting an attempt like any other rejection.
    ///
    /// # Errors
    /// The rejection reason, or a store error.
    pub fn enter_guess(&mut self, text: &str) -> Result<Feedback, SessionError> {
        let locale = self.config.locale;
        let letters: Vec<char> = text
            .nfc()
            .filter(|&c| locale.has_letter(canonical(c)))
            .collect();

        while self.turn.delete_backward() {}
        for &c in &letters {
            self.turn.insert_letter(CharacterUnit::typed(c, locale));
        }

        let outcome = if letters.len() > WORD_LENGTH {
            Err(self.turn.refuse(Rejection::NotInWordList))
        } else {
            self.turn.submit(&self.validator, self.config.hard_mode)
        };
        let feedback = match outcome {
            Ok(feedback) => feedback,
            Err(reason) => {
                save_turn(self.store, locale, &self.turn)?;
                return Err(reason.into());
            }
        };

        self.tally_if_finished()?;
        save_turn(self.store, locale, &self.turn)?;
        Ok(feedback)
    }

    fn tally_if_finished(&mut self) -> Result<(), StoreError> {
        if matches!(self.turn.status(), TurnStatus::Finished { is_tallied: false, .. }) {
            self.stats = self.stats.tally(&mut self.turn, &self.scheduler);
            save_stats(self.store, &self.stats)?;
            debug!(played = self.stats.played, streak = self.stats.streak, "turn tallied");
        }
        Ok(())
    }

    #[must_use]
    pub fn share(&self) -> String {
        self.turn.share_snippet(
            SHARE_TITLE,
            self.config.locale.flag(),
            self.turn_index,
            self.config.hide_first_row,
        )
    }
}

/// Play today's turn on stdin/stdout
///
/// # Errors
/// Returns an error on terminal I/O failure or when saving fails.
pub fn run_play<S: KeyValueStore>(session: &mut Session<'_, S>) -> anyhow::Result<()> {
    println!(
        "\n{} {} #{}",
        SHARE_TITLE.bright_cyan().bold(),
        session.locale().flag(),
        session.turn_index()
    );
    println!("Type a guess and press enter. 'share' prints the result, 'quit' exits.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_board(session.turn());
        if session.turn().is_completed() {
            break;
        }
        print_keyboard(session.turn(), session.locale());

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        match line.trim() {
            "" => {}
            "quit" | "q" | "exit" => return Ok(()),
            "share" => print_share(&session.share()),
            guess => match session.enter_guess(guess) {
                Ok(_) => {}
                Err(SessionError::Rejected(reason)) => {
                    println!("{}\n", reason.to_string().red().bold());
                }
                Err(e) => return Err(e.into()),
            },
        }
    }

    if session.turn().is_won() {
        println!("{}", "🎉 Solved!".bright_green().bold());
    } else {
        println!(
            "The word was {}",
            session.turn().expected().to_string().bright_yellow().bold()
        );
    }
    print_stats(session.stats());
    print_share(&session.share());
    Ok(())
}
