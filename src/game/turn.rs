//! One daily turn: the secret, the board and its status

use super::hard_mode::rows_follow_hard_mode;
use super::hints::KeyboardHints;
use super::rejection::Rejection;
use super::row::{GuessRow, submitted_rows};
use crate::core::{CharacterUnit, Feedback, WORD_LENGTH, Word};
use crate::wordlists::Validator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Rows on a board
pub const MAX_ROWS: usize = 6;

/// Lifecycle of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TurnStatus {
    #[default]
    NotStarted,
    InProgress,
    #[serde(rename_all = "camelCase")]
    Finished { is_tallied: bool, is_won: bool },
}

/// The playable state of a turn
///
/// Rows are filled top to bottom. The turn finishes when a submitted row
/// matches the secret or when all rows are submitted; after that no input
/// is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnState {
    expected: Word,
    date: DateTime<Utc>,
    rows: Vec<GuessRow>,
    status: TurnStatus,
}

impl TurnState {
    /// A fresh turn with empty rows
    #[must_use]
    pub fn new(expected: Word, date: DateTime<Utc>) -> Self {
        let rows = (0..MAX_ROWS).map(|_| GuessRow::empty(expected.clone())).collect();
        Self {
            expected,
            date,
            rows,
            status: TurnStatus::NotStarted,
        }
    }

    /// Rebuild a turn from stored parts
    ///
    /// The row list is padded or cut to [`MAX_ROWS`]. A stored status that
    /// disagrees with the rows is corrected: boards that are complete become
    /// finished, keeping the stored tally flag.
    #[must_use]
    pub fn restore(
        expected: Word,
        date: DateTime<Utc>,
        mut rows: Vec<GuessRow>,
        status: TurnStatus,
    ) -> Self {
        rows.truncate(MAX_ROWS);
        while rows.len() < MAX_ROWS {
            rows.push(GuessRow::empty(expected.clone()));
        }

        let mut turn = Self {
            expected,
            date,
            rows,
            status,
        };
        turn.status = turn.derived_status(status.is_tallied());
        turn
    }

    fn derived_status(&self, tallied: bool) -> TurnStatus {
        if self.is_completed() {
            TurnStatus::Finished {
                is_tallied: tallied,
                is_won: self.is_won(),
            }
        } else if tallied {
            // tallied before the board was complete (turn expired)
            TurnStatus::Finished {
                is_tallied: true,
                is_won: false,
            }
        } else if self.rows.iter().any(|r| r.is_submitted() || !r.word().is_empty()) {
            TurnStatus::InProgress
        } else {
            TurnStatus::NotStarted
        }
    }

    #[inline]
    #[must_use]
    pub fn expected(&self) -> &Word {
        &self.expected
    }

    /// When the turn was created
    #[inline]
    #[must_use]
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> TurnStatus {
        self.status
    }

    /// Index of the editable row
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.rows.iter().position(|r| !r.is_submitted())
    }

    #[must_use]
    pub fn active_row(&self) -> Option<&GuessRow> {
        self.active_index().map(|ix| &self.rows[ix])
    }

    #[must_use]
    pub fn submitted_count(&self) -> usize {
        submitted_rows(&self.rows).count()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        submitted_rows(&self.rows).any(GuessRow::is_win)
    }

    /// Every row submitted
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.rows.iter().all(GuessRow::is_submitted)
    }

    /// Won or out of rows
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.is_won() || self.is_exhausted()
    }

    #[must_use]
    pub fn is_tallied(&self) -> bool {
        self.status.is_tallied()
    }

    fn accepts_input(&self) -> bool {
        !matches!(self.status, TurnStatus::Finished { .. })
    }

    /// Type a letter into the active row
    ///
    /// Returns false when nothing changed: finished turn or full row.
    pub fn insert_letter(&mut self, unit: CharacterUnit) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let Some(ix) = self.active_index() else {
            return false;
        };
        let row = &self.rows[ix];
        if row.word().len() >= WORD_LENGTH {
            return false;
        }

        self.rows[ix] = row.with_word(row.word().with_unit(unit));
        self.status = TurnStatus::InProgress;
        true
    }

    /// Remove the last letter of the active row
    pub fn delete_backward(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let Some(ix) = self.active_index() else {
            return false;
        };
        let row = &self.rows[ix];
        if row.word().is_empty() {
            return false;
        }

        self.rows[ix] = row.with_word(row.word().without_last());
        true
    }

    /// Submit the active row
    ///
    /// On success the row is frozen with the spelling chosen by the
    /// validator and its feedback is returned.
    ///
    /// # Errors
    /// `Rejection::Finished` once the turn is over, otherwise the
    /// validator's reason. A rejected row keeps its letters and counts one
    /// more failed attempt.
    #[instrument(
        level = "debug",
        skip_all,
        fields(expected = %self.expected, hard_mode = hard_mode)
    )]
    pub fn submit(
        &mut self,
        validator: &Validator,
        hard_mode: bool,
    ) -> Result<Feedback, Rejection> {
        if !self.accepts_input() {
            return Err(Rejection::Finished);
        }
        let ix = self.active_index().ok_or(Rejection::Finished)?;
        let current = &self.rows[ix];

        let word = match validator.can_submit(
            current.word(),
            &self.expected,
            &self.rows[..ix],
            hard_mode,
        ) {
            Ok(word) => word,
            Err(reason) => {
                debug!(%reason, "submission rejected");
                self.rows[ix] = current.rejected();
                return Err(reason);
            }
        };

        let row = GuessRow::submitted(word, self.expected.clone());
        let feedback = row
            .feedback()
            .unwrap_or_else(|| Feedback::evaluate(row.word(), &self.expected));
        debug!(word = %row.word(), %feedback, "row submitted");
        self.rows[ix] = row;

        self.status = self.derived_status(false);
        Ok(feedback)
    }

    /// Turn down the active row without consulting a validator
    ///
    /// Counts a failed attempt like a rejected [`TurnState::submit`] and
    /// hands `reason` back, or `Finished` once the turn is over.
    pub fn refuse(&mut self, reason: Rejection) -> Rejection {
        if !self.accepts_input() {
            return Rejection::Finished;
        }
        let Some(ix) = self.active_index() else {
            return Rejection::Finished;
        };
        debug!(%reason, "submission refused");
        self.rows[ix] = self.rows[ix].rejected();
        reason
    }

    /// Record that the turn has been folded into statistics
    ///
    /// Returns true the first time only. Tallying an unfinished turn (one
    /// that expired) finishes it as lost.
    pub fn mark_tallied(&mut self) -> bool {
        if self.is_tallied() {
            return false;
        }
        self.status = TurnStatus::Finished {
            is_tallied: true,
            is_won: self.is_won(),
        };
        true
    }

    /// Hints over the submitted rows
    #[must_use]
    pub fn keyboard_hints(&self) -> KeyboardHints {
        KeyboardHints::aggregate(&self.rows)
    }

    /// Shareable summary of the board
    ///
    /// ```text
    /// {title} {flag} {day} {n}/6[*]
    ///
    /// 🟩🟨⬛⬛⬛
    /// ...
    /// ```
    ///
    /// `X/6` replaces the count on a loss. The `*` marks a board where
    /// every row reused the hints of the rows before it. With
    /// `hide_first_row`, the opening row is blanked when there is more than
    /// one row.
    #[must_use]
    pub fn share_snippet(&self, title: &str, flag: &str, day: i64, hide_first_row: bool) -> String {
        let tries = if self.is_won() {
            format!("{}/{MAX_ROWS}", self.submitted_count())
        } else {
            format!("X/{MAX_ROWS}")
        };
        let hard = if rows_follow_hard_mode(&self.rows) { "*" } else { "" };

        let mut snippet = format!("{title} {flag} {day} {tries}{hard}\n\n");
        let rows: Vec<String> = submitted_rows(&self.rows)
            .filter_map(GuessRow::feedback)
            .map(|f| f.to_emoji())
            .collect();

        for (ix, row) in rows.iter().enumerate() {
            if ix == 0 && hide_first_row && rows.len() > 1 {
                snippet.push_str(&"⬜\u{fe0f}".repeat(WORD_LENGTH));
            } else {
                snippet.push_str(row);
            }
            snippet.push('\n');
        }

        snippet
    }
}

impl TurnStatus {
    #[must_use]
    pub fn is_tallied(self) -> bool {
        matches!(self, Self::Finished { is_tallied: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameLocale;
    use crate::wordlists::{AnswerPool, WordBank, WordTree};
    use chrono::TimeZone;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 3, 23, 8, 0, 0).unwrap()
    }

    fn validator() -> Validator {
        Validator::ready(
            GameLocale::EnUs,
            WordBank::new(
                AnswerPool::ordered(["comma"]),
                WordTree::from_words([
                    "plain", "warms", "thema", "aboma", "douma", "momma", "comma", "audio", "toads",
                    "about", "baton", "crane", "slate",
                ]),
            ),
        )
    }

    fn type_word(turn: &mut TurnState, text: &str) {
        for c in text.chars() {
            turn.insert_letter(CharacterUnit::single(c));
        }
    }

    fn play(turn: &mut TurnState, guesses: &[&str], hard_mode: bool) {
        let validator = validator();
        for guess in guesses {
            type_word(turn, guess);
            turn.submit(&validator, hard_mode).unwrap();
        }
    }

    #[test]
    fn new_turn_has_six_empty_rows() {
        let turn = TurnState::new(word("comma"), date());
        assert_eq!(turn.rows().len(), MAX_ROWS);
        assert_eq!(turn.status(), TurnStatus::NotStarted);
        assert_eq!(turn.active_index(), Some(0));
        assert!(turn.keyboard_hints().is_empty());
    }

    #[test]
    fn typing_starts_the_turn_and_caps_at_five() {
        let mut turn = TurnState::new(word("comma"), date());
        type_word(&mut turn, "plains");
        assert_eq!(turn.status(), TurnStatus::InProgress);
        assert_eq!(turn.active_row().unwrap().word().text(), "PLAIN");

        assert!(turn.delete_backward());
        assert_eq!(turn.active_row().unwrap().word().text(), "PLAI");
    }

    #[test]
    fn rejected_submission_counts_attempts() {
        let mut turn = TurnState::new(word("comma"), date());
        let validator = validator();

        type_word(&mut turn, "pla");
        assert_eq!(
            turn.submit(&validator, false),
            Err(Rejection::NotEnoughLetters { len: 3 })
        );
        type_word(&mut turn, "xx");
        assert_eq!(turn.submit(&validator, false), Err(Rejection::NotInWordList));
        assert_eq!(turn.submit(&validator, false), Err(Rejection::NotInWordList));

        let row = turn.active_row().unwrap();
        assert_eq!(row.attempt_count(), 2);
        assert_eq!(row.word().text(), "PLAXX");
        assert_eq!(turn.submitted_count(), 0);
    }

    #[test]
    fn refusal_counts_an_attempt() {
        let mut turn = TurnState::new(word("comma"), date());
        type_word(&mut turn, "plain");
        assert_eq!(turn.refuse(Rejection::NotInWordList), Rejection::NotInWordList);
        assert_eq!(turn.active_row().unwrap().attempt_count(), 1);
        assert_eq!(turn.submitted_count(), 0);

        let mut done = TurnState::new(word("comma"), date());
        play(&mut done, &["comma"], false);
        assert_eq!(done.refuse(Rejection::NotInWordList), Rejection::Finished);
    }

    #[test]
    fn winning_finishes_the_turn() {
        let mut turn = TurnState::new(word("baton"), date());
        play(&mut turn, &["audio", "toads", "about", "baton"], false);

        assert!(turn.is_won());
        assert_eq!(
            turn.status(),
            TurnStatus::Finished {
                is_tallied: false,
                is_won: true
            }
        );
        assert!(!turn.insert_letter(CharacterUnit::single('a')));
        assert!(!turn.delete_backward());
        assert_eq!(turn.submit(&validator(), false), Err(Rejection::Finished));
    }

    #[test]
    fn six_misses_lose_the_turn() {
        let mut turn = TurnState::new(word("baton"), date());
        play(&mut turn, &["audio", "toads", "about", "crane", "slate", "plain"], false);

        assert!(turn.is_exhausted());
        assert_eq!(
            turn.status(),
            TurnStatus::Finished {
                is_tallied: false,
                is_won: false
            }
        );
    }

    #[test]
    fn submit_returns_feedback() {
        let mut turn = TurnState::new(word("comma"), date());
        type_word(&mut turn, "momma");
        let feedback = turn.submit(&validator(), false).unwrap();
        assert_eq!(feedback, Feedback::parse("-GGGG").unwrap());
    }

    #[test]
    fn hard_mode_rejects_ignored_hints() {
        let mut turn = TurnState::new(word("comma"), date());
        play(&mut turn, &["momma"], true);
        type_word(&mut turn, "crane");
        assert_eq!(
            turn.submit(&validator(), true),
            Err(Rejection::MustMatchPosition {
                position: 1,
                letter: 'O'
            })
        );
    }

    #[test]
    fn tally_flips_once() {
        let mut turn = TurnState::new(word("baton"), date());
        play(&mut turn, &["baton"], false);
        assert!(turn.mark_tallied());
        assert!(!turn.mark_tallied());
        assert!(turn.is_tallied());
        assert_eq!(
            turn.status(),
            TurnStatus::Finished {
                is_tallied: true,
                is_won: true
            }
        );
    }

    #[test]
    fn tallying_an_expired_turn_finishes_it() {
        let mut turn = TurnState::new(word("baton"), date());
        play(&mut turn, &["audio"], false);
        assert!(turn.mark_tallied());
        assert!(!turn.insert_letter(CharacterUnit::single('a')));
    }

    #[test]
    fn restore_repairs_status() {
        let expected = word("baton");
        let rows = vec![GuessRow::submitted(word("baton"), expected.clone())];
        let turn = TurnState::restore(expected.clone(), date(), rows, TurnStatus::InProgress);
        assert_eq!(turn.rows().len(), MAX_ROWS);
        assert_eq!(
            turn.status(),
            TurnStatus::Finished {
                is_tallied: false,
                is_won: true
            }
        );

        let turn = TurnState::restore(expected, date(), Vec::new(), TurnStatus::InProgress);
        assert_eq!(turn.status(), TurnStatus::NotStarted);
    }

    #[test]
    fn share_snippet_hard_mode_loss() {
        let mut turn = TurnState::new(word("comma"), date());
        play(
            &mut turn,
            &["plain", "warms", "thema", "aboma", "douma", "momma"],
            false,
        );
        let snippet = turn.share_snippet("Wordle", "🇺🇸", 5, false);
        assert_eq!(
            snippet,
            "Wordle 🇺🇸 5 X/6*\n\n\
             ⬛⬛🟨⬛⬛\n\
             ⬛🟨⬛🟩⬛\n\
             ⬛⬛⬛🟩🟩\n\
             ⬛⬛🟨🟩🟩\n\
             ⬛🟩⬛🟩🟩\n\
             ⬛🟩🟩🟩🟩\n"
        );
    }

    #[test]
    fn share_snippet_win_with_hidden_first_row() {
        let mut turn = TurnState::new(word("baton"), date());
        play(&mut turn, &["audio", "toads", "about", "baton"], false);
        let snippet = turn.share_snippet("Wordle", "🇺🇸", 2, true);
        assert_eq!(
            snippet,
            "Wordle 🇺🇸 2 4/6*\n\n\
             ⬜\u{fe0f}⬜\u{fe0f}⬜\u{fe0f}⬜\u{fe0f}⬜\u{fe0f}\n\
             🟨🟨🟨⬛⬛\n\
             🟨🟨🟨⬛🟨\n\
             🟩🟩🟩🟩🟩\n"
        );
    }

    #[test]
    fn single_row_is_never_hidden() {
        let mut turn = TurnState::new(word("baton"), date());
        play(&mut turn, &["baton"], false);
        let snippet = turn.share_snippet("Wordle", "🇺🇸", 2, true);
        assert_eq!(snippet, "Wordle 🇺🇸 2 1/6*\n\n🟩🟩🟩🟩🟩\n");
    }
}
