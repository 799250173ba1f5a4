//! Hard mode: revealed hints must be reused
//!
//! Constraints are taken from the concrete letters of submitted rows, so a
//! simplified tile standing for two letters only fails when neither of them
//! can satisfy the requirement.

use super::rejection::Rejection;
use super::row::{GuessRow, submitted_rows};
use crate::core::{Mark, WORD_LENGTH, Word};
use tracing::instrument;

/// What the next guess must satisfy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    /// Letters revealed correct, by position
    exact: [Option<char>; WORD_LENGTH],
    /// Letters revealed misplaced, in first-seen order
    required: Vec<char>,
}

impl Constraints {
    /// Collect constraints from every submitted row
    #[must_use]
    pub fn from_rows(rows: &[GuessRow]) -> Self {
        let mut constraints = Self::default();

        for row in submitted_rows(rows) {
            let Some(feedback) = row.feedback() else {
                continue;
            };
            for (ix, (unit, &mark)) in row.word().units().iter().zip(feedback.marks()).enumerate() {
                let letter = unit.primary();
                match mark {
                    Mark::Correct => constraints.exact[ix] = Some(letter),
                    Mark::Misplaced if !constraints.required.contains(&letter) => {
                        constraints.required.push(letter);
                    }
                    _ => {}
                }
            }
        }

        constraints
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.iter().all(Option::is_none) && self.required.is_empty()
    }

    /// Letter required at `position`, if one was revealed there
    #[must_use]
    pub fn exact(&self, position: usize) -> Option<char> {
        self.exact.get(position).copied().flatten()
    }

    #[must_use]
    pub fn required(&self) -> &[char] {
        &self.required
    }

    /// Check a candidate against the constraints
    ///
    /// Positions are checked first, left to right. A misplaced letter only
    /// has to appear somewhere, including where it was already tried.
    ///
    /// # Errors
    /// `MustMatchPosition` for the first revealed position the candidate
    /// does not reuse, otherwise `MustContain` listing every missing letter.
    pub fn check(&self, candidate: &Word) -> Result<(), Rejection> {
        for (position, letter) in self.exact.iter().enumerate() {
            let Some(letter) = *letter else {
                continue;
            };
            if !candidate.get(position).is_some_and(|u| u.represents(letter)) {
                return Err(Rejection::MustMatchPosition { position, letter });
            }
        }

        let missing: Vec<char> = self
            .required
            .iter()
            .copied()
            .filter(|&letter| !candidate.units().iter().any(|u| u.represents(letter)))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Rejection::MustContain { letters: missing })
        }
    }
}

/// Check `candidate` against the hints revealed by `prior_rows`
///
/// Always succeeds when no row has been submitted.
///
/// # Errors
/// The first unmet constraint, see [`Constraints::check`].
///
/// # Examples
/// ```
/// use wordle_daily::core::Word;
/// use wordle_daily::game::{GuessRow, hard_mode};
///
/// let secret = Word::new("crane").unwrap();
/// let rows = vec![GuessRow::submitted(Word::new("crisp").unwrap(), secret)];
///
/// assert!(hard_mode::validate(&Word::new("crane").unwrap(), &rows).is_ok());
/// let err = hard_mode::validate(&Word::new("slate").unwrap(), &rows).unwrap_err();
/// assert_eq!(err.to_string(), "1st letter must be C");
/// ```
#[instrument(level = "debug", skip_all, fields(candidate = %candidate))]
pub fn validate(candidate: &Word, prior_rows: &[GuessRow]) -> Result<(), Rejection> {
    Constraints::from_rows(prior_rows).check(candidate)
}

/// Whether every submitted row obeyed the rows submitted before it
#[must_use]
pub fn rows_follow_hard_mode(rows: &[GuessRow]) -> bool {
    submitted_rows(rows)
        .enumerate()
        .all(|(ix, row)| validate(row.word(), &rows[..ix]).is_ok())
}
