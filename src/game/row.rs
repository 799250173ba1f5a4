//! One attempt on the board

use crate::core::{Feedback, Mark, Word};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A board row: the typed word, the answer it is scored against, and
/// whether it has been submitted
///
/// Rows are created empty, edited while unsubmitted, and submitted exactly
/// once. Feedback is only revealed for submitted rows and is memoised; the
/// memo is never persisted and can always be recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRow {
    word: Word,
    expected: Word,
    is_submitted: bool,
    /// Failed submission attempts, for the host's shake animation
    #[serde(default)]
    attempt_count: u32,
    #[serde(skip)]
    feedback: OnceLock<Feedback>,
}

impl GuessRow {
    /// An empty, editable row
    #[must_use]
    pub fn empty(expected: Word) -> Self {
        Self::build(Word::default(), expected, false, 0)
    }

    /// A submitted row
    #[must_use]
    pub fn submitted(word: Word, expected: Word) -> Self {
        Self::build(word, expected, true, 0)
    }

    fn build(word: Word, expected: Word, is_submitted: bool, attempt_count: u32) -> Self {
        Self {
            word,
            expected,
            is_submitted,
            attempt_count,
            feedback: OnceLock::new(),
        }
    }

    /// The same row with different typed letters
    ///
    /// Editing clears the attempt counter. Submitted rows never change.
    #[must_use]
    pub fn with_word(&self, word: Word) -> Self {
        if self.is_submitted {
            return self.clone();
        }
        Self::build(word, self.expected.clone(), false, 0)
    }

    /// The same row after a refused submission
    #[must_use]
    pub fn rejected(&self) -> Self {
        Self::build(
            self.word.clone(),
            self.expected.clone(),
            self.is_submitted,
            self.attempt_count + 1,
        )
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn expected(&self) -> &Word {
        &self.expected
    }

    #[inline]
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    #[inline]
    #[must_use]
    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    /// Feedback for a submitted row, `None` while the row is masked
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.is_submitted.then(|| {
            *self
                .feedback
                .get_or_init(|| Feedback::evaluate(&self.word, &self.expected))
        })
    }

    #[must_use]
    pub fn mark(&self, position: usize) -> Option<Mark> {
        self.feedback().map(|f| f.mark(position))
    }

    /// Submitted and equal to the answer
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.is_submitted && self.word.matches(&self.expected)
    }

    /// Index of the next tile to fill, if the row has room
    #[must_use]
    pub fn focus_index(&self) -> Option<usize> {
        (!self.word.is_complete()).then_some(self.word.len())
    }
}

impl PartialEq for GuessRow {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
            && self.expected == other.expected
            && self.is_submitted == other.is_submitted
            && self.attempt_count == other.attempt_count
    }
}

impl Eq for GuessRow {}

/// Submitted rows, oldest first, stopping at the first unsubmitted one
pub fn submitted_rows(rows: &[GuessRow]) -> impl Iterator<Item = &GuessRow> {
    rows.iter().take_while(|r| r.is_submitted())
}
