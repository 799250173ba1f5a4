//! Reasons a guess cannot be submitted

use crate::core::WORD_LENGTH;
use std::fmt;

/// Why a submission was refused
///
/// Every variant is recoverable: the row stays editable and the host decides
/// how to surface the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// Word lists are still loading
    #[error("Wait a sec, loading words...")]
    NotReady,
    #[error("Not enough letters")]
    NotEnoughLetters { len: usize },
    #[error("Not in word list")]
    NotInWordList,
    /// Hard mode: a revealed correct letter was not reused in place
    #[error("{} must be {letter}", LetterNumber(*position))]
    MustMatchPosition { position: usize, letter: char },
    /// Hard mode: revealed misplaced letters are missing
    #[error("Guess must contain {}", join_letters(letters))]
    MustContain { letters: Vec<char> },
    /// The turn is already won or out of rows
    #[error("This turn is finished")]
    Finished,
}

impl Rejection {
    /// How far into the word the problem was found, used to keep the most
    /// specific reason when several spellings fail
    #[must_use]
    pub(crate) fn depth(&self) -> usize {
        match self {
            Self::MustMatchPosition { position, .. } => *position,
            _ => WORD_LENGTH - 1,
        }
    }
}

fn join_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// "1st letter", "2nd letter", ... for a zero-based position
struct LetterNumber(usize);

impl fmt::Display for LetterNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0 + 1;
        let suffix = match (n % 10, n % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        write!(f, "{n}{suffix} letter")
    }
}
