//! Guess evaluation
//!
//! Scores a guess against the secret word, one mark per tile:
//! - Correct: right letter, right position
//! - Misplaced: letter present elsewhere (limited by the yellow budget)
//! - Absent: letter not present, or every occurrence already accounted for

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Outcome for a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mark {
    Correct,
    Misplaced,
    Absent,
}

impl Mark {
    /// Symbol used in share snippets
    #[must_use]
    pub const fn share_symbol(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All correct (the guess is the secret)
    pub const PERFECT: Self = Self([Mark::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. A tile matching the secret at the same position is correct. This
    ///    always wins over anything else.
    /// 2. Any other tile is misplaced if its yellow budget is positive.
    /// 3. Everything else is absent.
    ///
    /// Positions past the shorter word are absent; callers only score
    /// complete words.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("clues").unwrap();
    /// let secret = Word::new("fuels").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// assert_eq!(feedback.mark(4), Mark::Correct);
    /// assert_eq!(feedback.to_emoji(), "⬛🟨🟨🟨🟩");
    /// ```
    #[must_use]
    #[instrument(level = "trace", skip_all, fields(guess = %guess, secret = %secret))]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let len = guess.len().min(secret.len()).min(WORD_LENGTH);

        for (i, mark) in marks.iter_mut().enumerate().take(len) {
            if guess[i].matches(&secret[i]) {
                *mark = Mark::Correct;
            } else if yellow_budget(guess, secret, i) > 0 {
                *mark = Mark::Misplaced;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Mark at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark(&self, position: usize) -> Mark {
        self.0[position]
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬛🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for misplaced
    /// - '-'/'_'/⬛/⬜ for absent
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut chars = s.chars();

        for mark in &mut marks {
            *mark = match chars.next()? {
                'G' | 'g' | '🟩' => Mark::Correct,
                'Y' | 'y' | '🟨' => Mark::Misplaced,
                '-' | '_' | '⬛' | '⬜' => Mark::Absent,
                _ => return None,
            };
        }

        chars.next().is_none().then_some(Self(marks))
    }

    /// Emoji row, as used in share snippets
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.share_symbol()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Misplaced slots still available for the tile at `at`
///
/// `total occurrences in secret - occurrences already correct - earlier
/// non-correct occurrences in the guess`, floored at zero. Earlier tiles
/// claim the budget first, so scanning left to right hands out yellows in
/// index order.
///
/// # Panics
/// Panics if `at` is past the end of `guess`
#[must_use]
pub fn yellow_budget(guess: &Word, secret: &Word, at: usize) -> usize {
    let tile = &guess[at];
    let mut total: usize = 0;
    let mut known: usize = 0;
    let mut claimed_before: usize = 0;

    for (ix, expected) in secret.units().iter().enumerate() {
        let guessed = guess.get(ix);
        if expected.matches(tile) {
            total += 1;
            if guessed.is_some_and(|g| g.matches(tile)) {
                known += 1;
            }
        } else if ix < at && guessed.is_some_and(|g| g.matches(tile)) {
            claimed_before += 1;
        }
    }

    total.saturating_sub(known + claimed_before)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CharacterUnit, GameLocale};
    use proptest::prelude::*;

    fn score(guess: &str, secret: &str) -> Feedback {
        Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    fn marks(s: &str) -> Feedback {
        Feedback::parse(s).unwrap()
    }

    #[test]
    fn all_absent() {
        assert_eq!(score("abcde", "fghij"), marks("-----"));
    }

    #[test]
    fn all_correct() {
        assert!(score("crane", "crane").is_perfect());
        assert!(score("CRANE", "crane").is_perfect());
    }

    #[test]
    fn clues_against_fuels() {
        // C absent; L, U, E each present once elsewhere; S in place
        assert_eq!(score("clues", "fuels"), marks("-YYYG"));
    }

    #[test]
    fn single_occurrence_goes_to_earlier_duplicate() {
        // one A in BUZZA: only the first guessed A is misplaced
        assert_eq!(score("maman", "buzza"), marks("-Y---"));
    }

    #[test]
    fn correct_consumes_budget_of_duplicates() {
        // AAXAA vs ABABA: two A's are placed, one more is left for position 1
        assert_eq!(score("aaxaa", "ababa"), marks("GY--G"));
    }

    #[test]
    fn correct_beats_earlier_duplicate() {
        // ROBOT vs FLOOR: second O is in place, first O takes the remaining O
        assert_eq!(score("robot", "floor"), marks("YY-G-"));
        // SMELL has two L's: one is placed, the first guessed L takes the other
        assert_eq!(score("lolls", "smell"), marks("Y--GY"));
    }

    #[test]
    fn speed_against_erase() {
        assert_eq!(score("speed", "erase"), marks("Y-YY-"));
    }

    #[test]
    fn simplified_tiles_score_against_concrete_secret() {
        let lv = GameLocale::LvLv { simplified: true };
        let guess = Word::parse("zvina", lv).unwrap();
        let secret = Word::new("zvīņa").unwrap();
        assert!(Feedback::evaluate(&guess, &secret).is_perfect());
    }

    #[test]
    fn strict_diacritics_are_distinct_letters() {
        let guess = Word::new("zvņīa").unwrap();
        let secret = Word::new("zvīņa").unwrap();
        assert_eq!(Feedback::evaluate(&guess, &secret), marks("GGYYG"));
    }

    #[test]
    fn short_words_score_only_shared_positions() {
        let guess = Word::from_units(vec![CharacterUnit::single('c')]);
        let secret = Word::new("crane").unwrap();
        assert_eq!(Feedback::evaluate(&guess, &secret), marks("G----"));
    }

    #[test]
    fn yellow_budget_counts_down_left_to_right() {
        let guess = Word::new("maman").unwrap();
        let secret = Word::new("buzza").unwrap();
        assert_eq!(yellow_budget(&guess, &secret, 1), 1);
        assert_eq!(yellow_budget(&guess, &secret, 3), 0);
    }

    #[test]
    fn yellow_budget_is_zero_once_every_copy_is_placed() {
        let guess = Word::new("lolls").unwrap();
        let secret = Word::new("smell").unwrap();
        assert_eq!(yellow_budget(&guess, &secret, 0), 1);
        assert_eq!(yellow_budget(&guess, &secret, 2), 0);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn yellow_budget_past_the_guess_panics() {
        let guess = Word::new("crane").unwrap();
        let _ = yellow_budget(&guess, &guess, WORD_LENGTH);
    }

    #[test]
    fn parse_valid_and_invalid() {
        assert_eq!(marks("GYG--"), marks("🟩🟨🟩⬛⬛"));
        assert_eq!(marks("gyg__"), marks("🟩🟨🟩⬜⬜"));
        assert!(Feedback::parse("GYGGYX").is_none());
        assert!(Feedback::parse("GYG").is_none());
        assert!(Feedback::parse("GXGGY").is_none());
        assert!(Feedback::parse("").is_none());
    }

    #[test]
    fn counts_and_emoji() {
        let feedback = marks("YGGYY");
        assert_eq!(feedback.count(Mark::Correct), 2);
        assert_eq!(feedback.count(Mark::Misplaced), 3);
        assert_eq!(feedback.to_emoji(), "🟨🟩🟩🟨🟨");
    }

    fn word_strategy() -> impl Strategy<Value = String> {
        // a small alphabet forces plenty of repeated letters
        proptest::string::string_regex("[A-E]{5}").unwrap()
    }

    fn count_letter(word: &Word, letter: char) -> usize {
        word.units().iter().filter(|u| u.represents(letter)).count()
    }

    proptest! {
        #[test]
        fn misplaced_never_exceeds_budget(guess in word_strategy(), secret in word_strategy()) {
            let guess = Word::new(&guess).unwrap();
            let secret = Word::new(&secret).unwrap();
            let feedback = Feedback::evaluate(&guess, &secret);

            for letter in ['A', 'B', 'C', 'D', 'E'] {
                let positions = (0..WORD_LENGTH).filter(|&i| guess[i].represents(letter));
                let (correct, misplaced) =
                    positions.fold((0, 0), |(c, m), i| match feedback.mark(i) {
                        Mark::Correct => (c + 1, m),
                        Mark::Misplaced => (c, m + 1),
                        Mark::Absent => (c, m),
                    });
                prop_assert!(misplaced <= count_letter(&secret, letter) - correct);
            }
        }

        #[test]
        fn matching_position_is_always_correct(
            guess in word_strategy(),
            secret in word_strategy(),
        ) {
            let guess = Word::new(&guess).unwrap();
            let secret = Word::new(&secret).unwrap();
            let feedback = Feedback::evaluate(&guess, &secret);

            for i in 0..WORD_LENGTH {
                if guess[i].matches(&secret[i]) {
                    prop_assert_eq!(feedback.mark(i), Mark::Correct);
                } else {
                    prop_assert_ne!(feedback.mark(i), Mark::Correct);
                }
            }
        }

        #[test]
        fn misplaced_letters_exist_in_secret(guess in word_strategy(), secret in word_strategy()) {
            let guess = Word::new(&guess).unwrap();
            let secret = Word::new(&secret).unwrap();
            let feedback = Feedback::evaluate(&guess, &secret);

            for i in 0..WORD_LENGTH {
                if feedback.mark(i) == Mark::Misplaced {
                    prop_assert!(secret.contains(&guess[i]));
                }
            }
        }
    }
}
