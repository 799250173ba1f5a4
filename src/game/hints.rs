//! Keyboard hints
//!
//! Folds the feedback of every submitted row into one mark per letter.

use super::row::{GuessRow, submitted_rows};
use crate::core::{GameLocale, LetterMode, Mark};
use rustc_hash::FxHashMap;

/// Best known mark for each letter guessed so far
///
/// Always rebuilt from the row list with [`KeyboardHints::aggregate`]; there
/// is no incremental update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    marks: FxHashMap<char, Mark>,
}

/// What the keyboard can say about one key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyHint {
    /// Confirmed: correct or misplaced is good, absent is bad
    Known(Mark),
    /// One variant of a fold pair was ruled out, the other is untested
    Uncertain,
}

impl KeyboardHints {
    /// Fold submitted rows, oldest first
    ///
    /// A correct mark is final. A misplaced mark only yields to correct.
    /// Anything else is overwritten by the newer mark.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Mark, Word};
    /// use wordle_daily::game::{GuessRow, KeyboardHints};
    ///
    /// let secret = Word::new("fuels").unwrap();
    /// let rows = vec![GuessRow::submitted(Word::new("clues").unwrap(), secret)];
    /// let hints = KeyboardHints::aggregate(&rows);
    ///
    /// assert_eq!(hints.get('S'), Some(Mark::Correct));
    /// assert_eq!(hints.get('C'), Some(Mark::Absent));
    /// assert_eq!(hints.get('Z'), None);
    /// ```
    #[must_use]
    pub fn aggregate(rows: &[GuessRow]) -> Self {
        let mut marks = FxHashMap::default();

        for row in submitted_rows(rows) {
            let Some(feedback) = row.feedback() else {
                continue;
            };
            for (unit, &mark) in row.word().units().iter().zip(feedback.marks()) {
                let letter = unit.primary();
                match marks.get(&letter) {
                    Some(Mark::Correct) => {}
                    Some(Mark::Misplaced) if mark != Mark::Correct => {}
                    _ => {
                        marks.insert(letter, mark);
                    }
                }
            }
        }

        Self { marks }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Mark> {
        self.marks.get(&letter).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, Mark)> + '_ {
        self.marks.iter().map(|(&letter, &mark)| (letter, mark))
    }

    /// Hints as the keyboard shows them under `locale`
    ///
    /// Strict locales report every letter as known. In simplified mode both
    /// members of a fold pair share the base letter's key:
    /// - any correct variant makes the key correct
    /// - otherwise any misplaced variant makes it misplaced
    /// - both variants absent make it absent
    /// - one absent variant with an untested twin is [`KeyHint::Uncertain`]
    #[must_use]
    pub fn collapse(&self, locale: GameLocale) -> FxHashMap<char, KeyHint> {
        if locale.letter_mode() == LetterMode::Strict {
            return self
                .iter()
                .map(|(letter, mark)| (letter, KeyHint::Known(mark)))
                .collect();
        }

        let mut keys = FxHashMap::default();
        for letter in self.marks.keys() {
            let base = locale.fold(*letter);
            if keys.contains_key(&base) {
                continue;
            }
            let twin = locale.complement(base);
            let own = self.get(base);
            let other = twin.and_then(|t| self.get(t));
            keys.insert(base, collapse_pair(own, other, twin.is_some()));
        }
        keys
    }
}

fn collapse_pair(own: Option<Mark>, other: Option<Mark>, paired: bool) -> KeyHint {
    let either = |mark| own == Some(mark) || other == Some(mark);

    if either(Mark::Correct) {
        KeyHint::Known(Mark::Correct)
    } else if either(Mark::Misplaced) {
        KeyHint::Known(Mark::Misplaced)
    } else {
        match (own, other) {
            (Some(_), Some(_)) => KeyHint::Known(Mark::Absent),
            (Some(mark), None) | (None, Some(mark)) if !paired => KeyHint::Known(mark),
            _ => KeyHint::Uncertain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use proptest::prelude::*;

    const LV: GameLocale = GameLocale::LvLv { simplified: false };
    const LV_SIMPLE: GameLocale = GameLocale::LvLv { simplified: true };

    fn rows(guesses: &[&str], secret: &str) -> Vec<GuessRow> {
        let secret = Word::new(secret).unwrap();
        guesses
            .iter()
            .map(|g| GuessRow::submitted(Word::new(g).unwrap(), secret.clone()))
            .collect()
    }

    #[test]
    fn empty_rows_give_empty_hints() {
        assert!(KeyboardHints::aggregate(&[]).is_empty());
    }

    #[test]
    fn unsubmitted_rows_are_ignored() {
        let secret = Word::new("crane").unwrap();
        let rows = vec![GuessRow::empty(secret.clone()).with_word(Word::new("slate").unwrap())];
        assert!(KeyboardHints::aggregate(&rows).is_empty());
    }

    #[test]
    fn correct_is_never_downgraded() {
        // R correct in CRANE, later misplaced in ROBOT
        let hints = KeyboardHints::aggregate(&rows(&["crane", "robot"], "cramp"));
        assert_eq!(hints.get('R'), Some(Mark::Correct));
    }

    #[test]
    fn misplaced_upgrades_to_correct_only() {
        let hints = KeyboardHints::aggregate(&rows(&["robot", "crane"], "cramp"));
        assert_eq!(hints.get('R'), Some(Mark::Correct));

        // second A in MAMAN is absent but the first was already misplaced
        let hints = KeyboardHints::aggregate(&rows(&["maman"], "buzza"));
        assert_eq!(hints.get('A'), Some(Mark::Misplaced));
        assert_eq!(hints.get('M'), Some(Mark::Absent));
    }

    #[test]
    fn strict_latvian_keeps_variants_apart() {
        let rows = rows(&["zvņīa"], "zvīņa");
        let hints = KeyboardHints::aggregate(&rows);
        assert_eq!(hints.get('Ņ'), Some(Mark::Misplaced));
        assert_eq!(hints.get('Ī'), Some(Mark::Misplaced));
        assert_eq!(hints.get('N'), None);

        let keys = hints.collapse(LV);
        assert_eq!(keys.get(&'Ņ'), Some(&KeyHint::Known(Mark::Misplaced)));
        assert_eq!(keys.get(&'N'), None);
    }

    #[test]
    fn simplified_collapse_folds_onto_base_letter() {
        let keys = KeyboardHints::aggregate(&rows(&["zvņīa"], "zvīņa")).collapse(LV_SIMPLE);
        for letter in ['Z', 'V', 'A'] {
            assert_eq!(keys.get(&letter), Some(&KeyHint::Known(Mark::Correct)));
        }
        assert_eq!(keys.get(&'I'), Some(&KeyHint::Known(Mark::Misplaced)));
        assert_eq!(keys.get(&'N'), Some(&KeyHint::Known(Mark::Misplaced)));
        assert_eq!(keys.get(&'Ī'), None);
    }

    #[test]
    fn one_tried_variant_stays_uncertain() {
        let keys = KeyboardHints::aggregate(&rows(&["kaitē"], "kaite")).collapse(LV_SIMPLE);
        for letter in ['K', 'A', 'I', 'T'] {
            assert_eq!(keys.get(&letter), Some(&KeyHint::Known(Mark::Correct)));
        }
        assert_eq!(keys.get(&'E'), Some(&KeyHint::Uncertain));
    }

    #[test]
    fn both_tried_variants_are_confirmed_bad() {
        let keys =
            KeyboardHints::aggregate(&rows(&["sāpes", "šaurs"], "kaite")).collapse(LV_SIMPLE);
        assert_eq!(keys.get(&'S'), Some(&KeyHint::Known(Mark::Absent)));
        // A is correct in ŠAURS, which outranks Ā being absent
        assert_eq!(keys.get(&'A'), Some(&KeyHint::Known(Mark::Correct)));
        assert_eq!(keys.get(&'E'), Some(&KeyHint::Known(Mark::Misplaced)));
        // P has no twin
        assert_eq!(keys.get(&'P'), Some(&KeyHint::Known(Mark::Absent)));
        // Ū was never tried
        assert_eq!(keys.get(&'U'), Some(&KeyHint::Uncertain));
    }

    fn word_strategy() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-E]{5}").unwrap()
    }

    proptest! {
        #[test]
        fn aggregation_is_monotonic(
            secret in word_strategy(),
            guesses in proptest::collection::vec(word_strategy(), 1..6),
        ) {
            let guesses: Vec<&str> = guesses.iter().map(String::as_str).collect();
            let rows = rows(&guesses, &secret);

            for k in 1..rows.len() {
                let before = KeyboardHints::aggregate(&rows[..k]);
                let after = KeyboardHints::aggregate(&rows[..=k]);
                for (letter, mark) in before.iter() {
                    let now = after.get(letter);
                    match mark {
                        Mark::Correct => prop_assert_eq!(now, Some(Mark::Correct)),
                        Mark::Misplaced => prop_assert_ne!(now, Some(Mark::Absent)),
                        Mark::Absent => prop_assert!(now.is_some()),
                    }
                }
            }
        }

        #[test]
        fn aggregation_is_pure(
            secret in word_strategy(),
            guesses in proptest::collection::vec(word_strategy(), 0..6),
        ) {
            let guesses: Vec<&str> = guesses.iter().map(String::as_str).collect();
            let rows = rows(&guesses, &secret);
            prop_assert_eq!(KeyboardHints::aggregate(&rows), KeyboardHints::aggregate(&rows));
        }
    }
}
