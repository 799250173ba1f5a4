//! Tile letters
//!
//! A `CharacterUnit` is what one tile holds. Normally that is a single letter,
//! but in simplified mode a tile can stand for a base letter and its diacritic
//! twin at the same time (typing `S` in simplified Latvian means "S or Š").

use super::locale::{GameLocale, LetterMode};
use std::fmt;

/// Uppercase `c`, keeping it unchanged when the uppercase form is not a single char
#[must_use]
pub fn canonical(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// One tile position: one or more canonical (uppercase) letters
///
/// The first letter is the display letter. Units are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharacterUnit {
    letters: Vec<char>,
}

impl CharacterUnit {
    /// A unit holding exactly one letter
    #[must_use]
    pub fn single(letter: char) -> Self {
        Self {
            letters: vec![canonical(letter)],
        }
    }

    /// A unit representing several letters; duplicates are dropped
    ///
    /// Returns `None` for an empty letter set.
    #[must_use]
    pub fn ambiguous(letters: impl IntoIterator<Item = char>) -> Option<Self> {
        let mut unit = Vec::new();
        for letter in letters.into_iter().map(canonical) {
            if !unit.contains(&letter) {
                unit.push(letter);
            }
        }
        (!unit.is_empty()).then_some(Self { letters: unit })
    }

    /// Build the unit a keypress produces under `locale`
    ///
    /// In simplified mode a letter with a fold complement yields an ambiguous
    /// unit with the typed letter first.
    #[must_use]
    pub fn typed(letter: char, locale: GameLocale) -> Self {
        let letter = canonical(letter);
        match (locale.letter_mode(), locale.complement(letter)) {
            (LetterMode::Simplified, Some(twin)) => Self {
                letters: vec![letter, twin],
            },
            _ => Self::single(letter),
        }
    }

    /// The display letter
    #[inline]
    #[must_use]
    pub fn primary(&self) -> char {
        self.letters[0]
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.letters.len() > 1
    }

    /// Whether this unit can stand for `letter`
    #[inline]
    #[must_use]
    pub fn represents(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Tile equality: true when the two units share at least one letter
    ///
    /// Strict-mode units hold a single letter each, so this reduces to exact
    /// (case-insensitive) comparison there.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.letters.iter().any(|&l| other.represents(l))
    }
}

impl fmt::Display for CharacterUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary())
    }
}
