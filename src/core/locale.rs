//! Game locales
//!
//! A locale is more a game mode than a language tag: it decides the alphabet,
//! which letters fold together, and whether input is simplified.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How typed letters map onto tile letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterMode {
    /// Every tile holds exactly the letter that was typed
    #[default]
    Strict,
    /// Letters with a diacritic twin stand for both variants until resolved
    Simplified,
}

/// Latvian letters that fold onto a base letter in simplified mode
const LATVIAN_FOLDS: &[(char, char)] = &[
    ('Ā', 'A'),
    ('Č', 'C'),
    ('Ē', 'E'),
    ('Ģ', 'G'),
    ('Ī', 'I'),
    ('Ķ', 'K'),
    ('Ļ', 'L'),
    ('Ņ', 'N'),
    ('Š', 'S'),
    ('Ū', 'U'),
    ('Ž', 'Z'),
];

const EN_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const FR_ALPHABET: &str = "AÁÀÂBCÇDEÉÈÊFGHIÎJKLMNOÔPQRSTUÙÛVWXYZ";
const LV_ALPHABET: &str = "AĀBCČDEĒFGĢHIĪJKĶLĻMNŅOPRSŠTUŪVZŽ";
const ET_ALPHABET: &str = "ABDEFGHIJKLMNOPRSŠZŽTUVÕÄÖÜ";

/// Supported game locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GameLocale {
    #[default]
    EnUs,
    EnGb,
    FrFr,
    EtEe,
    LvLv {
        simplified: bool,
    },
}

/// Error returned when a locale identifier is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game locale: {0}")]
pub struct UnknownLocale(pub String);

impl GameLocale {
    /// All locales, in menu order
    pub const ALL: [Self; 6] = [
        Self::EnUs,
        Self::EnGb,
        Self::FrFr,
        Self::EtEe,
        Self::LvLv { simplified: false },
        Self::LvLv { simplified: true },
    ];

    /// Identifier used in configuration and storage keys
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::EnGb => "en_GB",
            Self::FrFr => "fr_FR",
            Self::EtEe => "et_EE",
            Self::LvLv { simplified: false } => "lv_LV",
            Self::LvLv { simplified: true } => "lv_LV@simplified",
        }
    }

    /// Base name of the word list files for this locale
    ///
    /// Simplified and strict Latvian share one dictionary.
    #[must_use]
    pub const fn file_base_name(self) -> &'static str {
        match self {
            Self::EnUs => "en",
            Self::EnGb => "en-GB",
            Self::FrFr => "fr",
            Self::EtEe => "ee",
            Self::LvLv { .. } => "lv",
        }
    }

    /// Storage key for the persisted turn state of this locale
    #[must_use]
    pub fn turn_state_key(self) -> String {
        format!("turnState.{}", self.file_base_name())
    }

    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::EnUs => "🇺🇸",
            Self::EnGb => "🇬🇧",
            Self::FrFr => "🇫🇷",
            Self::EtEe => "🇪🇪",
            Self::LvLv { .. } => "🇱🇻",
        }
    }

    #[must_use]
    pub const fn letter_mode(self) -> LetterMode {
        match self {
            Self::LvLv { simplified: true } => LetterMode::Simplified,
            _ => LetterMode::Strict,
        }
    }

    /// Uppercase alphabet, in keyboard-hint order
    #[must_use]
    pub const fn alphabet(self) -> &'static str {
        match self {
            Self::EnUs | Self::EnGb => EN_ALPHABET,
            Self::FrFr => FR_ALPHABET,
            Self::EtEe => ET_ALPHABET,
            Self::LvLv { .. } => LV_ALPHABET,
        }
    }

    /// Whether `letter` (already uppercase) belongs to this locale's alphabet
    #[must_use]
    pub fn has_letter(self, letter: char) -> bool {
        self.alphabet().contains(letter)
    }

    /// Pairs of (diacritic, base) letters that fold together
    #[must_use]
    pub const fn fold_pairs(self) -> &'static [(char, char)] {
        match self {
            Self::LvLv { .. } => LATVIAN_FOLDS,
            _ => &[],
        }
    }

    /// The other member of the fold pair `letter` belongs to, if any
    #[must_use]
    pub fn complement(self, letter: char) -> Option<char> {
        self.fold_pairs().iter().find_map(|&(marked, base)| {
            if letter == marked {
                Some(base)
            } else if letter == base {
                Some(marked)
            } else {
                None
            }
        })
    }

    /// Base letter for `letter`, dropping any foldable diacritic
    #[must_use]
    pub fn fold(self, letter: char) -> char {
        self.fold_pairs()
            .iter()
            .find_map(|&(marked, base)| (marked == letter).then_some(base))
            .unwrap_or(letter)
    }

    /// Compare two letters by alphabet position, falling back to code point order
    #[must_use]
    pub fn alphabet_order(self, first: char, second: char) -> std::cmp::Ordering {
        let alphabet = self.alphabet();
        match (alphabet.find(first), alphabet.find(second)) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => first.cmp(&second),
        }
    }
}

impl fmt::Display for GameLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for GameLocale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.identifier().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

impl TryFrom<String> for GameLocale {
    type Error = UnknownLocale;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GameLocale> for String {
    fn from(locale: GameLocale) -> Self {
        locale.identifier().to_string()
    }
}
