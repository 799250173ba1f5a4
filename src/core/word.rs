//! Word representation
//!
//! A Word is an ordered sequence of tiles. Playable words are exactly
//! [`WORD_LENGTH`] tiles long; shorter words exist while a guess is typed.

use super::letter::{CharacterUnit, canonical};
use super::locale::GameLocale;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Index;
use unicode_normalization::UnicodeNormalization;

/// Number of tiles in a playable word
pub const WORD_LENGTH: usize = 5;

/// A word made of tiles
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Word {
    units: Vec<CharacterUnit>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word contains invalid character '{0}'")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a strict, playable word from text
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if let Some(bad) = text.nfc().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }
        Self::checked_length(text.nfc().map(CharacterUnit::single).collect())
    }

    /// Create a playable word from typed text under `locale`
    ///
    /// Letters outside the locale alphabet are rejected. In simplified mode
    /// the result may contain ambiguous tiles.
    ///
    /// # Errors
    /// Returns `WordError` on a foreign letter or when the length is not 5.
    pub fn parse(text: &str, locale: GameLocale) -> Result<Self, WordError> {
        let mut units = Vec::with_capacity(WORD_LENGTH);
        for c in text.nfc() {
            if !locale.has_letter(canonical(c)) {
                return Err(WordError::InvalidCharacter(c));
            }
            units.push(CharacterUnit::typed(c, locale));
        }
        Self::checked_length(units)
    }

    /// Build an in-progress word, keeping at most 5 tiles and skipping foreign letters
    #[must_use]
    pub fn partial(text: &str, locale: GameLocale) -> Self {
        let units = text
            .nfc()
            .filter(|&c| locale.has_letter(canonical(c)))
            .map(|c| CharacterUnit::typed(c, locale))
            .take(WORD_LENGTH)
            .collect();
        Self { units }
    }

    /// Build a word from tiles without any length check
    #[must_use]
    pub fn from_units(units: Vec<CharacterUnit>) -> Self {
        Self { units }
    }

    fn checked_length(units: Vec<CharacterUnit>) -> Result<Self, WordError> {
        if units.len() == WORD_LENGTH {
            Ok(Self { units })
        } else {
            Err(WordError::InvalidLength(units.len()))
        }
    }

    /// Display text: the primary letter of every tile
    #[must_use]
    pub fn text(&self) -> String {
        self.units.iter().map(CharacterUnit::primary).collect()
    }

    #[inline]
    #[must_use]
    pub fn units(&self) -> &[CharacterUnit] {
        &self.units
    }

    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&CharacterUnit> {
        self.units.get(position)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Whether the word has all 5 tiles
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.units.len() == WORD_LENGTH
    }

    /// Game equality: same length and every position matches
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.units.len() == other.units.len()
            && self
                .units
                .iter()
                .zip(&other.units)
                .all(|(a, b)| a.matches(b))
    }

    /// Whether any tile matches `unit`
    #[must_use]
    pub fn contains(&self, unit: &CharacterUnit) -> bool {
        self.units.iter().any(|u| u.matches(unit))
    }

    /// Append a tile, ignoring it once the word is complete
    #[must_use]
    pub fn with_unit(&self, unit: CharacterUnit) -> Self {
        let mut units = self.units.clone();
        if units.len() < WORD_LENGTH {
            units.push(unit);
        }
        Self { units }
    }

    /// Drop the last tile
    #[must_use]
    pub fn without_last(&self) -> Self {
        let mut units = self.units.clone();
        units.pop();
        Self { units }
    }
}

impl Index<usize> for Word {
    type Output = CharacterUnit;

    fn index(&self, position: usize) -> &Self::Output {
        &self.units[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Words persist as one string per tile, listing every letter the tile stands for
impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tiles: Vec<String> = self
            .units
            .iter()
            .map(|u| u.letters().iter().collect())
            .collect();
        tiles.serialize(serializer)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WordRepr {
    Tiles(Vec<String>),
    Legacy(String),
}

impl<'de> Deserialize<'de> for Word {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = match WordRepr::deserialize(deserializer)? {
            WordRepr::Legacy(text) => text.nfc().map(CharacterUnit::single).collect(),
            WordRepr::Tiles(tiles) => tiles
                .iter()
                .map(|tile| {
                    CharacterUnit::ambiguous(tile.chars())
                        .ok_or_else(|| serde::de::Error::custom("empty tile"))
                })
                .collect::<Result<Vec<_>, _>>()?,
        };
        Ok(Self { units })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LV_SIMPLE: GameLocale = GameLocale::LvLv { simplified: true };

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert!(word.is_complete());
        assert!(word.units().iter().all(|u| !u.is_ambiguous()));
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("toolong"), Err(WordError::InvalidLength(7)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err());
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cran!").is_err());
    }

    #[test]
    fn word_counts_letters_not_bytes() {
        let word = Word::new("šaurs").unwrap();
        assert_eq!(word.len(), 5);
        assert_eq!(word.text(), "ŠAURS");
    }

    #[test]
    fn decomposed_input_is_composed_first() {
        let decomposed = "s\u{30C}aurs";
        assert_eq!(Word::new(decomposed), Word::new("šaurs"));

        let strict = Word::parse(decomposed, GameLocale::LvLv { simplified: false }).unwrap();
        assert_eq!(strict.text(), "ŠAURS");

        let simplified = Word::parse(decomposed, LV_SIMPLE).unwrap();
        assert_eq!(simplified[0].primary(), 'Š');
        assert_eq!(Word::partial("s\u{30C}a", LV_SIMPLE).len(), 2);
    }

    #[test]
    fn parse_rejects_letters_outside_alphabet() {
        assert_eq!(
            Word::parse("crâne", GameLocale::EnUs),
            Err(WordError::InvalidCharacter('â'))
        );
        assert!(Word::parse("crâne", GameLocale::FrFr).is_ok());
    }

    #[test]
    fn case_insensitive_match() {
        let a = Word::new("acorn").unwrap();
        let b = Word::new("ACORN").unwrap();
        let c = Word::new("blues").unwrap();
        assert!(a.matches(&b));
        assert!(!a.matches(&c));
    }

    #[test]
    fn diacritic_insensitive_match_in_simplified_mode() {
        let typed = Word::parse("saurs", LV_SIMPLE).unwrap();
        let answer = Word::new("šaurs").unwrap();
        assert!(typed.matches(&answer));
        assert!(typed[0].is_ambiguous());
    }

    #[test]
    fn diacritic_sensitive_mismatch_in_strict_mode() {
        let typed = Word::new("saurs").unwrap();
        let answer = Word::new("šaurs").unwrap();
        assert!(!typed.matches(&answer));
    }

    #[test]
    fn contains_uses_tile_matching() {
        let word = Word::new("crane").unwrap();
        assert!(word.contains(&CharacterUnit::single('n')));
        assert!(!word.contains(&CharacterUnit::single('z')));
    }

    #[test]
    fn partial_words_grow_and_shrink() {
        let word = Word::partial("cr", GameLocale::EnUs);
        assert_eq!(word.len(), 2);
        let word = word.with_unit(CharacterUnit::single('a'));
        assert_eq!(word.text(), "CRA");
        assert_eq!(word.without_last().text(), "CR");

        let full = Word::partial("cranesx", GameLocale::EnUs);
        assert_eq!(full.text(), "CRANE");
        assert_eq!(full.with_unit(CharacterUnit::single('z')).text(), "CRANE");
    }

    #[test]
    fn serde_round_trips_ambiguous_tiles() {
        let word = Word::parse("kaite", LV_SIMPLE).unwrap();
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, r#"["KĶ","AĀ","IĪ","T","EĒ"]"#);
        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);
    }

    #[test]
    fn serde_accepts_legacy_string() {
        let word: Word = serde_json::from_str("\"coder\"").unwrap();
        assert_eq!(word, Word::new("coder").unwrap());
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }
}
